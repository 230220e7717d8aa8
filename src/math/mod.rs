pub mod vector;

pub use vector::{axpy, dot, ensure_len};
