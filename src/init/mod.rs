pub mod uniform;

pub use uniform::{seeded, UniformSource};
