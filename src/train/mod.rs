pub mod evaluate;
pub mod report;
pub mod train_config;

pub use evaluate::{accuracy, classify};
pub use report::{RowStats, TrainReport};
pub use train_config::{LayerTraining, TrainConfig};
