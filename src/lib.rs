pub mod config;
pub mod error;
pub mod init;
pub mod layers;
pub mod math;
pub mod neuron;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use config::ModelConfig;
pub use error::{PerceptronError, Result};
pub use init::{seeded, UniformSource};
pub use layers::layer::Layer;
pub use neuron::unit::Unit;
pub use optim::delta::DeltaRule;
pub use train::{accuracy, classify, LayerTraining, RowStats, TrainConfig, TrainReport};
