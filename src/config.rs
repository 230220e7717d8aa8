use serde::{Deserialize, Serialize};

use crate::{
    init::seeded,
    layers::layer::Layer,
    train::{LayerTraining, TrainConfig},
};

/// Describes a layer and the run that trains it.
///
/// Can be saved to / loaded from JSON independently of trained weights, so a
/// run is reproducible from its config file alone when `seed` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Human-readable name; the demo uses it as the output file stem.
    pub name: String,
    pub size: usize,
    pub input_dim: usize,
    /// Seed for weight initialization; `None` draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub training: TrainConfig,
    #[serde(default)]
    pub mode: LayerTraining,
}

impl ModelConfig {
    pub fn build_layer(&self) -> Layer {
        match self.seed {
            Some(seed) => Layer::new(self.size, self.input_dim, &mut seeded(seed)),
            None => Layer::random(self.size, self.input_dim),
        }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `ModelConfig` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<ModelConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            name: "perceptron".to_string(),
            size: 2,
            input_dim: 2,
            seed: Some(42),
            training: TrainConfig::default(),
            mode: LayerTraining::AllColumns,
        }
    }
}
