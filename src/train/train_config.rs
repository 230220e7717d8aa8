use serde::{Deserialize, Serialize};

use crate::error::{PerceptronError, Result};

/// Hyperparameters for one call to `Unit::train` or `Layer::train`.
///
/// # Fields
/// - `epochs`    — per-row retry budget; refilled for every row, never shared
///                 across the dataset
/// - `rate`      — learning rate applied to both weights and bias
/// - `tolerance` — a row stops early once the absolute error seen before an
///                 update drops below this value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub rate: f64,
    pub tolerance: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, rate: f64, tolerance: f64) -> Self {
        TrainConfig { epochs, rate, tolerance }
    }

    /// Rejects a zero budget and negative or non-finite rate/tolerance.
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(PerceptronError::InvalidHyperparameter(
                "epochs must be at least 1".to_string(),
            ));
        }
        if !self.rate.is_finite() || self.rate < 0.0 {
            return Err(PerceptronError::InvalidHyperparameter(format!(
                "rate must be a non-negative finite number, got {}",
                self.rate
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(PerceptronError::InvalidHyperparameter(format!(
                "tolerance must be a non-negative finite number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig { epochs: 50, rate: 0.01, tolerance: 0.0 }
    }
}

/// How `Layer::train` maps target columns onto its units.
///
/// - `AllColumns`    — for every column `i`, every unit is retrained against
///                     column `i`; the last column ends up dominating.
/// - `ColumnPerUnit` — unit `i` trains once, against column `i` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerTraining {
    #[default]
    AllColumns,
    ColumnPerUnit,
}
