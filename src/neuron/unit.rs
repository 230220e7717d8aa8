use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    error::{PerceptronError, Result},
    init::UniformSource,
    math::vector::{axpy, dot, ensure_len},
    optim::DeltaRule,
    train::{RowStats, TrainConfig, TrainReport},
};

/// A single linear unit: `potential = w · x - bias`, with no activation.
///
/// The weight count is fixed at construction and every input must match it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    weights: Vec<f64>,
    bias: f64,
}

impl Unit {
    pub fn new(weights: Vec<f64>, bias: f64) -> Unit {
        Unit { weights, bias }
    }

    pub fn zeros(input_dim: usize) -> Unit {
        Unit::new(vec![0.0; input_dim], 0.0)
    }

    /// Draws `input_dim` weights and then the bias from `rng`.
    pub fn random<S: UniformSource + ?Sized>(input_dim: usize, rng: &mut S) -> Unit {
        let weights = rng.uniform_vec(input_dim);
        let bias = rng.uniform_scalar();
        Unit::new(weights, bias)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn input_dim(&self) -> usize {
        self.weights.len()
    }

    /// Raw potential for `input`.
    pub fn output(&self, input: &[f64]) -> Result<f64> {
        ensure_len("unit input", input, self.input_dim())?;
        Ok(dot(&self.weights, input)? - self.bias)
    }

    /// Trains on `inputs` row by row, mutating the unit in place.
    ///
    /// Each row gets its own budget of `config.epochs` updates. An update is
    /// always applied; the row is left once the budget runs out or the error
    /// measured before that update was below `config.tolerance`.
    ///
    /// All shapes and hyperparameters are checked first, so on error the unit
    /// is unchanged.
    pub fn train(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[f64],
        config: &TrainConfig,
    ) -> Result<TrainReport> {
        config.validate()?;
        if targets.len() != inputs.len() {
            return Err(PerceptronError::mismatch("targets", inputs.len(), targets.len()));
        }
        self.check_rows(inputs)?;

        let rule = DeltaRule::new(config.rate);
        let mut report = TrainReport::with_capacity(inputs.len());

        for (row, (input, &target)) in inputs.iter().zip(targets.iter()).enumerate() {
            let mut budget = config.epochs;
            let mut updates = 0;
            let last_error = loop {
                let error = target - self.output(input)?;
                rule.step(self, input, error)?;
                updates += 1;
                budget -= 1;
                trace!(row, updates, error, "delta step");
                if budget == 0 || error.abs() < config.tolerance {
                    break error;
                }
            };
            debug!(row, updates, last_error, "row trained");
            report.push(RowStats { updates, last_error });
        }

        Ok(report)
    }

    /// `weights += scaled_error * input; bias += scaled_error`.
    pub(crate) fn apply_delta(&mut self, input: &[f64], scaled_error: f64) -> Result<()> {
        axpy(scaled_error, input, &mut self.weights)?;
        self.bias += scaled_error;
        Ok(())
    }

    pub(crate) fn check_rows(&self, inputs: &[Vec<f64>]) -> Result<()> {
        for input in inputs {
            ensure_len("training row", input, self.input_dim())?;
        }
        Ok(())
    }
}
