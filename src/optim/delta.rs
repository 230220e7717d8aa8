use crate::{error::Result, neuron::unit::Unit};

/// The unit's update rule: `w += rate * error * x`, `bias += rate * error`.
///
/// The bias moves with the error even though `output` subtracts it; trained
/// weights saved by earlier runs depend on this sign.
pub struct DeltaRule {
    pub rate: f64,
}

impl DeltaRule {
    pub fn new(rate: f64) -> DeltaRule {
        DeltaRule { rate }
    }

    /// Applies one update to `unit` for a single input row and its error.
    pub fn step(&self, unit: &mut Unit, input: &[f64], error: f64) -> Result<()> {
        unit.apply_delta(input, self.rate * error)
    }
}
