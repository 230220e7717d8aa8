use crate::error::{PerceptronError, Result};
use crate::neuron::unit::Unit;

/// Thresholds a raw potential into a binary decision.
pub fn classify(potential: f64, threshold: f64) -> bool {
    potential > threshold
}

/// Fraction of rows where `classify(unit.output(row))` agrees with
/// `label > threshold`. Returns 0 for an empty dataset.
pub fn accuracy(unit: &Unit, inputs: &[Vec<f64>], labels: &[f64], threshold: f64) -> Result<f64> {
    if labels.len() != inputs.len() {
        return Err(PerceptronError::mismatch("labels", inputs.len(), labels.len()));
    }
    if inputs.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0usize;
    for (input, &label) in inputs.iter().zip(labels.iter()) {
        if classify(unit.output(input)?, threshold) == classify(label, threshold) {
            correct += 1;
        }
    }
    Ok(correct as f64 / inputs.len() as f64)
}
