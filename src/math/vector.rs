use crate::error::{PerceptronError, Result};

/// Fails with `DimensionMismatch` unless `v` has exactly `expected` entries.
pub fn ensure_len(context: &'static str, v: &[f64], expected: usize) -> Result<()> {
    if v.len() != expected {
        return Err(PerceptronError::mismatch(context, expected, v.len()));
    }
    Ok(())
}

/// Inner product of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    ensure_len("dot", b, a.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// In-place `y += alpha * x`.
pub fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) -> Result<()> {
    ensure_len("axpy", x, y.len())?;
    for (yi, xi) in y.iter_mut().zip(x.iter()) {
        *yi += alpha * xi;
    }
    Ok(())
}
