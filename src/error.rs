use thiserror::Error;

/// Errors raised by units, layers and their training routines.
///
/// Every check runs before any weight is touched, so a returned error means
/// the model is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerceptronError {
    /// A vector or table disagrees with the shape the model expects.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
    /// `epochs`, `rate` or `tolerance` is out of range.
    #[error("invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;

impl PerceptronError {
    pub(crate) fn mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        PerceptronError::DimensionMismatch { context, expected, actual }
    }
}
