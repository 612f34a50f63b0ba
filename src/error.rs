//! Error types shared by every model in the crate.

use thiserror::Error;

/// Result type alias for fitting and evaluation.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Precondition failures surfaced before any matrix arithmetic runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// Row or column counts that must agree do not.
    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Which dimension was being compared.
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A fitted parameter was read before it was computed.
    #[error("{0} not fitted. Call fit() first.")]
    Uninitialized(&'static str),

    /// The batch size leaves no complete minibatch in the training set.
    #[error("batch size {batch_size} yields no complete batch over {n_samples} samples")]
    DegenerateBatch { batch_size: usize, n_samples: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid labels: {0}")]
    InvalidLabels(String),

    #[error("invalid features: {0}")]
    InvalidFeatures(String),

    #[error("dataset has no samples")]
    EmptyDataset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ModelError::ShapeMismatch {
            what: "feature columns",
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch in feature columns: expected 3, got 2"
        );

        let err = ModelError::Uninitialized("Standardizer");
        assert_eq!(err.to_string(), "Standardizer not fitted. Call fit() first.");
    }
}
