use thiserror::Error;

/// Errors raised while fitting or querying the score model.
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Cannot fit with zero samples")]
    EmptyTrainingSet,

    #[error("Need at least {k} samples to look up {k} neighbors, got {samples}")]
    NotEnoughSamples { k: usize, samples: usize },

    #[error("Feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Label count {labels} does not match sample count {samples}")]
    LabelCountMismatch { samples: usize, labels: usize },

    #[error("Invalid distribution parameter: {0}")]
    InvalidDistribution(String),
}
