//! Error types for the kernel classifier

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("Numeric degeneracy: column {column} has zero variance")]
    NumericDegeneracy { column: usize },

    #[error("Degenerate training: {0}")]
    DegenerateTraining(String),

    #[error("Model not trained")]
    ModelNotTrained,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClassifierError {
    /// True for every error caused by malformed caller input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::DimensionMismatch { .. }
                | Self::EmptyDataset
                | Self::ParseError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
