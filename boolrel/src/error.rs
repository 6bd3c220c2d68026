//! Error types for rating-predictor operations
//!
//! Relation operations never fail; errors only come from the predictor
//! scaffolding around them.

use std::fmt;

/// Errors that can occur while maintaining a predictor's rating data
#[derive(Debug)]
pub enum PredictorError {
    /// No rating exists for the given user/item pair
    NotFound { user_id: usize, item_id: usize },
    /// Reading or writing a model file failed
    Io(std::io::Error),
    /// A model file was read but could not be used
    InvalidModel(String),
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictorError::NotFound { user_id, item_id } => {
                write!(f, "Rating not found for user {user_id}, item {item_id}")
            }
            PredictorError::Io(err) => write!(f, "Model I/O failed: {err}"),
            PredictorError::InvalidModel(reason) => write!(f, "Invalid model: {reason}"),
        }
    }
}

impl std::error::Error for PredictorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredictorError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PredictorError {
    fn from(err: std::io::Error) -> Self {
        PredictorError::Io(err)
    }
}

/// Result type for predictor operations
pub type Result<T> = std::result::Result<T, PredictorError>;
