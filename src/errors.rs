use thiserror::Error;

/// Fixed message a presentation adapter shows when an add operation is
/// rejected.
pub const VALIDATION_MESSAGE: &str = "Please enter a valid description and amount.";

/// Rejection raised by the validated add operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("amount must be a positive finite number")]
    InvalidAmount,
}

/// Error type that captures common budget tracker failures.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}
