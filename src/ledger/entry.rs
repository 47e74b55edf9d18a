use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// A single income or expense record.
///
/// Entries are never mutated in place; an update is modeled as delete + add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
}

impl Entry {
    /// Validates raw form input and builds an entry with a fresh id.
    ///
    /// The description is trimmed before the emptiness check. The amount must
    /// be a finite number strictly greater than zero.
    pub fn new(description: &str, amount: f64) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            description: description.to_string(),
            amount,
        })
    }
}

/// Selects which of the two ledger collections an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}
