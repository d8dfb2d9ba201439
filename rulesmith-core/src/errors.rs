//! errors.rs - Custom error types for the rulesmith-core library.
//!
//! Forbidden and ambiguous values are not errors: they are reported through
//! `Notice`s and recovered by sanitizing. This enum covers what a caller has
//! to act on, chiefly a rejected save transaction.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use crate::store::RuleId;

/// All error types surfaced by the `rulesmith-core` library.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RulesmithError {
    /// At least one pattern or replacement was forbidden for its category.
    /// Nothing was persisted. The offending fields are emptied in the
    /// session's rule list only.
    #[error("Commit rejected: {forbidden} forbidden field(s), nothing was saved")]
    ValidationFailed { forbidden: usize },

    #[error("No rule with identity {0} in this session")]
    RuleNotFound(RuleId),

    #[error("Rule categories are locked while the folder behavior is 'fixed'")]
    CategoryLocked,

    #[error("Failed to serialize settings: {0}")]
    SerializationError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

impl RulesmithError {
    /// True for the transaction-level rejection that the user recovers from by re-editing.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, RulesmithError::ValidationFailed { .. })
    }
}
