//! Error types for deadlock-core
//!
//! Provides unified error handling across the crate. Each feature owns its
//! own error enum; `DeadlockError` wraps them for callers that drive the
//! whole pipeline.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::recovery::{RecoveryError, SelectionError};
use crate::features::resource_state::ValidationError;

/// Main error type for deadlock-core operations
#[derive(Debug, Error)]
pub enum DeadlockError {
    /// Matrix/vector dimensions inconsistent with declared counts
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Recovery action rejected
    #[error("Recovery error: {0}")]
    Recovery(#[from] RecoveryError),

    /// Scenario configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DeadlockError {
    /// True when a recovery action was rejected because of its selection
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, DeadlockError::Recovery(RecoveryError::InvalidSelection(_)))
    }

    /// Selection detail, if this is an invalid-selection error
    pub fn selection_error(&self) -> Option<&SelectionError> {
        match self {
            DeadlockError::Recovery(RecoveryError::InvalidSelection(e)) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias for deadlock-core operations
pub type Result<T> = std::result::Result<T, DeadlockError>;
