/// Recovery errors
use thiserror::Error;

use crate::shared::models::ProcessId;

/// Why a recovery selection was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No process selected")]
    NoSelection,

    #[error("Process {pid} is out of range (process count {count})")]
    OutOfRange { pid: ProcessId, count: usize },

    #[error("Process {0} is already terminated")]
    AlreadyTerminated(ProcessId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    /// Rejected before any state change
    #[error("Invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    /// Transition the state machine does not define
    #[error("Unsupported transition for {pid}: {transition}")]
    Unsupported {
        pid: ProcessId,
        transition: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, RecoveryError>;
