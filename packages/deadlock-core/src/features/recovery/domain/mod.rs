/// Recovery domain models
use serde::Serialize;
use std::fmt;

use crate::features::resource_state::ProcessState;
use crate::shared::models::ProcessId;

/// Recovery action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryAction {
    /// Release everything and retire the process
    Terminate,
    /// Release everything; process stays reportable as Waiting
    Preempt,
}

impl RecoveryAction {
    /// Lifecycle state the action leaves the process in
    pub fn target_state(&self) -> ProcessState {
        match self {
            Self::Terminate => ProcessState::Terminated,
            Self::Preempt => ProcessState::Waiting,
        }
    }

    /// Past-tense verb for logs and reports
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Terminate => "terminated",
            Self::Preempt => "preempted",
        }
    }
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminate => f.write_str("terminate"),
            Self::Preempt => f.write_str("preempt"),
        }
    }
}

/// What a successful recovery action did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryOutcome {
    pub action: RecoveryAction,
    pub pid: ProcessId,
    /// State before the action
    pub previous: ProcessState,
    /// Units returned to `available`, one entry per resource
    pub reclaimed: Vec<u32>,
}

impl RecoveryOutcome {
    pub fn reclaimed_total(&self) -> u64 {
        self.reclaimed.iter().map(|&u| u64::from(u)).sum()
    }
}

impl fmt::Display for RecoveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            RecoveryAction::Terminate => {
                write!(f, "Process {} terminated. Resources released.", self.pid)
            }
            RecoveryAction::Preempt => write!(
                f,
                "Resources preempted from {}. Process moved to WAITING state.",
                self.pid
            ),
        }
    }
}
