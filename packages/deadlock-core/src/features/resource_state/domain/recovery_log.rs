/// Ordered history of recovery actions
use serde::{Deserialize, Serialize};

use crate::shared::models::ProcessId;

/// Terminated and preempted process ids in insertion order
///
/// Each id appears at most once per list. Terminating a preempted process
/// moves it from `preempted` to `terminated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryLog {
    terminated: Vec<ProcessId>,
    preempted: Vec<ProcessId>,
}

impl RecoveryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terminated(&self) -> &[ProcessId] {
        &self.terminated
    }

    pub fn preempted(&self) -> &[ProcessId] {
        &self.preempted
    }

    pub fn is_empty(&self) -> bool {
        self.terminated.is_empty() && self.preempted.is_empty()
    }

    pub(crate) fn record_termination(&mut self, pid: ProcessId) {
        self.preempted.retain(|&p| p != pid);
        if !self.terminated.contains(&pid) {
            self.terminated.push(pid);
        }
    }

    pub(crate) fn record_preemption(&mut self, pid: ProcessId) {
        if !self.preempted.contains(&pid) {
            self.preempted.push(pid);
        }
    }
}
