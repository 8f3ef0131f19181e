/// Deadlock detection result
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::shared::models::ProcessId;

/// Outcome of one detection pass
///
/// When `deadlock` is true, `cycle` is closed: its first and last entries
/// are the same process (`[P1, P2, P1]`). Otherwise `cycle` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlockResult {
    pub deadlock: bool,
    pub cycle: Vec<ProcessId>,
}

impl DeadlockResult {
    /// No cycle found
    pub fn safe() -> Self {
        Self::default()
    }

    /// A closed witness cycle
    pub fn with_cycle(cycle: Vec<ProcessId>) -> Self {
        Self {
            deadlock: true,
            cycle,
        }
    }

    /// Distinct processes of the cycle in first-seen order
    pub fn participants(&self) -> Vec<ProcessId> {
        let mut seen = FxHashSet::default();
        self.cycle
            .iter()
            .copied()
            .filter(|pid| seen.insert(*pid))
            .collect()
    }

    pub fn involves(&self, pid: ProcessId) -> bool {
        self.cycle.contains(&pid)
    }

    /// One-line human summary
    pub fn headline(&self) -> String {
        if self.deadlock {
            let chain: Vec<String> = self.cycle.iter().map(ToString::to_string).collect();
            format!("DEADLOCK detected involving: {}", chain.join(" → "))
        } else {
            "SAFE STATE: No deadlock detected.".to_string()
        }
    }
}
