/// Structured system summary
use serde::Serialize;
use std::fmt;

use crate::features::resource_state::ProcessState;
use crate::shared::models::{ProcessId, ResourceId};

/// Overall status of the latest detection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SystemStatus {
    Safe,
    Deadlock,
}

impl SystemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Deadlock => "DEADLOCK",
        }
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessLine {
    pub pid: ProcessId,
    pub state: ProcessState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceLine {
    pub resource: ResourceId,
    pub available: u32,
}

/// One entry of the recovery section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecoveryNote {
    /// Leading note when the latest pass found a deadlock
    DeadlockDetected,
    Terminated { pid: ProcessId },
    Preempted { pid: ProcessId },
}

impl fmt::Display for RecoveryNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeadlockDetected => f.write_str("Deadlock detected"),
            Self::Terminated { pid } => write!(f, "{} terminated", pid),
            Self::Preempted { pid } => write!(f, "{} preempted", pid),
        }
    }
}

/// Final system state summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub status: SystemStatus,
    /// Every process, ascending id
    pub processes: Vec<ProcessLine>,
    /// Every resource, ascending id
    pub available: Vec<ResourceLine>,
    pub recovery: Vec<RecoveryNote>,
}

impl Report {
    pub fn is_deadlocked(&self) -> bool {
        self.status == SystemStatus::Deadlock
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.status {
            SystemStatus::Deadlock => "DEADLOCK EXISTS",
            SystemStatus::Safe => "SAFE",
        };
        writeln!(f, "System Status: {}", status)?;
        writeln!(f)?;

        writeln!(f, "Process States:")?;
        for line in &self.processes {
            writeln!(f, "{} → {}", line.pid, line.state)?;
        }
        writeln!(f)?;

        writeln!(f, "Available Resources:")?;
        let units: Vec<String> = self
            .available
            .iter()
            .map(|line| format!("{} = {}", line.resource, line.available))
            .collect();
        writeln!(f, "{}", units.join(", "))?;
        writeln!(f)?;

        writeln!(f, "Recovery Actions:")?;
        for note in &self.recovery {
            writeln!(f, "• {}", note)?;
        }
        Ok(())
    }
}
