/// Process lifecycle and resource-model selector
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Process lifecycle state
///
/// A process is in exactly one of these at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessState {
    /// Initial state; eligible for both recovery actions
    #[default]
    Running,
    /// Resources preempted; still reportable, never resumes
    Waiting,
    /// Resources released permanently; rows stay zero
    Terminated,
}

impl ProcessState {
    /// Upper-case label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "RUNNING",
            Self::Waiting => "WAITING",
            Self::Terminated => "TERMINATED",
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wait-for edge policy
///
/// The two models are deliberately asymmetric: only `MultipleInstance`
/// consults the available vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResourceModel {
    /// Any outstanding request blocks
    #[default]
    #[serde(rename = "single")]
    SingleInstance,
    /// A request blocks only if it exceeds the free units
    #[serde(rename = "multiple")]
    MultipleInstance,
}

impl ResourceModel {
    /// Whether a request of `requested` units, with `available` free units,
    /// leaves the requesting process blocked
    #[inline]
    pub fn blocks(&self, requested: u32, available: u32) -> bool {
        if requested == 0 {
            return false;
        }
        match self {
            Self::SingleInstance => true,
            Self::MultipleInstance => requested > available,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleInstance => "single",
            Self::MultipleInstance => "multiple",
        }
    }
}

impl FromStr for ResourceModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" | "single-instance" => Ok(Self::SingleInstance),
            "multiple" | "multiple-instance" => Ok(Self::MultipleInstance),
            _ => Err(format!(
                "Unknown resource model '{}'. Valid models: single, multiple",
                s
            )),
        }
    }
}

impl fmt::Display for ResourceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
