//! Preset scenarios
//!
//! Presets provide complete example scenarios for demos and smoke tests.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::io::ScenarioConfig;
use crate::features::resource_state::ResourceModel;

/// Built-in scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Four-process ring with a blocked bystander
    ///
    /// - 5 processes, 4 resources, single-instance
    /// - P0..P3 each hold one resource and request the next one
    /// - P4 requests R1 and holds nothing
    /// - Nothing available; deadlock P0 → P1 → P2 → P3 → P0
    ClassicRing,

    /// Multi-instance tables whose requests can all be served
    ///
    /// - 3 processes, 2 resources, multiple-instance
    /// - Safe as given; the same tables deadlock under single-instance
    MultiInstanceSafe,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::ClassicRing, Preset::MultiInstanceSafe];

    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "classic-ring" | "classic" => Ok(Self::ClassicRing),
            "multi-instance-safe" => Ok(Self::MultiInstanceSafe),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClassicRing => "classic-ring",
            Self::MultiInstanceSafe => "multi-instance-safe",
        }
    }

    /// Scenario tables for this preset
    pub fn scenario(&self) -> ScenarioConfig {
        match self {
            Self::ClassicRing => ScenarioConfig::new(
                ResourceModel::SingleInstance,
                vec![
                    vec![1, 0, 0, 0],
                    vec![0, 1, 0, 0],
                    vec![0, 0, 1, 0],
                    vec![0, 0, 0, 1],
                    vec![0, 0, 0, 0],
                ],
                vec![
                    vec![0, 1, 0, 0],
                    vec![0, 0, 1, 0],
                    vec![0, 0, 0, 1],
                    vec![1, 0, 0, 0],
                    vec![1, 0, 0, 0],
                ],
                vec![0, 0, 0, 0],
            ),
            Self::MultiInstanceSafe => ScenarioConfig::new(
                ResourceModel::MultipleInstance,
                vec![vec![1, 0], vec![0, 1], vec![1, 0]],
                vec![vec![0, 1], vec![1, 0], vec![0, 0]],
                vec![1, 1],
            ),
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::ClassicRing
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
