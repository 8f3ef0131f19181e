//! Scenario I/O (YAML loading)
//!
//! The version field is checked on the raw document before the schema is
//! applied, so an old or future file reports a version error instead of an
//! unknown-field error.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use crate::features::resource_state::{ResourceModel, ResourceState};

/// Schema versions this build reads
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Wait-for edge policy, `single` when omitted
    #[serde(default)]
    pub model: ResourceModel,

    /// Units held, one row per process
    pub allocation: Vec<Vec<u32>>,

    /// Units requested, one row per process
    pub request: Vec<Vec<u32>>,

    /// Free units, one entry per resource
    pub available: Vec<u32>,
}

impl ScenarioConfig {
    /// v1 scenario from raw tables
    pub fn new(
        model: ResourceModel,
        allocation: Vec<Vec<u32>>,
        request: Vec<Vec<u32>>,
        available: Vec<u32>,
    ) -> Self {
        Self {
            version: 1,
            model,
            allocation,
            request,
            available,
        }
    }

    /// Load a scenario from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading scenario");
        Self::from_yaml_str(&content)
    }

    /// Parse a scenario from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;

        // Version check
        let found = raw
            .get("version")
            .and_then(serde_yaml::Value::as_u64)
            .ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.iter().any(|&v| u64::from(v) == found) {
            return Err(ConfigError::UnsupportedVersion {
                found,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        Ok(serde_yaml::from_value(raw)?)
    }

    /// Serialize to YAML text
    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self).map_err(ConfigError::Yaml)
    }

    /// Same tables under a different model
    pub fn with_model(mut self, model: ResourceModel) -> Self {
        self.model = model;
        self
    }

    pub fn process_count(&self) -> usize {
        self.allocation.len()
    }

    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    /// Validate the tables and build the initial state
    pub fn to_state(&self) -> ConfigResult<ResourceState> {
        let state = ResourceState::from_rows(
            self.allocation.clone(),
            self.request.clone(),
            self.available.clone(),
        )?;
        Ok(state)
    }

    /// Consuming variant of [`to_state`](Self::to_state)
    pub fn into_state(self) -> ConfigResult<(ResourceModel, ResourceState)> {
        let state = ResourceState::from_rows(self.allocation, self.request, self.available)?;
        Ok((self.model, state))
    }
}

/// Parse a model name as used by the CLI and presets
pub fn parse_model(name: &str) -> ConfigResult<ResourceModel> {
    name.parse::<ResourceModel>()
        .map_err(|_| ConfigError::UnknownModel(name.to_string()))
}
