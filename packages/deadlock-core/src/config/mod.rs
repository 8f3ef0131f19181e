//! Scenario Configuration
//!
//! Two ways to obtain an initial `ResourceState`:
//! - Preset: built-in example scenarios, addressed by name
//! - YAML v1: complete control over model and tables
//!
//! # Examples
//!
//! ```rust,ignore
//! use deadlock_core::config::{Preset, ScenarioConfig};
//!
//! let ring = Preset::ClassicRing.scenario();
//! let custom = ScenarioConfig::from_yaml("scenarios/ring.yaml")?;
//! let state = custom.to_state()?;
//! ```

pub mod error;
pub mod io;
pub mod preset;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{parse_model, ScenarioConfig, SUPPORTED_VERSIONS};
pub use preset::Preset;
