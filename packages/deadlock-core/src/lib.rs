/*
 * Deadlock Core - Wait-For Graph Deadlock Detection & Recovery
 *
 * Feature-First Architecture:
 * - shared/      : Common models (ProcessId, ResourceId, Matrix)
 * - features/    : Vertical slices (resource_state → wait_for_graph → cycle_detection → recovery → report)
 * - pipeline/    : Detection session (build → detect → recover → redetect)
 * - config/      : YAML scenario files and built-in presets
 *
 * Execution model:
 * - Fully synchronous, single-threaded
 * - Every detection pass rebuilds the graph from the current matrices
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::needless_range_loop)] // Range loop for matrix indexing

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (state → graph → cycle → recovery → report)
pub mod features;

/// Detection session orchestration
pub mod pipeline;

/// Scenario configuration (YAML v1 + presets)
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use errors::{DeadlockError, Result};
pub use shared::models::{Matrix, ProcessId, ResourceId};

pub use features::cycle_detection::{CycleDetectorPort, DeadlockResult, DfsCycleDetector};
pub use features::recovery::{
    RecoveryAction, RecoveryController, RecoveryError, RecoveryOutcome, SelectionError,
};
pub use features::report::{GraphView, Report, ReportGenerator, SystemStatus};
pub use features::resource_state::{
    ProcessState, RecoveryLog, ResourceModel, ResourceState, ValidationError,
};
pub use features::wait_for_graph::{WaitForGraph, WaitForGraphBuilder};

pub use config::{ConfigError, Preset, ScenarioConfig};
pub use pipeline::DetectionSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
