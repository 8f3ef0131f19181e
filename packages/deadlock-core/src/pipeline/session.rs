//! Detection Session
//!
//! Owns one `ResourceState` and drives the full loop:
//!
//! ```text
//! ResourceState ─build─▶ WaitForGraph ─detect─▶ DeadlockResult
//!       ▲                                             │
//!       └──────────── terminate / preempt ◀───────────┘
//! ```
//!
//! Every successful recovery action rebuilds the graph and re-runs
//! detection, so `latest()` always describes the current tables.

use tracing::{debug, info};

use crate::config::{Preset, ScenarioConfig};
use crate::errors::Result;
use crate::features::cycle_detection::{CycleDetectorPort, DeadlockResult, DfsCycleDetector};
use crate::features::recovery::{RecoveryController, RecoveryOutcome};
use crate::features::report::{GraphView, Report, ReportGenerator};
use crate::features::resource_state::{ResourceModel, ResourceState};
use crate::features::wait_for_graph::{WaitForGraph, WaitForGraphBuilder};
use crate::shared::models::ProcessId;

/// Stateful build → detect → recover → redetect loop
#[derive(Debug, Clone)]
pub struct DetectionSession<D: CycleDetectorPort = DfsCycleDetector> {
    state: ResourceState,
    /// Restored by `reset`
    initial: ResourceState,
    model: ResourceModel,
    detector: D,
    controller: RecoveryController,
    graph: WaitForGraph,
    latest: DeadlockResult,
}

impl DetectionSession<DfsCycleDetector> {
    /// Start a session with the default DFS detector and run detection
    pub fn new(state: ResourceState, model: ResourceModel) -> Self {
        Self::with_detector(state, model, DfsCycleDetector::new())
    }

    /// Start from a scenario file's tables and model
    pub fn from_config(config: &ScenarioConfig) -> Result<Self> {
        let state = config.to_state()?;
        Ok(Self::new(state, config.model))
    }

    /// Start from a built-in example scenario
    pub fn from_preset(preset: Preset) -> Result<Self> {
        info!(%preset, "loading preset scenario");
        Self::from_config(&preset.scenario())
    }
}

impl<D: CycleDetectorPort> DetectionSession<D> {
    /// Start a session with a custom detector and run detection
    pub fn with_detector(state: ResourceState, model: ResourceModel, detector: D) -> Self {
        let mut session = Self {
            initial: state.clone(),
            state,
            model,
            detector,
            controller: RecoveryController::new(),
            graph: WaitForGraph::new(),
            latest: DeadlockResult::safe(),
        };
        session.detect();
        session
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Detection
    // ═══════════════════════════════════════════════════════════════════════

    /// Rebuild the graph from the current tables and detect
    pub fn detect(&mut self) -> &DeadlockResult {
        self.graph = WaitForGraphBuilder::build(&self.state, self.model);
        self.latest = self.detector.detect(&self.graph);
        debug!(
            model = %self.model,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            deadlock = self.latest.deadlock,
            "detection pass complete"
        );
        &self.latest
    }

    /// Switch the edge policy and redetect
    pub fn set_model(&mut self, model: ResourceModel) -> &DeadlockResult {
        self.model = model;
        self.detect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Recovery
    // ═══════════════════════════════════════════════════════════════════════

    /// Terminate the selected process, then redetect
    ///
    /// A rejected selection leaves state, graph and latest result untouched.
    pub fn terminate(&mut self, selection: Option<ProcessId>) -> Result<RecoveryOutcome> {
        let outcome = self.controller.terminate(&mut self.state, selection)?;
        self.detect();
        Ok(outcome)
    }

    /// Preempt the selected process, then redetect
    pub fn preempt(&mut self, selection: Option<ProcessId>) -> Result<RecoveryOutcome> {
        let outcome = self.controller.preempt(&mut self.state, selection)?;
        self.detect();
        Ok(outcome)
    }

    /// Waiting → Running is not a supported transition; always an error
    pub fn resume(&self, selection: Option<ProcessId>) -> Result<()> {
        self.controller.resume(&self.state, selection)?;
        Ok(())
    }

    /// Running members of the latest cycle
    pub fn selectable(&self) -> Vec<ProcessId> {
        self.controller.selectable(&self.state, &self.latest)
    }

    /// Restore the tables the session started with and redetect
    ///
    /// Lifecycle states and the recovery log are cleared along with the
    /// tables. The model is kept.
    pub fn reset(&mut self) -> &DeadlockResult {
        info!("session reset to initial state");
        self.state = self.initial.clone();
        self.detect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Projections
    // ═══════════════════════════════════════════════════════════════════════

    pub fn summarize(&self) -> Report {
        ReportGenerator::summarize(&self.state, &self.latest)
    }

    pub fn graph_view(&self) -> GraphView {
        GraphView::project(&self.graph, &self.latest, &self.state)
    }

    pub fn state(&self) -> &ResourceState {
        &self.state
    }

    pub fn model(&self) -> ResourceModel {
        self.model
    }

    pub fn graph(&self) -> &WaitForGraph {
        &self.graph
    }

    pub fn latest(&self) -> &DeadlockResult {
        &self.latest
    }

    pub fn is_deadlocked(&self) -> bool {
        self.latest.deadlock
    }
}
