/// Cycle detector port trait
use crate::features::cycle_detection::DeadlockResult;
use crate::features::wait_for_graph::WaitForGraph;

/// Port trait for cycle detectors
///
/// Implementations must be pure: the same graph always yields the same
/// result and no traversal state survives between calls.
pub trait CycleDetectorPort {
    /// Detect a deadlock cycle in the graph
    fn detect(&self, graph: &WaitForGraph) -> DeadlockResult;
}
