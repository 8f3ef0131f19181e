/// Graph view projection for drawing collaborators
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::features::cycle_detection::DeadlockResult;
use crate::features::resource_state::{ProcessState, ResourceState};
use crate::features::wait_for_graph::WaitForGraph;
use crate::shared::models::ProcessId;

/// Highlight class of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// Member of the reported cycle
    Cycle,
    /// Preempted, not on the cycle
    Waiting,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewNode {
    pub pid: ProcessId,
    pub role: NodeRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewEdge {
    pub from: ProcessId,
    pub to: ProcessId,
    /// Both endpoints lie on the reported cycle
    pub on_cycle: bool,
}

/// Active nodes and edges with highlight flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<ViewEdge>,
}

impl GraphView {
    /// Project a graph for drawing
    ///
    /// Terminated processes are skipped even if a stale graph still names
    /// them. Cycle membership takes precedence over the Waiting role.
    pub fn project(graph: &WaitForGraph, latest: &DeadlockResult, state: &ResourceState) -> Self {
        let on_cycle: FxHashSet<ProcessId> = latest.cycle.iter().copied().collect();
        let active = |pid: ProcessId| !state.is_terminated(pid);

        let nodes = graph
            .nodes()
            .filter(|&pid| active(pid))
            .map(|pid| {
                let role = if on_cycle.contains(&pid) {
                    NodeRole::Cycle
                } else if state.state_of(pid) == Some(ProcessState::Waiting) {
                    NodeRole::Waiting
                } else {
                    NodeRole::Normal
                };
                ViewNode { pid, role }
            })
            .collect();

        let edges = graph
            .edges()
            .filter(|&(from, to)| active(from) && active(to))
            .map(|(from, to)| ViewEdge {
                from,
                to,
                on_cycle: on_cycle.contains(&from) && on_cycle.contains(&to),
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn cycle_edges(&self) -> impl Iterator<Item = &ViewEdge> + '_ {
        self.edges.iter().filter(|e| e.on_cycle)
    }
}
