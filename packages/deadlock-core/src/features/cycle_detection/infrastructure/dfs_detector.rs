/// DfsCycleDetector - three-colour depth-first cycle search
///
/// ## Algorithm
/// 1. Visit roots in ascending process id order
/// 2. Walk successors in stored adjacency order using an explicit frame
///    stack; each node is marked `Unvisited`, `OnStack` or `Done`
/// 3. An edge into an `OnStack` node is a back edge: the cycle is the
///    current path from that node onward, closed by repeating the node
///    (path `[a, b, c]` + edge `c → b` gives `[b, c, b]`)
/// 4. The first back edge found wins; no minimality is attempted
///
/// All traversal state lives inside one `detect` call.
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::features::cycle_detection::domain::DeadlockResult;
use crate::features::cycle_detection::ports::CycleDetectorPort;
use crate::features::wait_for_graph::WaitForGraph;
use crate::shared::models::ProcessId;

/// Per-node traversal marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// One DFS frame: the node and the next successor index to try
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: ProcessId,
    cursor: usize,
}

impl Frame {
    fn new(node: ProcessId) -> Self {
        Self { node, cursor: 0 }
    }
}

/// Deterministic DFS cycle detector
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsCycleDetector;

impl DfsCycleDetector {
    pub fn new() -> Self {
        Self
    }
}

impl CycleDetectorPort for DfsCycleDetector {
    fn detect(&self, graph: &WaitForGraph) -> DeadlockResult {
        let mut marks: FxHashMap<ProcessId, Mark> = FxHashMap::default();

        for root in graph.nodes() {
            if mark_of(&marks, root) != Mark::Unvisited {
                continue;
            }
            if let Some(cycle) = visit(graph, root, &mut marks) {
                info!(cycle = ?cycle, "deadlock cycle found");
                return DeadlockResult::with_cycle(cycle);
            }
        }

        debug!(nodes = graph.node_count(), "no deadlock cycle");
        DeadlockResult::safe()
    }
}

/// Detect with the default DFS detector
pub fn detect(graph: &WaitForGraph) -> DeadlockResult {
    DfsCycleDetector.detect(graph)
}

fn mark_of(marks: &FxHashMap<ProcessId, Mark>, pid: ProcessId) -> Mark {
    marks.get(&pid).copied().unwrap_or(Mark::Unvisited)
}

/// DFS from `root`; returns the closed cycle on the first back edge
fn visit(
    graph: &WaitForGraph,
    root: ProcessId,
    marks: &mut FxHashMap<ProcessId, Mark>,
) -> Option<Vec<ProcessId>> {
    let mut stack = vec![Frame::new(root)];
    marks.insert(root, Mark::OnStack);

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let cursor = frame.cursor;
        frame.cursor += 1;

        match graph.successors(node).get(cursor).copied() {
            Some(next) => match mark_of(marks, next) {
                Mark::Unvisited => {
                    marks.insert(next, Mark::OnStack);
                    stack.push(Frame::new(next));
                }
                Mark::OnStack => {
                    let path: Vec<ProcessId> = stack.iter().map(|f| f.node).collect();
                    return close_cycle(&path, next);
                }
                Mark::Done => {}
            },
            None => {
                marks.insert(node, Mark::Done);
                stack.pop();
            }
        }
    }

    None
}

/// Suffix of `path` starting at `entry`, with `entry` appended again
fn close_cycle(path: &[ProcessId], entry: ProcessId) -> Option<Vec<ProcessId>> {
    let start = path.iter().position(|&pid| pid == entry)?;
    let mut cycle = path[start..].to_vec();
    cycle.push(entry);
    Some(cycle)
}

// ============================================================================
// Tests
// ============================================================================
