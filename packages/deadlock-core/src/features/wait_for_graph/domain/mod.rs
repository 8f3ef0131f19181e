/// Wait-For Graph domain model
use serde::Serialize;
use std::collections::BTreeMap;

use crate::shared::models::ProcessId;

/// Directed graph over process ids
///
/// Nodes iterate in ascending id order. Each adjacency list keeps the order
/// edges were first added; duplicates and self loops are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WaitForGraph {
    /// Adjacency list: node → processes it waits on
    adjacency: BTreeMap<ProcessId, Vec<ProcessId>>,
}

impl WaitForGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no outgoing edges (no-op if present)
    pub fn add_node(&mut self, pid: ProcessId) {
        self.adjacency.entry(pid).or_default();
    }

    /// Add `from → to`, creating both nodes if needed
    ///
    /// Returns `false` if the edge was a self loop or already present.
    pub fn add_edge(&mut self, from: ProcessId, to: ProcessId) -> bool {
        if from == to {
            return false;
        }
        self.add_node(to);
        let successors = self.adjacency.entry(from).or_default();
        if successors.contains(&to) {
            return false;
        }
        successors.push(to);
        true
    }

    /// Successors of `pid` in insertion order (empty if not a node)
    pub fn successors(&self, pid: ProcessId) -> &[ProcessId] {
        self.adjacency.get(&pid).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All nodes in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.adjacency.keys().copied()
    }

    /// All edges, grouped by source in ascending order
    pub fn edges(&self) -> impl Iterator<Item = (ProcessId, ProcessId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, tos)| tos.iter().map(move |&to| (from, to)))
    }

    pub fn contains_node(&self, pid: ProcessId) -> bool {
        self.adjacency.contains_key(&pid)
    }

    pub fn has_edge(&self, from: ProcessId, to: ProcessId) -> bool {
        self.successors(from).contains(&to)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
