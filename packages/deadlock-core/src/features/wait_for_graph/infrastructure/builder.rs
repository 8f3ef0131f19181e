/// WaitForGraphBuilder - resource tables → wait-for graph
///
/// ## Algorithm
/// For every process i (ascending) and resource j (ascending) with
/// `request[i][j] > 0`:
/// 1. Ask the `ResourceModel` whether the request blocks
///    (SingleInstance: always; MultipleInstance: only if it exceeds
///    `available[j]`)
/// 2. If it blocks, add `i → k` for every k ≠ i (ascending) holding units
///    of j, skipping edges already present
///
/// Terminated processes never become nodes or edge endpoints.
use tracing::debug;

use crate::features::resource_state::{
    MatrixKind, ResourceModel, ResourceState, ValidationError, ValidationResult,
};
use crate::features::wait_for_graph::domain::WaitForGraph;
use crate::shared::models::{Matrix, ProcessId};

/// Pure graph construction; holds no state between calls
pub struct WaitForGraphBuilder;

impl WaitForGraphBuilder {
    /// Build from the current resource state, excluding Terminated processes
    pub fn build(state: &ResourceState, model: ResourceModel) -> WaitForGraph {
        build_graph(
            state.allocation(),
            state.request(),
            state.available(),
            model,
            |pid| !state.is_terminated(pid),
        )
    }

    /// Build from bare tables; every row is treated as a live process
    ///
    /// # Errors
    /// `ValidationError` when `request` or `available` disagree with the
    /// shape of `allocation`. Nothing is built on failure.
    pub fn build_from_parts(
        allocation: &Matrix,
        request: &Matrix,
        available: &[u32],
        model: ResourceModel,
    ) -> ValidationResult<WaitForGraph> {
        check_parts(allocation, request, available)?;
        Ok(build_graph(allocation, request, available, model, |_| true))
    }
}

/// `allocation` fixes P×R; the other tables must match it
fn check_parts(allocation: &Matrix, request: &Matrix, available: &[u32]) -> ValidationResult<()> {
    let (processes, resources) = (allocation.rows(), allocation.cols());
    if processes == 0 {
        return Err(ValidationError::NoProcesses);
    }
    if resources == 0 {
        return Err(ValidationError::NoResources);
    }
    if request.rows() != processes {
        return Err(ValidationError::RowCount {
            matrix: MatrixKind::Request,
            expected: processes,
            found: request.rows(),
        });
    }
    if request.cols() != resources {
        // Matrix rows share one width, so row 0 stands for all of them
        return Err(ValidationError::ColumnCount {
            matrix: MatrixKind::Request,
            row: 0,
            expected: resources,
            found: request.cols(),
        });
    }
    if available.len() != resources {
        return Err(ValidationError::AvailableLength {
            expected: resources,
            found: available.len(),
        });
    }
    Ok(())
}

fn build_graph(
    allocation: &Matrix,
    request: &Matrix,
    available: &[u32],
    model: ResourceModel,
    is_live: impl Fn(ProcessId) -> bool,
) -> WaitForGraph {
    let processes = allocation.rows();
    let resources = allocation.cols();
    let mut graph = WaitForGraph::new();

    for i in 0..processes {
        let pid = ProcessId::new(i);
        if is_live(pid) {
            graph.add_node(pid);
        }
    }

    for i in 0..processes {
        let waiter = ProcessId::new(i);
        if !is_live(waiter) {
            continue;
        }
        for j in 0..resources {
            if !model.blocks(request.get(i, j), available[j]) {
                continue;
            }
            for k in 0..processes {
                let holder = ProcessId::new(k);
                if k != i && allocation.get(k, j) > 0 && is_live(holder) {
                    graph.add_edge(waiter, holder);
                }
            }
        }
    }

    debug!(
        model = %model,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "wait-for graph built"
    );

    graph
}
