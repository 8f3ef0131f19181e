//! Custom assertions for deadlock-core tests

use deadlock_core::{DeadlockResult, ProcessId, ResourceState, WaitForGraph};

/// Assert the result is a closed cycle whose consecutive pairs are edges
pub fn assert_valid_cycle(graph: &WaitForGraph, result: &DeadlockResult) {
    assert!(result.deadlock, "Expected a deadlock, got {:?}", result);
    let cycle = &result.cycle;
    assert!(cycle.len() >= 3, "Cycle too short: {:?}", cycle);
    assert_eq!(
        cycle.first(),
        cycle.last(),
        "Cycle is not closed: {:?}",
        cycle
    );
    for pair in cycle.windows(2) {
        assert!(
            graph.has_edge(pair[0], pair[1]),
            "Cycle step {} → {} is not a graph edge",
            pair[0],
            pair[1]
        );
    }
}

/// Assert the result reports no deadlock
pub fn assert_safe(result: &DeadlockResult) {
    assert!(
        !result.deadlock && result.cycle.is_empty(),
        "Expected a safe state, got cycle {:?}",
        result.cycle
    );
}

/// Assert a process holds and requests nothing
pub fn assert_released(state: &ResourceState, pid: ProcessId) {
    let i = pid.index();
    assert!(
        state.allocation().is_row_zero(i),
        "{} still holds {:?}",
        pid,
        state.allocation().row(i)
    );
    assert!(
        state.request().is_row_zero(i),
        "{} still requests {:?}",
        pid,
        state.request().row(i)
    );
}
