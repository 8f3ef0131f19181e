//! Property-based tests for graph construction and detection
//!
//! Tests invariants that should hold for ALL well-formed tables:
//! - Edge validity: every edge is backed by a request and a holding
//! - Model policy: multiple-instance edges only for unsatisfiable requests
//! - Idempotence: detect(g) == detect(g), build(s) == build(s)
//! - Cycle validity: reported cycles are closed walks over graph edges
//! - Recovery: terminating a reported cycle removes it

mod common;

use common::*;
use deadlock_core::features::cycle_detection::detect;
use deadlock_core::{ProcessId, RecoveryController, ResourceModel, ResourceState, WaitForGraphBuilder};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_tables() -> impl Strategy<Value = (Vec<Vec<u32>>, Vec<Vec<u32>>, Vec<u32>)> {
    (1usize..7, 1usize..5).prop_flat_map(|(processes, resources)| {
        (
            prop::collection::vec(prop::collection::vec(0u32..3, resources), processes),
            prop::collection::vec(prop::collection::vec(0u32..3, resources), processes),
            prop::collection::vec(0u32..3, resources),
        )
    })
}

fn arb_state() -> impl Strategy<Value = ResourceState> {
    arb_tables().prop_map(|(allocation, request, available)| {
        ResourceState::from_rows(allocation, request, available)
            .expect("generated tables have consistent shapes")
    })
}

fn arb_model() -> impl Strategy<Value = ResourceModel> {
    prop_oneof![
        Just(ResourceModel::SingleInstance),
        Just(ResourceModel::MultipleInstance),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_edges_are_justified(state in arb_state(), model in arb_model()) {
        let graph = WaitForGraphBuilder::build(&state, model);
        for (from, to) in graph.edges() {
            prop_assert_ne!(from, to);
            let justified = (0..state.resource_count()).any(|j| {
                let requested = state.request().get(from.index(), j);
                let held = state.allocation().get(to.index(), j);
                requested > 0 && held > 0 && model.blocks(requested, state.available()[j])
            });
            prop_assert!(justified, "edge {} → {} has no blocking resource", from, to);
        }
    }

    #[test]
    fn prop_multiple_edges_subset_of_single(state in arb_state()) {
        let single = WaitForGraphBuilder::build(&state, ResourceModel::SingleInstance);
        let multiple = WaitForGraphBuilder::build(&state, ResourceModel::MultipleInstance);
        for (from, to) in multiple.edges() {
            prop_assert!(single.has_edge(from, to));
        }
    }

    #[test]
    fn prop_detection_idempotent(state in arb_state(), model in arb_model()) {
        let graph = WaitForGraphBuilder::build(&state, model);
        prop_assert_eq!(WaitForGraphBuilder::build(&state, model), graph.clone());
        prop_assert_eq!(detect(&graph), detect(&graph));
    }

    #[test]
    fn prop_reported_cycle_is_valid(state in arb_state(), model in arb_model()) {
        let graph = WaitForGraphBuilder::build(&state, model);
        let result = detect(&graph);
        if result.deadlock {
            assert_valid_cycle(&graph, &result);
        } else {
            prop_assert!(result.cycle.is_empty());
        }
    }

    #[test]
    fn prop_terminating_cycle_removes_it(state in arb_state(), model in arb_model()) {
        let mut state = state;
        let graph = WaitForGraphBuilder::build(&state, model);
        let result = detect(&graph);
        if !result.deadlock {
            return Ok(());
        }

        let controller = RecoveryController::new();
        let members: Vec<ProcessId> = result.participants();
        for &pid in &members {
            controller.terminate(&mut state, Some(pid)).expect("cycle members are live");
        }

        let rebuilt = WaitForGraphBuilder::build(&state, model);
        for pid in &members {
            prop_assert!(!rebuilt.contains_node(*pid));
        }
        let after = detect(&rebuilt);
        for pid in &members {
            prop_assert!(!after.involves(*pid));
        }
    }

    #[test]
    fn prop_release_conserves_units(state in arb_state(), victim in 0usize..16) {
        let mut state = state;
        let pid = ProcessId::new(victim % state.process_count());

        let total_before: Vec<u32> = (0..state.resource_count())
            .map(|j| state.available()[j] + state.allocation().iter_rows().map(|r| r[j]).sum::<u32>())
            .collect();
        RecoveryController::new().preempt(&mut state, Some(pid)).expect("fresh state");
        let total_after: Vec<u32> = (0..state.resource_count())
            .map(|j| state.available()[j] + state.allocation().iter_rows().map(|r| r[j]).sum::<u32>())
            .collect();

        prop_assert_eq!(total_before, total_after);
        assert_released(&state, pid);
    }
}
