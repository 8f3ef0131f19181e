//! End-to-end detection scenarios
//!
//! Tables → graph → detection → recovery → redetection → report, through
//! the public API only.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use deadlock_core::features::cycle_detection::detect;
use deadlock_core::{
    DetectionSession, Preset, ProcessState, ResourceModel, SystemStatus, WaitForGraphBuilder,
};
use pretty_assertions::assert_eq;

#[test]
fn test_classic_ring_deadlock_and_recovery() {
    let state = classic_ring();
    let mut session = DetectionSession::new(state, ResourceModel::SingleInstance);

    // P4 waits on P0 but is not part of the ring
    assert_valid_cycle(session.graph(), session.latest());
    assert_eq!(session.latest().cycle, vec![p(0), p(1), p(2), p(3), p(0)]);
    assert!(session.graph().has_edge(p(4), p(0)));
    assert_eq!(
        session.latest().headline(),
        "DEADLOCK detected involving: P0 → P1 → P2 → P3 → P0"
    );

    let outcome = session.terminate(Some(p(0))).unwrap();
    assert_eq!(
        outcome.to_string(),
        "Process P0 terminated. Resources released."
    );
    assert_eq!(session.state().available(), &[1, 0, 0, 0]);
    assert_released(session.state(), p(0));
    assert_safe(session.latest());
    assert_eq!(session.latest().headline(), "SAFE STATE: No deadlock detected.");
}

#[test]
fn test_final_report_text() {
    let mut session = DetectionSession::from_preset(Preset::ClassicRing).unwrap();
    session.terminate(Some(p(0))).unwrap();

    let report = session.summarize();
    assert_eq!(report.status, SystemStatus::Safe);
    let expected = "System Status: SAFE\n\
                    \n\
                    Process States:\n\
                    P0 → TERMINATED\n\
                    P1 → RUNNING\n\
                    P2 → RUNNING\n\
                    P3 → RUNNING\n\
                    P4 → RUNNING\n\
                    \n\
                    Available Resources:\n\
                    R1 = 1, R2 = 0, R3 = 0, R4 = 0\n\
                    \n\
                    Recovery Actions:\n\
                    • P0 terminated\n";
    assert_eq!(report.to_string(), expected);
}

#[test]
fn test_deadlocked_report_lists_detection_first() {
    let mut session = DetectionSession::new(twin_cycles(), ResourceModel::SingleInstance);
    session.preempt(Some(p(0))).unwrap();

    // P2 ⇄ P3 still deadlocked
    assert_eq!(session.latest().cycle, vec![p(2), p(3), p(2)]);
    let report = session.summarize();
    assert!(report.is_deadlocked());
    let lines: Vec<String> = report.recovery.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["Deadlock detected", "P0 preempted"]);
}

#[test]
fn test_first_cycle_by_lowest_root() {
    let state = twin_cycles();
    let graph = WaitForGraphBuilder::build(&state, ResourceModel::SingleInstance);
    let result = detect(&graph);

    assert_valid_cycle(&graph, &result);
    assert_eq!(result.cycle, vec![p(0), p(1), p(0)]);
}

#[test]
fn test_model_asymmetry() {
    let state = multi_unit();

    let single = WaitForGraphBuilder::build(&state, ResourceModel::SingleInstance);
    let multiple = WaitForGraphBuilder::build(&state, ResourceModel::MultipleInstance);

    assert_valid_cycle(&single, &detect(&single));
    assert_safe(&detect(&multiple));
    assert!(multiple.has_edge(p(0), p(1)));
    assert!(!multiple.has_edge(p(1), p(0)));
}

#[test]
fn test_detection_is_repeatable() {
    let state = classic_ring();
    let graph = WaitForGraphBuilder::build(&state, ResourceModel::SingleInstance);
    let first = detect(&graph);
    let second = detect(&graph);
    assert_eq!(first, second);

    let rebuilt = WaitForGraphBuilder::build(&state, ResourceModel::SingleInstance);
    assert_eq!(rebuilt, graph);
}

#[test]
fn test_preset_multi_instance_safe() {
    let session = DetectionSession::from_preset(Preset::MultiInstanceSafe).unwrap();
    assert_eq!(session.model(), ResourceModel::MultipleInstance);
    assert_safe(session.latest());
    assert!(session
        .state()
        .states()
        .iter()
        .all(|s| *s == ProcessState::Running));
    assert!(session.selectable().is_empty());
}

#[test]
fn test_graph_view_after_preemption() {
    let mut session = DetectionSession::from_preset(Preset::ClassicRing).unwrap();
    assert_eq!(session.graph_view().cycle_edges().count(), 4);

    session.preempt(Some(p(3))).unwrap();
    let view = session.graph_view();
    assert_eq!(view.nodes.len(), 5);
    assert_eq!(view.cycle_edges().count(), 0);
}
