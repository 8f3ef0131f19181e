//! Recovery state machine through the session API
//!
//! Covers the lifecycle transitions, rejection without mutation and the
//! recovery log ordering seen by the report.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use deadlock_core::{
    DeadlockError, DetectionSession, ProcessState, RecoveryAction, RecoveryController,
    RecoveryError, ResourceModel, SelectionError,
};
use pretty_assertions::assert_eq;

fn ring_session() -> DetectionSession {
    DetectionSession::new(classic_ring(), ResourceModel::SingleInstance)
}

#[test]
fn test_rejections_leave_session_untouched() {
    let mut session = ring_session();
    let state_before = session.state().clone();
    let latest_before = session.latest().clone();

    let cases = [
        (None, SelectionError::NoSelection),
        (
            Some(p(9)),
            SelectionError::OutOfRange {
                pid: p(9),
                count: 5,
            },
        ),
    ];
    for (selection, expected) in cases {
        let err = session.terminate(selection).unwrap_err();
        assert_eq!(err.selection_error(), Some(&expected));
        let err = session.preempt(selection).unwrap_err();
        assert_eq!(err.selection_error(), Some(&expected));
    }

    assert_eq!(session.state(), &state_before);
    assert_eq!(session.latest(), &latest_before);
}

#[test]
fn test_terminated_is_final() {
    let mut session = ring_session();
    session.terminate(Some(p(1))).unwrap();
    let before = session.state().clone();

    for err in [
        session.terminate(Some(p(1))).unwrap_err(),
        session.preempt(Some(p(1))).unwrap_err(),
        session.resume(Some(p(1))).unwrap_err(),
    ] {
        assert_eq!(
            err.selection_error(),
            Some(&SelectionError::AlreadyTerminated(p(1)))
        );
    }
    assert_eq!(session.state(), &before);
}

#[test]
fn test_waiting_can_only_be_terminated() {
    let mut session = ring_session();
    session.preempt(Some(p(2))).unwrap();

    let err = session.resume(Some(p(2))).unwrap_err();
    assert!(matches!(
        err,
        DeadlockError::Recovery(RecoveryError::Unsupported { .. })
    ));
    assert_eq!(
        session.state().state_of(p(2)),
        Some(ProcessState::Waiting)
    );

    let outcome = session.terminate(Some(p(2))).unwrap();
    assert_eq!(outcome.action, RecoveryAction::Terminate);
    assert_eq!(outcome.previous, ProcessState::Waiting);
    assert_eq!(
        session.state().state_of(p(2)),
        Some(ProcessState::Terminated)
    );
}

#[test]
fn test_recovery_log_order() {
    let mut session = DetectionSession::new(twin_cycles(), ResourceModel::SingleInstance);
    session.preempt(Some(p(3))).unwrap();
    session.terminate(Some(p(1))).unwrap();
    session.preempt(Some(p(0))).unwrap();

    let log = session.state().recovery_log();
    assert_eq!(log.terminated(), &[p(1)]);
    assert_eq!(log.preempted(), &[p(3), p(0)]);
    assert_safe(session.latest());

    let lines: Vec<String> = session
        .summarize()
        .recovery
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(lines, vec!["P1 terminated", "P3 preempted", "P0 preempted"]);
}

#[test]
fn test_terminating_cycle_members_clears_deadlock() {
    let mut session = ring_session();
    let members = session.latest().participants();
    assert_eq!(members, vec![p(0), p(1), p(2), p(3)]);

    for pid in members {
        session.terminate(Some(pid)).unwrap();
        assert_released(session.state(), pid);
    }
    assert_safe(session.latest());
    assert_eq!(session.state().available(), &[1, 1, 1, 1]);
    assert_eq!(
        session.state().state_of(p(4)),
        Some(ProcessState::Running)
    );
}

#[test]
fn test_preempt_reclaims_multi_unit_holdings() {
    let mut state = multi_unit();
    let outcome = RecoveryController::new()
        .preempt(&mut state, Some(p(0)))
        .unwrap();

    assert_eq!(outcome.reclaimed, vec![2, 0]);
    assert_eq!(outcome.reclaimed_total(), 2);
    assert_eq!(state.available(), &[3, 1]);
    assert_released(&state, p(0));
}

#[test]
fn test_selectable_follows_latest_cycle() {
    let mut session = DetectionSession::new(twin_cycles(), ResourceModel::SingleInstance);
    assert_eq!(session.selectable(), vec![p(0), p(1)]);

    session.terminate(Some(p(0))).unwrap();
    assert_eq!(session.selectable(), vec![p(2), p(3)]);

    session.preempt(Some(p(3))).unwrap();
    assert!(session.selectable().is_empty());
}
