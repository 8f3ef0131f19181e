//! Report Generator Use Case
//!
//! Pure projection of `ResourceState` plus the latest `DeadlockResult` into
//! a `Report`. Never mutates its inputs.

use crate::features::cycle_detection::DeadlockResult;
use crate::features::report::domain::{
    ProcessLine, RecoveryNote, Report, ResourceLine, SystemStatus,
};
use crate::features::resource_state::ResourceState;

pub struct ReportGenerator;

impl ReportGenerator {
    /// Summarize state and the latest detection result
    ///
    /// Recovery section order: deadlock note (if any), terminated ids in
    /// insertion order, then preempted ids in insertion order.
    pub fn summarize(state: &ResourceState, latest: &DeadlockResult) -> Report {
        let status = if latest.deadlock {
            SystemStatus::Deadlock
        } else {
            SystemStatus::Safe
        };

        let processes = state
            .process_ids()
            .zip(state.states().iter().copied())
            .map(|(pid, state)| ProcessLine { pid, state })
            .collect();

        let available = state
            .resource_ids()
            .zip(state.available().iter().copied())
            .map(|(resource, available)| ResourceLine {
                resource,
                available,
            })
            .collect();

        let log = state.recovery_log();
        let mut recovery = Vec::with_capacity(1 + log.terminated().len() + log.preempted().len());
        if latest.deadlock {
            recovery.push(RecoveryNote::DeadlockDetected);
        }
        recovery.extend(
            log.terminated()
                .iter()
                .map(|&pid| RecoveryNote::Terminated { pid }),
        );
        recovery.extend(
            log.preempted()
                .iter()
                .map(|&pid| RecoveryNote::Preempted { pid }),
        );

        Report {
            status,
            processes,
            available,
            recovery,
        }
    }
}
