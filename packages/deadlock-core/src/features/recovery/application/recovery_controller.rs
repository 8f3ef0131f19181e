//! Recovery Controller Use Case
//!
//! Applies termination or preemption to a `ResourceState`. Every check runs
//! before the first write, so a rejected action leaves the state untouched.
//!
//! The controller does not rebuild the graph or re-run detection; the caller
//! (normally `DetectionSession`) does that after a successful action.

use rustc_hash::FxHashSet;
use tracing::{info, warn};

use crate::features::cycle_detection::DeadlockResult;
use crate::features::recovery::domain::{RecoveryAction, RecoveryOutcome};
use crate::features::recovery::infrastructure::{RecoveryError, Result, SelectionError};
use crate::features::resource_state::{ProcessState, ResourceState};
use crate::shared::models::ProcessId;

/// Recovery state machine over a `ResourceState`
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoveryController;

impl RecoveryController {
    pub fn new() -> Self {
        Self
    }

    /// Terminate the selected process
    ///
    /// Releases its units, marks it Terminated and moves it from the
    /// preempted list to the terminated list of the recovery log.
    ///
    /// # Errors
    /// `InvalidSelection` when nothing is selected, the id is out of range,
    /// or the process is already Terminated.
    pub fn terminate(
        &self,
        state: &mut ResourceState,
        selection: Option<ProcessId>,
    ) -> Result<RecoveryOutcome> {
        let (pid, previous) = self.validate(state, selection, RecoveryAction::Terminate)?;
        let outcome = apply(state, pid, previous, RecoveryAction::Terminate);
        state.log_mut().record_termination(pid);
        Ok(outcome)
    }

    /// Preempt the selected process
    ///
    /// Reclaims its units exactly like termination but leaves it Waiting.
    /// Preempting an already Waiting process is accepted and changes
    /// nothing further.
    ///
    /// # Errors
    /// `InvalidSelection` when nothing is selected, the id is out of range,
    /// or the process is Terminated.
    pub fn preempt(
        &self,
        state: &mut ResourceState,
        selection: Option<ProcessId>,
    ) -> Result<RecoveryOutcome> {
        let (pid, previous) = self.validate(state, selection, RecoveryAction::Preempt)?;
        let outcome = apply(state, pid, previous, RecoveryAction::Preempt);
        state.log_mut().record_preemption(pid);
        Ok(outcome)
    }

    /// Return a Waiting process to Running
    ///
    /// The recovery state machine defines no such transition, so this always
    /// fails for a valid selection and never mutates the state.
    pub fn resume(&self, state: &ResourceState, selection: Option<ProcessId>) -> Result<()> {
        let (pid, current) = check_selection(state, selection)?;
        warn!(%pid, state = %current, "resume requested but not supported");
        Err(RecoveryError::Unsupported {
            pid,
            transition: "waiting → running",
        })
    }

    /// Processes from the latest cycle that may still be selected
    ///
    /// Distinct cycle members in first-seen order, skipping Terminated and
    /// Waiting processes and ids outside the state.
    pub fn selectable(&self, state: &ResourceState, latest: &DeadlockResult) -> Vec<ProcessId> {
        if !latest.deadlock {
            return Vec::new();
        }
        let mut seen = FxHashSet::default();
        latest
            .cycle
            .iter()
            .copied()
            .filter(|pid| seen.insert(*pid))
            .filter(|&pid| state.state_of(pid) == Some(ProcessState::Running))
            .collect()
    }

    fn validate(
        &self,
        state: &ResourceState,
        selection: Option<ProcessId>,
        action: RecoveryAction,
    ) -> std::result::Result<(ProcessId, ProcessState), SelectionError> {
        let checked = check_selection(state, selection);
        if let Err(reason) = &checked {
            warn!(%action, %reason, "recovery selection rejected");
        }
        checked
    }
}

fn check_selection(
    state: &ResourceState,
    selection: Option<ProcessId>,
) -> std::result::Result<(ProcessId, ProcessState), SelectionError> {
    let pid = selection.ok_or(SelectionError::NoSelection)?;
    let count = state.process_count();
    let current = state
        .state_of(pid)
        .ok_or(SelectionError::OutOfRange { pid, count })?;
    if current.is_terminated() {
        return Err(SelectionError::AlreadyTerminated(pid));
    }
    Ok((pid, current))
}

fn apply(
    state: &mut ResourceState,
    pid: ProcessId,
    previous: ProcessState,
    action: RecoveryAction,
) -> RecoveryOutcome {
    let reclaimed = state.allocation().row(pid.index()).to_vec();
    state.release(pid);
    state.set_state(pid, action.target_state());

    info!(%pid, %action, ?reclaimed, "recovery action applied");

    RecoveryOutcome {
        action,
        pid,
        previous,
        reclaimed,
    }
}
