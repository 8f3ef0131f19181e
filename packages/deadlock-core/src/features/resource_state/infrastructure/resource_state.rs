/// ResourceState - allocation/request/available tables plus lifecycle
///
/// The single mutable object in the system. Graph construction and cycle
/// detection only read it; `RecoveryController` is the only writer of
/// lifecycle and recovery history.
///
/// ## Invariants
/// - Both matrices are exactly P×R and `available` has R entries
/// - A Terminated process has all-zero rows in both matrices
/// - Every process has exactly one `ProcessState`
use serde::Serialize;
use tracing::debug;

use super::error::{MatrixKind, ValidationError, ValidationResult};
use crate::features::resource_state::domain::{ProcessState, RecoveryLog};
use crate::shared::models::{Matrix, ProcessId, ResourceId};

/// Resource-allocation state for a fixed set of processes and resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState {
    allocation: Matrix,
    request: Matrix,
    available: Vec<u32>,
    states: Vec<ProcessState>,
    log: RecoveryLog,
}

impl ResourceState {
    /// Build from declared counts, validating every dimension first
    ///
    /// # Errors
    /// `ValidationError` if either count is zero, any table disagrees
    /// with the declared shape, or a resource's held plus free units
    /// exceed `u32::MAX`. Nothing is built on failure.
    pub fn new(
        processes: usize,
        resources: usize,
        allocation: Vec<Vec<u32>>,
        request: Vec<Vec<u32>>,
        available: Vec<u32>,
    ) -> ValidationResult<Self> {
        if processes == 0 {
            return Err(ValidationError::NoProcesses);
        }
        if resources == 0 {
            return Err(ValidationError::NoResources);
        }

        check_shape(MatrixKind::Allocation, &allocation, processes, resources)?;
        check_shape(MatrixKind::Request, &request, processes, resources)?;

        if available.len() != resources {
            return Err(ValidationError::AvailableLength {
                expected: resources,
                found: available.len(),
            });
        }

        check_unit_totals(&allocation, &available)?;

        debug!(processes, resources, "resource state created");

        Ok(Self {
            allocation: Matrix::from_rows_unchecked(&allocation, resources),
            request: Matrix::from_rows_unchecked(&request, resources),
            available,
            states: vec![ProcessState::Running; processes],
            log: RecoveryLog::new(),
        })
    }

    /// Build with P taken from the allocation rows and R from `available`
    pub fn from_rows(
        allocation: Vec<Vec<u32>>,
        request: Vec<Vec<u32>>,
        available: Vec<u32>,
    ) -> ValidationResult<Self> {
        let processes = allocation.len();
        let resources = available.len();
        Self::new(processes, resources, allocation, request, available)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════════

    /// Return every unit held by `pid` to the pool and clear its requests
    ///
    /// No validation; callers check the selection first.
    ///
    /// # Panics
    /// If `pid` is out of range.
    pub fn release(&mut self, pid: ProcessId) {
        let row = pid.index();
        for j in 0..self.resource_count() {
            let held = self.allocation.get(row, j);
            // Cannot overflow: column totals are bounded at construction
            self.available[j] += held;
        }
        self.allocation.zero_row(row);
        self.request.zero_row(row);
    }

    /// Update the lifecycle state of `pid`
    ///
    /// # Panics
    /// If `pid` is out of range.
    pub fn set_state(&mut self, pid: ProcessId, new_state: ProcessState) {
        self.states[pid.index()] = new_state;
    }

    pub(crate) fn log_mut(&mut self) -> &mut RecoveryLog {
        &mut self.log
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════

    pub fn process_count(&self) -> usize {
        self.states.len()
    }

    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    pub fn allocation(&self) -> &Matrix {
        &self.allocation
    }

    pub fn request(&self) -> &Matrix {
        &self.request
    }

    pub fn available(&self) -> &[u32] {
        &self.available
    }

    /// Lifecycle state, or `None` when `pid` is out of range
    pub fn state_of(&self, pid: ProcessId) -> Option<ProcessState> {
        self.states.get(pid.index()).copied()
    }

    pub fn states(&self) -> &[ProcessState] {
        &self.states
    }

    pub fn contains(&self, pid: ProcessId) -> bool {
        pid.index() < self.process_count()
    }

    pub fn is_terminated(&self, pid: ProcessId) -> bool {
        self.state_of(pid).is_some_and(|s| s.is_terminated())
    }

    pub fn recovery_log(&self) -> &RecoveryLog {
        &self.log
    }

    /// All process ids in ascending order
    pub fn process_ids(&self) -> impl Iterator<Item = ProcessId> {
        (0..self.process_count()).map(ProcessId::new)
    }

    /// All resource ids in ascending order
    pub fn resource_ids(&self) -> impl Iterator<Item = ResourceId> {
        (0..self.resource_count()).map(ResourceId::new)
    }

    /// Plain-data copy for output collaborators
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            allocation: self.allocation.to_rows(),
            request: self.request.to_rows(),
            available: self.available.clone(),
            states: self.states.clone(),
        }
    }
}

/// Serializable copy of the tables and lifecycle states
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub allocation: Vec<Vec<u32>>,
    pub request: Vec<Vec<u32>>,
    pub available: Vec<u32>,
    pub states: Vec<ProcessState>,
}

/// Release only moves units from `allocation` into `available`, so
/// bounding each column total here bounds `available` forever
fn check_unit_totals(allocation: &[Vec<u32>], available: &[u32]) -> ValidationResult<()> {
    for (j, &free) in available.iter().enumerate() {
        let held: u64 = allocation.iter().map(|row| u64::from(row[j])).sum();
        let total = held + u64::from(free);
        if total > u64::from(u32::MAX) {
            return Err(ValidationError::UnitOverflow {
                resource: ResourceId::new(j),
                total,
            });
        }
    }
    Ok(())
}

fn check_shape(
    matrix: MatrixKind,
    rows: &[Vec<u32>],
    processes: usize,
    resources: usize,
) -> ValidationResult<()> {
    if rows.len() != processes {
        return Err(ValidationError::RowCount {
            matrix,
            expected: processes,
            found: rows.len(),
        });
    }
    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != resources)
    {
        return Err(ValidationError::ColumnCount {
            matrix,
            row,
            expected: resources,
            found,
        });
    }
    Ok(())
}
