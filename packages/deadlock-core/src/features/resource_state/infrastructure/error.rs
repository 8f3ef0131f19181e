/// Resource state validation errors
use std::fmt;
use thiserror::Error;

use crate::shared::models::ResourceId;

/// Which input table a dimension error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    Allocation,
    Request,
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixKind::Allocation => f.write_str("allocation"),
            MatrixKind::Request => f.write_str("request"),
        }
    }
}

/// Input dimensions inconsistent with the declared process/resource counts
///
/// Raised before any state is built or changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Process count must be positive")]
    NoProcesses,

    #[error("Resource count must be positive")]
    NoResources,

    #[error("The {matrix} matrix has {found} rows, expected {expected}")]
    RowCount {
        matrix: MatrixKind,
        expected: usize,
        found: usize,
    },

    #[error("Row {row} of the {matrix} matrix has {found} columns, expected {expected}")]
    ColumnCount {
        matrix: MatrixKind,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Available vector has {found} entries, expected {expected}")]
    AvailableLength { expected: usize, found: usize },

    /// Held plus free units of one resource must fit in a `u32`
    #[error("Resource {resource} has {total} units in total, more than {}", u32::MAX)]
    UnitOverflow { resource: ResourceId, total: u64 },
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
