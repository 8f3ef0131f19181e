//! Core value types: identifiers and the unit-count matrix

pub mod ids;
pub mod matrix;

pub use ids::{ProcessId, ResourceId};
pub use matrix::Matrix;
