/// Report Feature
///
/// Read-only projections of the current state and latest detection result:
/// - `Report`: status, per-process states, available units, recovery history
/// - `GraphView`: active nodes and edges tagged for cycle highlighting
///
/// Layout and drawing of the graph are left to the caller.
pub mod application;
pub mod domain;

pub use application::*;
pub use domain::*;
