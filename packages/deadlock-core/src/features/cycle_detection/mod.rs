/// Cycle Detection Feature
///
/// Decides whether a wait-for graph contains a deadlock and extracts one
/// witness cycle.
///
/// ## Architecture
/// - **Domain**: DeadlockResult
/// - **Infrastructure**: DfsCycleDetector (three-colour DFS, explicit stack)
/// - **Ports**: CycleDetectorPort trait
///
/// ## Performance
/// - Time: O(V + E), stack depth bounded by the process count
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::*;
pub use infrastructure::*;
pub use ports::*;
