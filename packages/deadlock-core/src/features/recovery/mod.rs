/// Recovery Feature
///
/// The per-process recovery state machine:
/// - `Running → Terminated` (terminate)
/// - `Running → Waiting` (preempt)
/// - `Waiting → Terminated` (terminate)
///
/// There is no transition from `Waiting` back to `Running`; `resume`
/// reports it as unsupported.
///
/// ## Architecture
/// - **Domain**: RecoveryAction, RecoveryOutcome
/// - **Application**: RecoveryController
/// - **Infrastructure**: RecoveryError, SelectionError
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;
