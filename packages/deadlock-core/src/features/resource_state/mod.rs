/// Resource State Feature
///
/// Owns the allocation matrix, request matrix, available vector, the
/// per-process lifecycle and the recovery log. It is the single source of
/// truth that recovery actions mutate.
///
/// ## Architecture
/// - **Domain**: ProcessState, ResourceModel, RecoveryLog
/// - **Infrastructure**: ResourceState, ValidationError
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
