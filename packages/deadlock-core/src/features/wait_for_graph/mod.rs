/// Wait-For Graph Feature
///
/// Turns a resource-state snapshot plus a resource model into a directed
/// graph over process ids. An edge `i → k` means process i is blocked on a
/// resource unit that process k currently holds.
///
/// ## Architecture
/// - **Domain**: WaitForGraph (ordered adjacency, deduplicated, no self loops)
/// - **Infrastructure**: WaitForGraphBuilder
///
/// ## Performance
/// - Time: O(P × R × P)
pub mod domain;
pub mod infrastructure;

pub use domain::*;
pub use infrastructure::*;
