/// Report Domain Models
pub mod graph_view;
pub mod report;

pub use graph_view::*;
pub use report::*;
