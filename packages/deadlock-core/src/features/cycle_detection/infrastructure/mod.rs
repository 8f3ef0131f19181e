/// Cycle Detection Infrastructure
pub mod dfs_detector;

pub use dfs_detector::*;
