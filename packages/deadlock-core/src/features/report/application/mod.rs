/// Report use cases
pub mod report_generator;

pub use report_generator::*;
