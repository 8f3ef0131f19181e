/// Recovery Infrastructure
pub mod error;

pub use error::*;
