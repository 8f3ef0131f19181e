/// Resource State Domain Models
pub mod models;
pub mod recovery_log;

pub use models::*;
pub use recovery_log::*;
