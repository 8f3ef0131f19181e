/// Recovery use cases
pub mod recovery_controller;

pub use recovery_controller::*;
