/// Resource State Infrastructure
pub mod error;
pub mod resource_state;

pub use error::*;
pub use resource_state::*;
