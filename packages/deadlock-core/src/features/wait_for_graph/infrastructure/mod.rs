/// Wait-For Graph Infrastructure
pub mod builder;

pub use builder::*;
