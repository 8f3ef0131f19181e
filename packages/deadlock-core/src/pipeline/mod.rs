//! Detection session orchestration

pub mod session;

pub use session::DetectionSession;
