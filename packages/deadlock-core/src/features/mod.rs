//! Feature modules
//!
//! Each feature is a vertical slice with its own domain types and,
//! where it has behaviour, an infrastructure or application layer.
//!
//! Pipeline order:
//! - `resource_state`  : allocation/request/available + lifecycle
//! - `wait_for_graph`  : process → process blocking edges
//! - `cycle_detection` : DFS deadlock witness
//! - `recovery`        : terminate / preempt state machine
//! - `report`          : structured summary and graph view

pub mod cycle_detection;
pub mod recovery;
pub mod report;
pub mod resource_state;
pub mod wait_for_graph;
