//! Scenario fixtures

use deadlock_core::{Preset, ProcessId, ResourceState};

pub fn p(id: usize) -> ProcessId {
    ProcessId::new(id)
}

/// 5 processes, 4 single-instance resources, ring P0 → P1 → P2 → P3 → P0
pub fn classic_ring() -> ResourceState {
    ResourceState::from_rows(
        vec![
            vec![1, 0, 0, 0],
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ],
        vec![
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 0, 1],
            vec![1, 0, 0, 0],
            vec![1, 0, 0, 0],
        ],
        vec![0, 0, 0, 0],
    )
    .expect("classic ring fixture is well-formed")
}

/// Two disjoint two-process cycles: P0 ⇄ P1 and P2 ⇄ P3
pub fn twin_cycles() -> ResourceState {
    ResourceState::from_rows(
        vec![
            vec![1, 0, 0, 0],
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 0, 1],
        ],
        vec![
            vec![0, 1, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 1, 0],
        ],
        vec![0, 0, 0, 0],
    )
    .expect("twin cycles fixture is well-formed")
}

/// Multi-unit tables: P1's request fits in `available`, P0's does not
///
/// Single-instance: P0 ⇄ P1 deadlock. Multiple-instance: safe.
pub fn multi_unit() -> ResourceState {
    ResourceState::from_rows(
        vec![vec![2, 0], vec![0, 1]],
        vec![vec![0, 2], vec![1, 0]],
        vec![1, 1],
    )
    .expect("multi unit fixture is well-formed")
}

pub fn preset_state(preset: Preset) -> ResourceState {
    preset
        .scenario()
        .to_state()
        .expect("preset scenarios are well-formed")
}
