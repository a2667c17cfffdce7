use bevy::prelude::*;

/// Top-level app lifecycle, mirroring the engine phases.
///
/// TornDown is terminal for a given `NetworkState` instance; remounting
/// swaps in a fresh resource and returns here via Uninitialized.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Uninitialized,
    Running,
    TornDown,
}
