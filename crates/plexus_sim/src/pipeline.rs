use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use plexus_core::ViewportBounds;
use rand::SeedableRng;

use super::network::NetworkState;
use super::state::AppState;

/// Bevy plugin for the simulation pipeline
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            mount_network.run_if(in_state(AppState::Uninitialized)),
        )
        .add_systems(Update, simulation_tick.run_if(in_state(AppState::Running)))
        .add_systems(OnEnter(AppState::TornDown), teardown_network);
    }
}

/// Size the simulation to the primary window and scatter the store.
///
/// No window yet means no surface to draw on: skip and retry next frame.
/// The visualization is decorative and must never block or crash the host.
pub fn mount_network(
    mut network: ResMut<NetworkState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    // Entropy-seeded so every mount yields an uncorrelated store; the
    // headless binary seeds from config for reproducible runs instead.
    let mut rng = rand_chacha::ChaCha8Rng::from_entropy();
    network.mount(
        ViewportBounds::new(window.width(), window.height()),
        &mut rng,
    );
    info!(
        "Mounted particle network: {} particles over {:.0}x{:.0}",
        network.particles.len(),
        window.width(),
        window.height()
    );
    next_state.set(AppState::Running);
}

/// Main simulation tick — one step, then the rebuilt line overlay
pub fn simulation_tick(mut network: ResMut<NetworkState>) {
    network.tick();
}

pub fn teardown_network(mut network: ResMut<NetworkState>) {
    network.teardown();
    info!("Particle network torn down");
}
