use bevy::prelude::*;
use plexus_sim::pipeline::simulation_tick;
use plexus_sim::state::AppState;

use super::camera;
use super::input;
use super::overlay;
use super::ui;

/// Main render plugin for the Plexus network
pub struct PlexusRenderPlugin;

impl Plugin for PlexusRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .add_systems(
                Startup,
                (
                    camera::spawn_camera,
                    ui::spawn_hud,
                    overlay::configure_gizmos,
                ),
            )
            .add_systems(
                Update,
                (
                    // Subscribed only while Running, the state-machine
                    // analogue of registering and unregistering listeners.
                    input::pointer_move_system.run_if(in_state(AppState::Running)),
                    input::resize_system.run_if(in_state(AppState::Running)),
                    overlay::render_network
                        .after(simulation_tick)
                        .run_if(in_state(AppState::Running)),
                    ui::update_hud,
                    ui::lifecycle_control_system,
                ),
            );
    }
}
