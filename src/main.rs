use bevy::prelude::*;
use plexus_core::NetworkConfig;
use plexus_render::plugin::PlexusRenderPlugin;
use plexus_sim::network::NetworkState;
use plexus_sim::pipeline::SimulationPlugin;
use plexus_sim::state::AppState;

fn main() {
    let config = NetworkConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Plexus — Particle Network".into(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.01, 0.02, 0.05)))
        .insert_resource(NetworkState::new(config))
        .init_state::<AppState>()
        .add_plugins(SimulationPlugin)
        .add_plugins(PlexusRenderPlugin)
        .run();
}
