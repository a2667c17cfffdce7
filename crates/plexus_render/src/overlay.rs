use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use plexus_core::constants::LINE_WIDTH;
use plexus_sim::network::NetworkState;

use super::surface::{GizmoSurface, draw_network};

/// Gizmo line width is a global config, not a per-call parameter.
pub fn configure_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = LINE_WIDTH;
}

/// Paint the network. Consumes the store and the line overlay computed by
/// the latest tick; reads the window only to map surface coordinates into
/// world space.
pub fn render_network(
    mut gizmos: Gizmos,
    network: Res<NetworkState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let mut surface = GizmoSurface::new(&mut gizmos, window.width(), window.height());
    draw_network(&mut surface, &network.particles, &network.connections);
}
