use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowResized};
use plexus_sim::network::NetworkState;

// Event handlers only overwrite the shared pointer/bounds containers;
// the next tick consumes the values. No simulation work happens here.

/// Track the pointer in surface coordinates (origin top-left, y down),
/// which is also the simulation's coordinate space.
pub fn pointer_move_system(
    mut events: EventReader<CursorMoved>,
    mut network: ResMut<NetworkState>,
) {
    for event in events.read() {
        network.set_pointer(event.position.x, event.position.y);
    }
}

/// Follow window resizes. Bounds only; particles left outside a shrunk
/// viewport drift back via boundary reflection.
pub fn resize_system(mut events: EventReader<WindowResized>, mut network: ResMut<NetworkState>) {
    for event in events.read() {
        network.set_bounds(event.width, event.height);
    }
}
