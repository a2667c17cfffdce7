use bevy::prelude::*;
use plexus_sim::network::NetworkState;
use plexus_sim::state::AppState;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

/// Spawn the HUD overlay
pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Plexus"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgba(0.4, 0.65, 1.0, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

/// Update HUD text every 10th frame (string formatting is expensive)
pub fn update_hud(
    network: Res<NetworkState>,
    state: Res<State<AppState>>,
    mut throttle: ResMut<HudThrottle>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 10 != 0 {
        return;
    }
    let Ok(mut text) = query.get_single_mut() else {
        return;
    };

    let paused = if network.paused { " [PAUSED]" } else { "" };
    **text = format!(
        "PLEXUS | {:?}{}\n\
         Particles: {} | Links: {} | Frame: {}\n\
         \n\
         [Space] Pause  [Esc] Teardown  [R] Remount",
        state.get(),
        paused,
        network.particles.len(),
        network.connections.len(),
        network.frame,
    );
}

/// Keyboard lifecycle controls: pause, teardown, remount
pub fn lifecycle_control_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    mut network: ResMut<NetworkState>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    match state.get() {
        AppState::Running => {
            if keyboard.just_pressed(KeyCode::Space) {
                network.paused = !network.paused;
            }
            if keyboard.just_pressed(KeyCode::Escape) {
                next_state.set(AppState::TornDown);
            }
        }
        AppState::TornDown => {
            // A torn-down instance is terminal: remount swaps in a fresh one.
            if keyboard.just_pressed(KeyCode::KeyR) {
                commands.insert_resource(NetworkState::new(network.config.clone()));
                next_state.set(AppState::Uninitialized);
            }
        }
        AppState::Uninitialized => {}
    }
}
