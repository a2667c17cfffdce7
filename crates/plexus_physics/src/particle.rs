use plexus_core::{NetworkConfig, Particle, ViewportBounds};
use rand::Rng;

/// Generate the initial particle field for one session.
///
/// Positions are uniform over [0, width) x [0, height), velocity components
/// uniform over [-spawn_speed, spawn_speed), radii uniform over
/// [min_radius, max_radius). A degenerate (non-positive) bound axis collapses
/// that coordinate to 0.0 rather than erroring.
pub fn scatter(
    config: &NetworkConfig,
    bounds: &ViewportBounds,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(config.particle_count as usize);
    for _ in 0..config.particle_count {
        particles.push(spawn_particle(config, bounds, rng));
    }
    particles
}

fn spawn_particle(
    config: &NetworkConfig,
    bounds: &ViewportBounds,
    rng: &mut impl Rng,
) -> Particle {
    let x = if bounds.width > 0.0 {
        rng.gen_range(0.0..bounds.width)
    } else {
        0.0
    };
    let y = if bounds.height > 0.0 {
        rng.gen_range(0.0..bounds.height)
    } else {
        0.0
    };
    let (vx, vy) = if config.spawn_speed > 0.0 {
        (
            rng.gen_range(-config.spawn_speed..config.spawn_speed),
            rng.gen_range(-config.spawn_speed..config.spawn_speed),
        )
    } else {
        (0.0, 0.0)
    };

    Particle {
        x,
        y,
        vx,
        vy,
        radius: rng.gen_range(config.min_radius..config.max_radius),
    }
}
