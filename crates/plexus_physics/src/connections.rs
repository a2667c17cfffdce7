use plexus_core::constants::CONNECTION_ALPHA;
use plexus_core::{Connection, Particle};

/// Line alpha for two particles `d` apart: fades linearly from
/// CONNECTION_ALPHA at zero separation down to 0 at `radius`.
pub fn connection_opacity(d: f32, radius: f32) -> f32 {
    (1.0 - d / radius) * CONNECTION_ALPHA
}

/// Pairwise proximity scan producing the line overlay.
///
/// O(n^2) over unordered pairs; at 140 particles that is ~10K squared-distance
/// checks per frame, cheap enough that a spatial index is not warranted.
pub fn find_connections(particles: &[Particle], radius: f32) -> Vec<Connection> {
    let radius_sq = radius * radius;
    let mut connections = Vec::new();

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let dx = particles[i].x - particles[j].x;
            let dy = particles[i].y - particles[j].y;
            let d2 = dx * dx + dy * dy;

            if d2 < radius_sq {
                connections.push(Connection {
                    a: i,
                    b: j,
                    opacity: connection_opacity(d2.sqrt(), radius),
                });
            }
        }
    }

    connections
}
