use bevy::prelude::*;
use plexus_core::{Connection, NetworkConfig, Particle, PointerState, ViewportBounds};
use plexus_physics::{connections, forces, particle};
use rand::Rng;

/// Engine lifecycle for one `NetworkState` instance.
/// TornDown is terminal; restarting means constructing a fresh instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    TornDown,
}

/// Shared simulation state, tracked as a Bevy Resource.
///
/// Writer discipline (single thread, one writer per field): the pointer-move
/// system writes `pointer`, the resize system writes `bounds`, `tick` mutates
/// `particles` and `connections`, and nothing else touches them. Event
/// handlers never run simulation work; their writes are consumed by the
/// next tick.
#[derive(Resource)]
pub struct NetworkState {
    pub config: NetworkConfig,
    /// Liveness flag, checked at the top of every tick so a frame already
    /// scheduled when teardown lands becomes a no-op instead of a race.
    phase: Phase,
    /// The particle store. Fixed length while Running; emptied at teardown.
    pub particles: Vec<Particle>,
    /// Line overlay derived from the store by the most recent tick.
    pub connections: Vec<Connection>,
    pub pointer: PointerState,
    pub bounds: ViewportBounds,
    /// Whether simulation is paused
    pub paused: bool,
    /// Ticks since mount
    pub frame: u64,
}

impl NetworkState {
    /// Fresh instance with no particles; call `mount` to start.
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            phase: Phase::Uninitialized,
            particles: Vec::new(),
            connections: Vec::new(),
            pointer: PointerState::default(),
            bounds: ViewportBounds::new(0.0, 0.0),
            paused: false,
            frame: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Scatter a fresh store over `bounds` and start ticking.
    ///
    /// Only valid from Uninitialized. A torn-down instance stays torn down;
    /// the host remounts by swapping in a new instance.
    pub fn mount(&mut self, bounds: ViewportBounds, rng: &mut impl Rng) {
        if self.phase != Phase::Uninitialized {
            warn!("mount ignored in phase {:?}", self.phase);
            return;
        }
        self.bounds = bounds;
        self.particles = particle::scatter(&self.config, &bounds, rng);
        self.connections =
            connections::find_connections(&self.particles, self.config.connection_radius);
        self.phase = Phase::Running;
    }

    /// Advance every particle one frame, then rebuild the line overlay.
    ///
    /// Sub-step order is canonical: integrate, reflect, repel, damp.
    /// Reflection reads the pre-repulsion position, and damping runs after
    /// repulsion so it bounds the per-frame velocity delta. Reflection only
    /// flips the velocity sign; the particle may sit outside bounds for one
    /// frame before its reversed drift brings it back.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running || self.paused {
            return;
        }
        self.frame += 1;

        let width = self.bounds.width;
        let height = self.bounds.height;
        let pointer = self.pointer.position;

        for p in self.particles.iter_mut() {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > height {
                p.vy = -p.vy;
            }

            if let Some(pointer) = pointer {
                let [dvx, dvy] = forces::pointer_repulsion(
                    [p.x, p.y],
                    pointer,
                    self.config.repulsion_radius,
                    self.config.repulsion_strength,
                );
                p.vx += dvx;
                p.vy += dvy;
            }

            p.vx *= self.config.damping;
            p.vy *= self.config.damping;
        }

        self.connections =
            connections::find_connections(&self.particles, self.config.connection_radius);
    }

    /// Overwrite the last known pointer position (surface coordinates).
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.position = Some([x, y]);
    }

    /// Overwrite the viewport bounds. Existing particles are not repositioned.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = ViewportBounds::new(width, height);
    }

    /// Drop the store and stop ticking. Idempotent, and terminal for this
    /// instance.
    pub fn teardown(&mut self) {
        self.particles.clear();
        self.connections.clear();
        self.phase = Phase::TornDown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn mounted(seed: u64, width: f32, height: f32) -> NetworkState {
        let config = NetworkConfig {
            seed,
            ..NetworkConfig::default()
        };
        let mut network = NetworkState::new(config);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        network.mount(ViewportBounds::new(width, height), &mut rng);
        network
    }

    fn single(network: &mut NetworkState, x: f32, y: f32, vx: f32, vy: f32) {
        network.particles = vec![Particle {
            x,
            y,
            vx,
            vy,
            radius: 1.0,
        }];
    }

    #[test]
    fn test_edge_particles_step_inward_without_flip() {
        let mut network = mounted(1, 800.0, 600.0);
        network.particles = vec![
            Particle { x: 0.0, y: 300.0, vx: 1.0, vy: 0.0, radius: 1.0 },
            Particle { x: 800.0, y: 300.0, vx: -1.0, vy: 0.0, radius: 1.0 },
        ];

        network.tick();

        // Both stepped inward and stayed inside [0, 800]: no sign flip,
        // only damping applied.
        assert_eq!(network.particles[0].x, 1.0);
        assert_eq!(network.particles[1].x, 799.0);
        assert!(network.particles[0].vx > 0.0);
        assert!(network.particles[1].vx < 0.0);
    }

    #[test]
    fn test_boundary_crossing_flips_velocity_sign() {
        let mut network = mounted(1, 800.0, 600.0);
        single(&mut network, 800.0, 300.0, 1.0, 0.0);

        network.tick();

        // Integration carries the particle to 801, outside [0, 800]; the
        // reflection flips vx and damping scales it. No positional clamp.
        let p = &network.particles[0];
        assert_eq!(p.x, 801.0);
        assert!((p.vx + 0.99).abs() < 1e-6, "vx = {}", p.vx);

        network.tick();
        assert!(network.particles[0].x < 801.0);
    }

    #[test]
    fn test_damping_only_decay() {
        let mut network = mounted(1, 800.0, 600.0);
        single(&mut network, 400.0, 300.0, 0.2, 0.0);

        let mut last = 0.2f32;
        for k in 1..=20u32 {
            network.tick();
            let vx = network.particles[0].vx;
            let expected = 0.2 * 0.99f32.powi(k as i32);
            assert!((vx - expected).abs() < 1e-5, "k = {}: vx = {}", k, vx);
            assert!(vx < last && vx > 0.0);
            last = vx;
        }
    }

    #[test]
    fn test_pointer_repulsion_pushes_particle_away() {
        let mut network = mounted(1, 800.0, 600.0);
        single(&mut network, 400.0, 300.0, 0.0, 0.0);
        // Pointer just right of the particle: push goes left.
        network.set_pointer(450.0, 300.0);

        network.tick();

        assert!(network.particles[0].vx < 0.0);
        assert_eq!(network.particles[0].vy, 0.0);
    }

    #[test]
    fn test_no_pointer_means_no_repulsion() {
        let mut network = mounted(1, 800.0, 600.0);
        single(&mut network, 400.0, 300.0, 0.0, 0.0);

        network.tick();

        assert_eq!(network.particles[0].vx, 0.0);
        assert_eq!(network.particles[0].vy, 0.0);
    }

    #[test]
    fn test_resize_does_not_reposition() {
        let mut network = mounted(1, 800.0, 600.0);
        single(&mut network, 700.0, 500.0, 0.0, 0.0);

        network.set_bounds(400.0, 300.0);

        // Particle is left outside the shrunk viewport untouched.
        assert_eq!(network.particles[0].x, 700.0);
        assert_eq!(network.particles[0].y, 500.0);
        assert_eq!(network.bounds, ViewportBounds::new(400.0, 300.0));
    }

    #[test]
    fn test_tick_rebuilds_connections() {
        let mut network = mounted(1, 800.0, 600.0);
        network.particles = vec![
            Particle { x: 100.0, y: 100.0, vx: 0.0, vy: 0.0, radius: 1.0 },
            Particle { x: 150.0, y: 100.0, vx: 0.0, vy: 0.0, radius: 1.0 },
        ];

        network.tick();
        assert_eq!(network.connections.len(), 1);

        // Move one particle out of range; the overlay follows on the
        // next tick.
        network.particles[1].x = 500.0;
        network.tick();
        assert!(network.connections.is_empty());
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut network = mounted(1, 800.0, 600.0);
        single(&mut network, 400.0, 300.0, 1.0, 0.0);
        network.paused = true;

        network.tick();

        assert_eq!(network.particles[0].x, 400.0);
        assert_eq!(network.frame, 0);
    }

    #[test]
    fn test_teardown_idempotent_and_terminal() {
        let mut network = mounted(1, 800.0, 600.0);
        assert!(network.is_running());

        network.teardown();
        network.teardown();
        assert_eq!(network.phase(), Phase::TornDown);
        assert!(network.particles.is_empty());

        // A tick that was already in flight when teardown landed: no-op.
        network.tick();
        assert_eq!(network.frame, 0);

        // The instance cannot be remounted.
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        network.mount(ViewportBounds::new(800.0, 600.0), &mut rng);
        assert_eq!(network.phase(), Phase::TornDown);
        assert!(network.particles.is_empty());
    }

    #[test]
    fn test_remount_produces_independent_store() {
        let mut first = mounted(1, 800.0, 600.0);
        for _ in 0..5 {
            first.tick();
        }
        first.teardown();

        // Fresh instance, fresh RNG: an uncorrelated store, unaffected
        // by the first session.
        let second = mounted(2, 800.0, 600.0);
        assert!(second.is_running());
        assert_eq!(second.frame, 0);
        assert_eq!(second.particles.len(), 140);
        assert!(first.particles.is_empty());
        assert_ne!(first.phase(), second.phase());
    }
}
