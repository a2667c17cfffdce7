// Simulation constants (surface-pixel units)
// Distances and radii are in logical pixels, velocities in pixels per frame.
// The simulation is frame-locked: one tick per scheduled frame, no dt scaling.

/// Number of particles in one session
pub const PARTICLE_COUNT: u32 = 140;

/// Pointer repulsion cutoff distance
pub const REPULSION_RADIUS: f32 = 150.0;

/// Repulsion impulse scale, applied to velocity once per frame
pub const REPULSION_STRENGTH: f32 = 0.2;

/// Connection line cutoff distance
pub const CONNECTION_RADIUS: f32 = 170.0;

/// Peak line alpha at zero separation
pub const CONNECTION_ALPHA: f32 = 0.3;

/// Per-frame velocity decay factor
pub const DAMPING: f32 = 0.99;

/// Particle radius range [MIN_RADIUS, MAX_RADIUS)
pub const MIN_RADIUS: f32 = 1.0;
pub const MAX_RADIUS: f32 = 3.0;

/// Spawn velocity half-range: components uniform in [-SPAWN_SPEED, SPAWN_SPEED)
pub const SPAWN_SPEED: f32 = 0.25;

/// Node fill color [r, g, b, a]
pub const NODE_COLOR: [f32; 4] = [0.231, 0.51, 0.965, 0.6];

/// Connection line base color; alpha comes from the per-pair opacity
pub const LINE_COLOR: [f32; 3] = [0.231, 0.51, 0.965];

/// Connection line width in pixels
pub const LINE_WIDTH: f32 = 0.5;
