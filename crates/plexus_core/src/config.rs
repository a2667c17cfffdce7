use serde::{Deserialize, Serialize};

use crate::constants;

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of particles per session
    pub particle_count: u32,
    /// Random seed for deterministic headless runs
    pub seed: u64,
    /// Pointer repulsion cutoff distance (pixels)
    pub repulsion_radius: f32,
    /// Repulsion impulse scale
    pub repulsion_strength: f32,
    /// Connection line cutoff distance (pixels)
    pub connection_radius: f32,
    /// Per-frame velocity decay factor
    pub damping: f32,
    /// Particle radius range [min_radius, max_radius)
    pub min_radius: f32,
    pub max_radius: f32,
    /// Spawn velocity component half-range (pixels per frame)
    pub spawn_speed: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            particle_count: constants::PARTICLE_COUNT,
            seed: 42,
            repulsion_radius: constants::REPULSION_RADIUS,
            repulsion_strength: constants::REPULSION_STRENGTH,
            connection_radius: constants::CONNECTION_RADIUS,
            damping: constants::DAMPING,
            min_radius: constants::MIN_RADIUS,
            max_radius: constants::MAX_RADIUS,
            spawn_speed: constants::SPAWN_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_round_trip() {
        let config = NetworkConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: NetworkConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.particle_count, config.particle_count);
        assert_eq!(back.seed, config.seed);
        assert_eq!(back.repulsion_radius, config.repulsion_radius);
        assert_eq!(back.repulsion_strength, config.repulsion_strength);
        assert_eq!(back.connection_radius, config.connection_radius);
        assert_eq!(back.damping, config.damping);
        assert_eq!(back.min_radius, config.min_radius);
        assert_eq!(back.max_radius, config.max_radius);
        assert_eq!(back.spawn_speed, config.spawn_speed);
    }
}
