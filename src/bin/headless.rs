//! Headless run of the particle network: deterministic seed, scripted
//! pointer sweep, periodic summary statistics on stdout.

use plexus_core::{NetworkConfig, ViewportBounds};
use plexus_sim::network::NetworkState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    let width = 1280.0f32;
    let height = 720.0f32;
    let frames = 1200u64;

    let config = NetworkConfig::default();
    let seed = config.seed;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut network = NetworkState::new(config);
    network.mount(ViewportBounds::new(width, height), &mut rng);

    eprintln!(
        "Running {} frames at {}x{} (seed {})...",
        frames, width, height, seed
    );

    for frame in 0..frames {
        // Sweep the pointer along the diagonal so repulsion stays exercised.
        let t = frame as f32 / frames as f32;
        network.set_pointer(t * width, t * height);
        network.tick();

        if (frame + 1) % 200 == 0 {
            let n = network.particles.len() as f32;
            let mean_speed = network
                .particles
                .iter()
                .map(|p| (p.vx * p.vx + p.vy * p.vy).sqrt())
                .sum::<f32>()
                / n;
            let out_of_bounds = network
                .particles
                .iter()
                .filter(|p| p.x < 0.0 || p.x > width || p.y < 0.0 || p.y > height)
                .count();
            println!(
                "frame {:>5} | links: {:>4} | mean speed: {:.4} px/f | out of bounds: {}",
                frame + 1,
                network.connections.len(),
                mean_speed,
                out_of_bounds,
            );
        }
    }

    network.teardown();
    println!("Done.");
}
