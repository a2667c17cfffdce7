/// Velocity impulse pushing a particle away from the pointer.
/// Returns [dvx, dvy].
///
/// Linear falloff: full `strength` with the pointer on top of the particle,
/// zero at `radius` and beyond. Exact overlap (zero distance) has no defined
/// direction and is a no-op.
pub fn pointer_repulsion(
    pos: [f32; 2],
    pointer: [f32; 2],
    radius: f32,
    strength: f32,
) -> [f32; 2] {
    let dx = pointer[0] - pos[0];
    let dy = pointer[1] - pos[1];
    let d2 = dx * dx + dy * dy;

    if d2 >= radius * radius {
        return [0.0, 0.0];
    }

    let d = d2.sqrt();
    if d == 0.0 {
        return [0.0, 0.0];
    }

    let force = (radius - d) / radius;
    [-(dx / d) * force * strength, -(dy / d) * force * strength]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repulsion_points_away_from_pointer() {
        // Pointer to the right of the particle: push goes left.
        let [dvx, dvy] = pointer_repulsion([100.0, 100.0], [150.0, 100.0], 150.0, 0.2);
        assert!(dvx < 0.0);
        assert!(dvy.abs() < 1e-6);
    }

    #[test]
    fn test_repulsion_zero_at_and_beyond_radius() {
        let at_edge = pointer_repulsion([0.0, 0.0], [150.0, 0.0], 150.0, 0.2);
        assert_eq!(at_edge, [0.0, 0.0]);

        let beyond = pointer_repulsion([0.0, 0.0], [151.0, 0.0], 150.0, 0.2);
        assert_eq!(beyond, [0.0, 0.0]);
    }

    #[test]
    fn test_repulsion_overlap_guard() {
        // Pointer exactly on the particle: direction undefined, no force.
        let on_top = pointer_repulsion([42.0, 42.0], [42.0, 42.0], 150.0, 0.2);
        assert_eq!(on_top, [0.0, 0.0]);
    }

    #[test]
    fn test_repulsion_linear_falloff() {
        let radius = 150.0;
        let strength = 0.2;

        // At half the radius, magnitude is half the strength.
        let [dvx, _] = pointer_repulsion([0.0, 0.0], [radius / 2.0, 0.0], radius, strength);
        assert!((dvx.abs() - strength / 2.0).abs() < 1e-6, "dvx = {}", dvx);

        // Magnitude grows monotonically as the pointer closes in.
        let mut last = 0.0;
        for d in (1..150).rev() {
            let [dvx, _] = pointer_repulsion([0.0, 0.0], [d as f32, 0.0], radius, strength);
            assert!(dvx.abs() > last, "d = {}", d);
            last = dvx.abs();
        }
    }
}
