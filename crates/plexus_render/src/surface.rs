use bevy::prelude::*;
use plexus_core::constants::{LINE_COLOR, LINE_WIDTH, NODE_COLOR};
use plexus_core::{Connection, Particle};

/// Host drawing surface for one frame of the network.
///
/// Coordinates are surface-space (origin top-left, y down), matching the
/// simulation. Implementations own any mapping to their native space.
pub trait Surface {
    fn clear(&mut self);
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: [f32; 4]);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: [f32; 4], width: f32);
}

/// Paint the current particle/connection state.
///
/// Pure consumer of the store and the line list: issues draw calls and
/// mutates nothing, and does not touch pointer or bounds state.
pub fn draw_network(
    surface: &mut impl Surface,
    particles: &[Particle],
    connections: &[Connection],
) {
    surface.clear();

    for p in particles {
        surface.draw_circle(p.x, p.y, p.radius, NODE_COLOR);
    }

    for c in connections {
        let a = &particles[c.a];
        let b = &particles[c.b];
        let color = [LINE_COLOR[0], LINE_COLOR[1], LINE_COLOR[2], c.opacity];
        surface.draw_line(a.x, a.y, b.x, b.y, color, LINE_WIDTH);
    }
}

/// Gizmo-backed surface: maps surface coordinates to bevy world coordinates
/// (centered origin, y up).
pub struct GizmoSurface<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    half_width: f32,
    half_height: f32,
}

impl<'a, 'w, 's> GizmoSurface<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, width: f32, height: f32) -> Self {
        Self {
            gizmos,
            half_width: width * 0.5,
            half_height: height * 0.5,
        }
    }

    fn to_world(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x - self.half_width, self.half_height - y)
    }
}

impl Surface for GizmoSurface<'_, '_, '_> {
    fn clear(&mut self) {
        // Gizmos are immediate-mode: last frame's draws are already gone and
        // the camera clear color repaints the background.
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: [f32; 4]) {
        let center = self.to_world(x, y);
        self.gizmos.circle_2d(
            Isometry2d::from_translation(center),
            radius,
            Color::srgba(color[0], color[1], color[2], color[3]),
        );
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: [f32; 4], _width: f32) {
        // Gizmo line width is global (see overlay::configure_gizmos), so the
        // per-call width is ignored here.
        self.gizmos.line_2d(
            self.to_world(x1, y1),
            self.to_world(x2, y2),
            Color::srgba(color[0], color[1], color[2], color[3]),
        );
    }
}
