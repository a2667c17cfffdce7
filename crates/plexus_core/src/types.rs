/// A simulated point mass.
/// Identity is the index in the store; particles hold no cross-references.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Render radius, fixed at creation
    pub radius: f32,
}

/// Last known pointer position in surface coordinates (origin top-left,
/// y down). Undefined until the first pointer event arrives.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub position: Option<[f32; 2]>,
}

/// Current viewport size. Overwritten on resize; a shrink never repositions
/// particles, it only leaves them out of bounds until reflection drifts
/// them back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub width: f32,
    pub height: f32,
}

impl ViewportBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A qualifying particle pair for the line overlay.
/// `a < b`, both store indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}
