// The interaction point (mouse cursor) of one surface.
// Visual: pixels inside `radius` of this point fly away from it.

use crate::geometry::Point;

pub const DEFAULT_RADIUS: f64 = 30.0;

#[derive(Clone, Debug)]
pub struct Pointer {
    position: Point,
    radius: f64,
    active: bool,
}

impl Pointer {
    /// A pointer that has not touched the surface yet.
    pub fn new(radius: f64) -> Self {
        Self { position: Point::ZERO, radius, active: false }
    }

    /// Move the pointer (surface-local coordinates) and mark it active.
    /// There is no way back to inactive: the last position keeps pushing.
    pub fn set_position(&mut self, p: Point) {
        self.position = p;
        self.active = true;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}
