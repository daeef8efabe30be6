use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { origin: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Horizontal band test: `x` in `[origin.x, origin.x + size.x)`.
    #[inline]
    pub fn contains_x(self, x: f32) -> bool {
        x >= self.origin.x && x < self.origin.x + self.size.x
    }

    /// Same rect with `dx` added on the left and right and `dy` on top and bottom.
    #[inline]
    #[must_use]
    pub fn expand(self, dx: f32, dy: f32) -> Self {
        Rect::new(
            self.origin.x - dx,
            self.origin.y - dy,
            self.size.x + 2.0 * dx,
            self.size.y + 2.0 * dy,
        )
    }
}
