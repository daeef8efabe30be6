use gradient_engine::coords::Vec2;

/// Layout constraints passed from parent to child during measure.
///
/// A child may return any size in `[min, max]`; parents enforce it with
/// [`Constraints::constrain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// `max.x` when bounded, otherwise `fallback`.
    #[inline]
    pub fn width_or(self, fallback: f32) -> f32 {
        if self.max.x.is_finite() { self.max.x } else { fallback }
    }
}
