use crate::coords::{Rect, Vec2};

use super::Color;

/// A single gradient stop. `t` is the offset along the gradient in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Color at offset `t` for stops sorted by `t`. Outside the stop range the
/// nearest edge stop wins; an empty stop list yields transparent.
pub fn sample_stops(stops: &[ColorStop], t: f32) -> Color {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Color::transparent(),
    };
    if t <= first.t {
        return first.color;
    }
    if t >= last.t {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t >= a.t && t <= b.t {
            let span = b.t - a.t;
            if span <= f32::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.t) / span);
        }
    }
    last.color
}

/// Linear gradient definition in logical pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Gradient line for a CSS angle over `rect`.
    ///
    /// `0deg` points up and angles grow clockwise. The line passes through the
    /// center and is long enough that the corners receive the end colors.
    pub fn from_css_angle(rect: Rect, degrees: f32, stops: Vec<ColorStop>) -> Self {
        let rad = degrees.to_radians();
        let dir = Vec2::new(rad.sin(), -rad.cos());
        let half_len = (rect.size.x * dir.x.abs() + rect.size.y * dir.y.abs()) * 0.5;
        let center = rect.center();
        Self::new(center - dir * half_len, center + dir * half_len, stops)
    }

    /// Color at the projection of `p` onto the gradient line.
    pub fn sample(&self, p: Vec2) -> Color {
        let axis = self.end - self.start;
        let len_sq = axis.x * axis.x + axis.y * axis.y;
        if len_sq <= f32::EPSILON {
            return sample_stops(&self.stops, 0.0);
        }
        let rel = p - self.start;
        sample_stops(&self.stops, (rel.x * axis.x + rel.y * axis.y) / len_sq)
    }

    /// True when the definition is structurally usable by a renderer.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.start != self.end
            && !self.stops.is_empty()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }
}

/// Radial gradient: `t` grows from `center` (0) to `radius` (1).
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self { center, radius, stops }
    }

    pub fn sample(&self, p: Vec2) -> Color {
        if self.radius <= f32::EPSILON {
            return sample_stops(&self.stops, 1.0);
        }
        sample_stops(&self.stops, (p - self.center).length() / self.radius)
    }

    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && !self.stops.is_empty()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }
}
