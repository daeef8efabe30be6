//! Paint model shared between the widget layer and whatever renders the
//! draw list.
//!
//! Colors are linear premultiplied alpha; gradients carry their geometry in
//! the same logical-pixel space as the shapes they fill.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, RadialGradient};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Stops of a gradient paint; empty for solid fills.
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Paint::Solid(_) => &[],
            Paint::LinearGradient(g) => &g.stops,
            Paint::RadialGradient(g) => &g.stops,
        }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0,
            _ => self.stops().iter().all(|s| s.color.a >= 1.0),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Paint::RadialGradient(g)
    }
}
