//! Geometry shared by the draw list and the widget layer.
//!
//! All values are logical pixels with a top-left origin, +X right, +Y down.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
