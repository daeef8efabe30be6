//! Reading, editing and writing CSS gradient strings.
//!
//! The crate does not depend on any engine or UI code, so tooling that only
//! needs to rewrite gradient strings can use it on its own.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Gradient`, `ColorStop`, `ColorValue`, `Length`, `Orientation` |
//! | [`edit`] | Pure stop-set operations (`with_color_at`, `with_stop_removed`, ...) |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `try_parse`, `try_parse_all` |
//! | [`serializer`] | `serialize` and the `Display` impls |
//!
//! # Quick start
//!
//! ```rust
//! use gradient_css::{edit, parse, serialize};
//!
//! let g = parse("linear-gradient(135deg, rgb(6,147,227) 0%, rgb(155,81,224) 100%)");
//! let moved = edit::with_position_at(&g, 0, 50.0);
//! assert_eq!(
//!     serialize(&moved),
//!     "linear-gradient(135deg, rgb(6,147,227) 50%, rgb(155,81,224) 100%)",
//! );
//! ```

pub mod ast;
pub mod edit;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod serializer;

pub use ast::{
    ColorStop, ColorValue, Gradient, GradientKind, Length, Orientation, PositionTerm,
    RadialEndingShape, RadialExtent, RadialShape, RgbaColor, Side,
};
pub use error::ParseError;
pub use parser::{try_parse, try_parse_all};
pub use serializer::serialize;

/// Gradient shown when the supplied value cannot be parsed.
pub const DEFAULT_GRADIENT: &str =
    "linear-gradient(135deg, rgba(6, 147, 227, 1) 0%, rgb(155, 81, 224) 100%)";

/// Parsed form of [`DEFAULT_GRADIENT`].
pub fn default_gradient() -> Gradient {
    Gradient::new(
        GradientKind::Linear,
        Some(Orientation::Angle(135.0)),
        vec![
            ColorStop::at_percent(ColorValue::Rgba { r: 6.0, g: 147.0, b: 227.0, a: 1.0 }, 0.0),
            ColorStop::at_percent(ColorValue::Rgb { r: 155.0, g: 81.0, b: 224.0 }, 100.0),
        ],
    )
}

/// Parses `src`, falling back to [`default_gradient`] when it does not conform.
///
/// Never fails: an editor fed with this value always has something to render.
pub fn parse(src: &str) -> Gradient {
    match try_parse(src) {
        Ok(gradient) => gradient,
        Err(e) => {
            log::debug!("gradient value {src:?} rejected ({e}); using default gradient");
            default_gradient()
        }
    }
}
