//! Gradient engine crate.
//!
//! Owns the renderer-agnostic pieces used by the widget layer: geometry,
//! paint sources, the recorded draw stream, platform-agnostic input events and
//! logger initialization. Nothing here knows about gradient strings.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
