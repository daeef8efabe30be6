//! Gradient UI: a small widget layer and the custom gradient picker.
//!
//! # Quick start
//!
//! ```rust
//! use gradient_engine::input::InputEvent;
//! use gradient_ui::prelude::*;
//!
//! let mut scene = UiScene::new(Vec2::new(260.0, 48.0));
//! let mut picker = CustomGradientPicker::new()
//!     .on_change(|value| println!("{value}"));
//!
//! // Translate host events and feed them in:
//! scene.dispatch(&mut picker, &InputEvent::pointer_moved(109.5, 24.0));
//! assert_eq!(picker.controller().insert_indicator(), Some(98.0));
//!
//! // Then paint:
//! let draw_list = scene.frame(&picker);
//! assert!(!draw_list.is_empty());
//! ```
//!
//! # Stop editor
//!
//! The picker does not ship a color popover. Implement [`StopEditor`] to be
//! told when one should open or close, and report the user's choice back as
//! `UiEvent::Editor(..)`:
//!
//! ```rust,ignore
//! struct Popover { /* ... */ }
//!
//! impl StopEditor for Popover {
//!     fn open(&mut self, request: &EditorRequest) { /* show at request.anchor_offset */ }
//!     fn close(&mut self) { /* hide */ }
//! }
//!
//! scene.send(&mut picker, &UiEvent::Editor(EditorAction::CommitColor(rgba)));
//! ```

pub mod capture;
pub mod collaborators;
pub mod config;
pub mod constraints;
pub mod controller;
pub mod event;
pub mod geometry;
pub mod markers;
pub mod painter;
pub mod preview;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Types needed to host and drive the picker.
pub mod prelude {
    pub use crate::capture::{CaptureGuard, CaptureOwner, PointerCapture};
    pub use crate::collaborators::{EditorAction, EditorRequest, StopEditor};
    pub use crate::config::PickerConfig;
    pub use crate::constraints::Constraints;
    pub use crate::controller::{GradientController, Interaction};
    pub use crate::event::{EventCtx, EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::Widget;
    pub use crate::widgets::gradient_picker::CustomGradientPicker;

    pub use gradient_css::{Gradient, RgbaColor, DEFAULT_GRADIENT};
    pub use gradient_engine::coords::{Rect, Vec2};
    pub use gradient_engine::paint::{Color, Paint};
    pub use gradient_engine::scene::Border;
}
