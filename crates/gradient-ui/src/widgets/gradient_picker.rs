use gradient_css::{parse, serialize, Gradient, DEFAULT_GRADIENT};
use gradient_engine::coords::{Rect, Vec2};
use gradient_engine::input::Key;
use gradient_engine::paint::{Color, Paint};
use gradient_engine::scene::Border;

use crate::collaborators::{EditorAction, StopEditor};
use crate::config::PickerConfig;
use crate::constraints::Constraints;
use crate::controller::{EditorSignal, GradientController, Response};
use crate::event::{EventCtx, EventResult, UiEvent};
use crate::geometry::TrackGeometry;
use crate::markers::{marker_points, MarkerPoint};
use crate::painter::Painter;
use crate::preview::{preview_paint, stop_color};
use crate::widget::Widget;

/// Width used when the parent does not bound the picker.
const FALLBACK_WIDTH: f32 = 260.0;

/// Gradient bar with draggable stop markers and an insert affordance.
///
/// The picker is laid out as the track itself: its rect is the preview area
/// and markers sit on its vertical center. Every committed edit is serialized
/// and handed to `on_change`.
///
/// # Example
/// ```rust,ignore
/// CustomGradientPicker::new()
///     .value("linear-gradient(90deg, rgb(0,0,0) 0%, rgb(255,255,255) 100%)")
///     .on_change(|v| println!("gradient: {v}"))
///     .editor(MyPopover::default())
/// ```
pub struct CustomGradientPicker {
    /// Last value received from the host or emitted by the picker.
    value: String,
    gradient: Gradient,
    controller: GradientController,
    marker_border: Color,
    indicator_color: Color,
    on_change: Option<Box<dyn FnMut(&str)>>,
    editor: Option<Box<dyn StopEditor>>,
}

impl CustomGradientPicker {
    pub fn new() -> Self {
        Self {
            value: DEFAULT_GRADIENT.to_string(),
            gradient: parse(DEFAULT_GRADIENT),
            controller: GradientController::new(PickerConfig::default()),
            marker_border: Color::white(),
            indicator_color: Color::from_straight(0.12, 0.12, 0.12, 1.0),
            on_change: None,
            editor: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn config(mut self, config: PickerConfig) -> Self {
        self.controller = GradientController::new(config);
        self
    }

    pub fn marker_border(mut self, v: Color) -> Self { self.marker_border = v; self }
    pub fn indicator_color(mut self, v: Color) -> Self { self.indicator_color = v; self }

    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn editor(mut self, editor: impl StopEditor + 'static) -> Self {
        self.editor = Some(Box::new(editor));
        self
    }

    /// Supplies a new value from the host.
    ///
    /// A value equal to the last one seen is ignored, so a host echoing
    /// `on_change` back keeps the stop order (and the stop indices held by
    /// an open editor) intact.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.gradient = parse(&value);
        self.value = value;
    }

    /// Last value received or emitted.
    pub fn current_value(&self) -> &str {
        &self.value
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    pub fn controller(&self) -> &GradientController {
        &self.controller
    }

    /// Markers as laid out in `rect`, excluding the one hidden by an
    /// insertion in progress.
    pub fn visible_markers(&self, rect: Rect) -> Vec<MarkerPoint> {
        let hidden = self.controller.hidden_position();
        marker_points(&self.gradient, TrackGeometry::from_rect(rect), self.controller.config())
            .into_iter()
            .filter(|m| Some(m.position) != hidden)
            .collect()
    }

    fn apply(&mut self, response: Response) -> EventResult {
        if let Some(next) = response.change {
            self.value = serialize(&next);
            self.gradient = next;
            log::debug!("gradient changed: {}", self.value);
            if let Some(f) = &mut self.on_change {
                f(&self.value);
            }
        }
        match (response.editor, &mut self.editor) {
            (Some(EditorSignal::Open(request)), Some(editor)) => editor.open(&request),
            (Some(EditorSignal::Close), Some(editor)) => editor.close(),
            _ => {}
        }
        response.handled.into()
    }
}

impl Default for CustomGradientPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for CustomGradientPicker {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let width = constraints.width_or(FALLBACK_WIDTH);
        constraints.constrain(Vec2::new(width, self.controller.config().track_height))
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let config = *self.controller.config();
        painter.fill_rounded_rect(rect, config.corner_radius, preview_paint(&self.gradient, rect), None);

        let active = self.controller.editing_stop().or(self.controller.dragging_stop());
        for marker in self.visible_markers(rect) {
            let is_active = active == Some(marker.stop_index);
            let border = Border::new(if is_active { 3.0 } else { 2.0 }, self.marker_border);
            let r = marker.rect(rect, &config);
            painter.fill_rounded_rect(r, r.size.x / 2.0, stop_color(&marker.color), Some(border));
        }

        if let Some(offset) = self.controller.insert_indicator() {
            let w = config.insert_point_width;
            let center = Vec2::new(rect.origin.x + offset + w / 2.0, rect.center().y);
            painter.fill_circle(
                center,
                w / 2.0,
                Paint::Solid(Color::white()),
                Some(Border::new(1.5, self.indicator_color)),
            );
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &EventCtx<'_>) -> EventResult {
        let geometry = TrackGeometry::from_rect(rect);
        let response = match event {
            UiEvent::PointerMove { pos } => {
                if self.controller.is_dragging() || rect.contains(*pos) {
                    self.controller.pointer_move(&self.gradient, geometry, pos.x)
                } else {
                    self.controller.pointer_leave()
                }
            }
            UiEvent::PointerLeave => self.controller.pointer_leave(),
            UiEvent::PointerDown { pos } if rect.contains(*pos) => {
                self.controller.pointer_down(&self.gradient, geometry, pos.x, ctx.capture)
            }
            UiEvent::PointerUp { .. } => self.controller.pointer_up(&self.gradient, geometry),
            UiEvent::Click { pos } if rect.contains(*pos) => self.controller.click(geometry, pos.x),
            UiEvent::KeyPress { key: Key::Escape, .. } => self.controller.close_editor(),
            UiEvent::Editor(EditorAction::CommitColor(rgba)) => {
                self.controller.commit_color(&self.gradient, geometry, *rgba)
            }
            UiEvent::Editor(EditorAction::Remove) => self.controller.remove_stop(&self.gradient),
            UiEvent::Editor(EditorAction::Dismiss) => self.controller.close_editor(),
            _ => return EventResult::Ignored,
        };
        self.apply(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradient_engine::scene::DrawCmd;
    use gradient_engine::scene::DrawList;

    #[test]
    fn malformed_value_shows_default() {
        let picker = CustomGradientPicker::new().value("not a gradient");
        assert_eq!(picker.gradient(), &parse(DEFAULT_GRADIENT));
        assert_eq!(picker.current_value(), "not a gradient");
    }

    #[test]
    fn echoed_value_keeps_stop_order() {
        let mut picker = CustomGradientPicker::new()
            .value("linear-gradient(90deg, rgb(1,1,1) 80%, rgb(2,2,2) 20%)");
        let before = picker.gradient().clone();
        picker.set_value("linear-gradient(90deg, rgb(1,1,1) 80%, rgb(2,2,2) 20%)");
        assert_eq!(picker.gradient(), &before);
        picker.set_value("linear-gradient(90deg, rgb(2,2,2) 20%, rgb(1,1,1) 80%)");
        assert_eq!(picker.gradient(), &before.sorted());
    }

    #[test]
    fn measure_uses_track_height() {
        let picker = CustomGradientPicker::new().config(PickerConfig::new().track_height(30.0));
        assert_eq!(picker.measure(Constraints::loose(Vec2::new(300.0, 100.0))), Vec2::new(300.0, 30.0));
        assert_eq!(picker.measure(Constraints::unbounded()), Vec2::new(260.0, 30.0));
    }

    #[test]
    fn paint_draws_preview_then_markers() {
        let picker = CustomGradientPicker::new();
        let mut list = DrawList::new();
        {
            let mut painter = Painter::new(&mut list, None, false);
            picker.paint(&mut painter, Rect::new(0.0, 0.0, 260.0, 48.0));
        }
        let kinds: Vec<&str> = list.items().iter().map(|i| i.cmd.kind()).collect();
        assert_eq!(kinds, vec!["rounded-rect", "rounded-rect", "rounded-rect"]);
        let DrawCmd::RoundedRect(marker) = &list.items()[2].cmd else { panic!("expected marker") };
        assert_eq!(marker.rect, Rect::new(237.0, 15.0, 18.0, 18.0));
        assert!(matches!(list.items()[0].cmd, DrawCmd::RoundedRect(ref bg) if matches!(bg.paint, Paint::LinearGradient(_))));
    }
}
