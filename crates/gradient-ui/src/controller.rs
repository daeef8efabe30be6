//! Drag / insert interaction state machine.
//!
//! The controller owns the transient interaction state and nothing else: the
//! current gradient and the track geometry are passed in with every call, and
//! edits come back as a new [`Gradient`] in a [`Response`] for the widget to
//! serialize and emit.
//!
//! ```text
//! Idle ──hover, no marker near──▶ HoveringTrack ──click indicator──▶ EditingStop(insertion)
//!  ▲  ◀──near marker / leave────       │
//!  │                                   │ press on marker (from any state)
//!  │                                   ▼
//!  ├──────────── release, moved ── DraggingStop ── release, still ──▶ EditingStop(stop)
//!  └──────────────────────── close / remove ─────────────────────────────────┘
//! ```

use std::mem;

use gradient_css::edit::{with_color_at, with_position_at, with_stop_inserted, with_stop_removed};
use gradient_css::{ColorValue, Gradient, RgbaColor};

use crate::capture::{CaptureGuard, CaptureOwner, PointerCapture};
use crate::collaborators::EditorRequest;
use crate::config::PickerConfig;
use crate::geometry::{to_percent, TrackGeometry};
use crate::markers::{crowds_marker, marker_at, marker_points};

// ── State ─────────────────────────────────────────────────────────────────

/// An in-flight drag of one stop.
#[derive(Debug)]
pub struct DragSession {
    /// Gradient as it was when the drag started; every move edits this copy.
    pub snapshot: Gradient,
    pub stop_index: usize,
    pub initial_position: f64,
    pub crossed_move_threshold: bool,
    /// The press landed on the marker whose editor was open, so a plain
    /// click leaves it closed instead of reopening it.
    pub toggled_off: bool,
    capture: CaptureGuard,
}

impl DragSession {
    /// Ends the session. Dropping the capture guard here is the one place a
    /// drag gives up pointer capture.
    fn finish(self) -> (usize, bool) {
        let DragSession { stop_index, crossed_move_threshold, toggled_off, capture, .. } = self;
        drop(capture);
        (stop_index, crossed_move_threshold || toggled_off)
    }
}

/// What an open editor is editing.
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
    /// An existing stop.
    Stop { stop_index: usize },
    /// A stop to be created at the insert indicator. `inserted_at` is set by
    /// the first committed color, after which commits replace that stop.
    Insertion { insert_offset: f32, inserted_at: Option<f64> },
}

#[derive(Debug, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Insert indicator visible at `insert_offset` from the track origin.
    HoveringTrack { insert_offset: f32 },
    DraggingStop(DragSession),
    EditingStop(EditTarget),
}

impl Interaction {
    pub fn name(&self) -> &'static str {
        match self {
            Interaction::Idle => "idle",
            Interaction::HoveringTrack { .. } => "hovering-track",
            Interaction::DraggingStop(_) => "dragging-stop",
            Interaction::EditingStop(EditTarget::Stop { .. }) => "editing-stop",
            Interaction::EditingStop(EditTarget::Insertion { .. }) => "editing-insertion",
        }
    }
}

// ── Response ──────────────────────────────────────────────────────────────

/// Instruction for the external stop editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorSignal {
    Open(EditorRequest),
    Close,
}

/// Outcome of one controller call.
#[derive(Debug, Default)]
pub struct Response {
    /// The call was meaningful in the current state.
    pub handled: bool,
    /// New gradient to serialize and emit.
    pub change: Option<Gradient>,
    pub editor: Option<EditorSignal>,
}

impl Response {
    fn ignored() -> Self {
        Self::default()
    }

    fn handled() -> Self {
        Self { handled: true, ..Self::default() }
    }

    fn changed(gradient: Gradient) -> Self {
        Self { handled: true, change: Some(gradient), editor: None }
    }

    fn with_editor(mut self, signal: EditorSignal) -> Self {
        self.editor = Some(signal);
        self
    }
}

// ── Controller ────────────────────────────────────────────────────────────

pub struct GradientController {
    config: PickerConfig,
    owner: CaptureOwner,
    interaction: Interaction,
}

impl GradientController {
    pub fn new(config: PickerConfig) -> Self {
        Self { config, owner: CaptureOwner::new(), interaction: Interaction::Idle }
    }

    #[inline]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    #[inline]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Offset of the visible insert indicator, if any.
    pub fn insert_indicator(&self) -> Option<f32> {
        match &self.interaction {
            Interaction::HoveringTrack { insert_offset }
            | Interaction::EditingStop(EditTarget::Insertion { insert_offset, .. }) => Some(*insert_offset),
            _ => None,
        }
    }

    /// Position whose markers are hidden because the insertion editor owns it.
    pub fn hidden_position(&self) -> Option<f64> {
        match &self.interaction {
            Interaction::EditingStop(EditTarget::Insertion { inserted_at, .. }) => *inserted_at,
            _ => None,
        }
    }

    pub fn editing_stop(&self) -> Option<usize> {
        match &self.interaction {
            Interaction::EditingStop(EditTarget::Stop { stop_index }) => Some(*stop_index),
            _ => None,
        }
    }

    pub fn dragging_stop(&self) -> Option<usize> {
        match &self.interaction {
            Interaction::DraggingStop(session) => Some(session.stop_index),
            _ => None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::DraggingStop(_))
    }

    #[inline]
    pub fn is_editing(&self) -> bool {
        matches!(self.interaction, Interaction::EditingStop(_))
    }

    fn enter(&mut self, next: Interaction) {
        if mem::discriminant(&self.interaction) != mem::discriminant(&next) {
            log::trace!("interaction: {} -> {}", self.interaction.name(), next.name());
        }
        self.interaction = next;
    }

    // ── pointer ───────────────────────────────────────────────────────────

    /// Pointer moved to absolute `x`.
    ///
    /// While dragging, the stop is moved on the frozen snapshot and the result
    /// is emitted. Otherwise the insert indicator follows the pointer unless
    /// an editor is open.
    pub fn pointer_move(&mut self, gradient: &Gradient, geometry: TrackGeometry, x: f32) -> Response {
        if let Interaction::DraggingStop(session) = &mut self.interaction {
            let position = geometry.marker_percent_at(&self.config, x);
            if !session.crossed_move_threshold
                && (session.initial_position - position).abs() >= self.config.min_significant_move
            {
                log::trace!("drag of stop {} crossed the move threshold", session.stop_index);
                session.crossed_move_threshold = true;
            }
            return Response::changed(with_position_at(&session.snapshot, session.stop_index, position));
        }
        if self.is_editing() {
            return Response::ignored();
        }
        let offset = geometry.insert_offset_at(&self.config, x);
        let markers = marker_points(gradient, geometry, &self.config);
        if crowds_marker(&markers, &self.config, offset) {
            self.enter(Interaction::Idle);
        } else {
            self.enter(Interaction::HoveringTrack { insert_offset: offset });
        }
        Response::handled()
    }

    /// Pointer left the track. Hides the indicator unless an editor is open;
    /// a drag keeps going under capture.
    pub fn pointer_leave(&mut self) -> Response {
        match self.interaction {
            Interaction::HoveringTrack { .. } => {
                self.enter(Interaction::Idle);
                Response::handled()
            }
            _ => Response::ignored(),
        }
    }

    /// Primary press at absolute `x`. Starts a drag when it lands on a
    /// marker; an open editor is closed first.
    pub fn pointer_down(
        &mut self,
        gradient: &Gradient,
        geometry: TrackGeometry,
        x: f32,
        capture: &PointerCapture,
    ) -> Response {
        if self.is_dragging() {
            return Response::ignored();
        }
        let markers = marker_points(gradient, geometry, &self.config);
        let Some(marker) = marker_at(&markers, geometry, &self.config, x, self.hidden_position()) else {
            return Response::ignored();
        };
        let Some(guard) = capture.acquire(self.owner) else {
            return Response::ignored();
        };

        let toggled_off = self.editing_stop() == Some(marker.stop_index);
        let mut response = Response::handled();
        if self.is_editing() {
            response = response.with_editor(EditorSignal::Close);
        }
        self.enter(Interaction::DraggingStop(DragSession {
            snapshot: gradient.clone(),
            stop_index: marker.stop_index,
            initial_position: marker.position,
            crossed_move_threshold: false,
            toggled_off,
            capture: guard,
        }));
        response
    }

    /// Primary release. A drag that never crossed the move threshold is a
    /// click and opens that stop's editor.
    pub fn pointer_up(&mut self, gradient: &Gradient, geometry: TrackGeometry) -> Response {
        let session = match mem::take(&mut self.interaction) {
            Interaction::DraggingStop(session) => session,
            other => {
                self.interaction = other;
                return Response::ignored();
            }
        };
        let (stop_index, moved) = session.finish();
        if moved {
            log::trace!("interaction: dragging-stop -> idle");
            return Response::handled();
        }
        let Some(stop) = gradient.stops.get(stop_index) else {
            log::debug!("pointer_up: stale stop index {stop_index}");
            return Response::handled();
        };
        let request = EditorRequest {
            current: Some(stop.color.clone()),
            removable: true,
            anchor_offset: stop
                .position_percent()
                .map_or(0.0, |p| geometry.marker_offset(&self.config, p)),
        };
        log::trace!("interaction: dragging-stop -> editing-stop");
        self.interaction = Interaction::EditingStop(EditTarget::Stop { stop_index });
        Response::handled().with_editor(EditorSignal::Open(request))
    }

    /// Click at absolute `x`: opens the insertion editor when it hits the
    /// visible insert indicator.
    pub fn click(&mut self, geometry: TrackGeometry, x: f32) -> Response {
        let Interaction::HoveringTrack { insert_offset } = self.interaction else {
            return Response::ignored();
        };
        let local = x - geometry.origin_x;
        if local < insert_offset || local >= insert_offset + self.config.insert_point_width {
            return Response::ignored();
        }
        self.enter(Interaction::EditingStop(EditTarget::Insertion { insert_offset, inserted_at: None }));
        Response::handled().with_editor(EditorSignal::Open(EditorRequest {
            current: None,
            removable: false,
            anchor_offset: insert_offset,
        }))
    }

    // ── editor reports ────────────────────────────────────────────────────

    /// Color committed in the open editor.
    pub fn commit_color(&mut self, gradient: &Gradient, geometry: TrackGeometry, rgba: RgbaColor) -> Response {
        let color = ColorValue::from_rgba(rgba);
        let max = geometry.max_position(&self.config);
        let inset = self.config.min_left_position;
        match &mut self.interaction {
            Interaction::EditingStop(EditTarget::Stop { stop_index }) => {
                Response::changed(with_color_at(gradient, *stop_index, color))
            }
            Interaction::EditingStop(EditTarget::Insertion { insert_offset, inserted_at }) => {
                let next = match *inserted_at {
                    None => {
                        let position = to_percent(*insert_offset, max, inset);
                        *inserted_at = Some(position);
                        with_stop_inserted(gradient, color, position)
                    }
                    Some(at) => {
                        match gradient.stops.iter().rposition(|s| s.position_percent() == Some(at)) {
                            Some(index) => with_color_at(gradient, index, color),
                            None => {
                                log::debug!("inserted stop at {at}% is gone; inserting it again");
                                with_stop_inserted(gradient, color, at)
                            }
                        }
                    }
                };
                Response::changed(next)
            }
            _ => {
                log::debug!("color committed with no editor open");
                Response::ignored()
            }
        }
    }

    /// "Remove stop" chosen in the open stop editor.
    pub fn remove_stop(&mut self, gradient: &Gradient) -> Response {
        let Some(stop_index) = self.editing_stop() else {
            log::debug!("remove requested in state {}", self.interaction.name());
            return Response::ignored();
        };
        self.enter(Interaction::Idle);
        Response::changed(with_stop_removed(gradient, stop_index)).with_editor(EditorSignal::Close)
    }

    /// The editor closed. Re-enables the insert indicator and forgets the
    /// insertion position.
    pub fn close_editor(&mut self) -> Response {
        if !self.is_editing() {
            return Response::ignored();
        }
        self.enter(Interaction::Idle);
        Response::handled().with_editor(EditorSignal::Close)
    }
}

impl Default for GradientController {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradient_css::{parse, serialize};

    const TWO_STOPS: &str = "linear-gradient(135deg, rgb(6,147,227) 0%, rgb(155,81,224) 100%)";

    fn geometry() -> TrackGeometry {
        TrackGeometry { origin_x: 0.0, track_width: 260.0 }
    }

    /// Pointer `x` that maps a marker to `percent` (marker center).
    fn marker_x(percent: f64) -> f32 {
        geometry().marker_offset(&PickerConfig::default(), percent) + 9.0
    }

    #[test]
    fn hover_shows_and_hides_indicator() {
        let g = parse(TWO_STOPS);
        let mut c = GradientController::default();
        c.pointer_move(&g, geometry(), 109.5);
        assert_eq!(c.insert_indicator(), Some(98.0));
        c.pointer_move(&g, geometry(), 20.0);
        assert_eq!(c.insert_indicator(), None);
        c.pointer_move(&g, geometry(), 109.5);
        c.pointer_leave();
        assert!(matches!(c.interaction(), Interaction::Idle));
    }

    #[test]
    fn drag_moves_against_snapshot_and_emits_each_move() {
        let g = parse(TWO_STOPS);
        let capture = PointerCapture::new();
        let mut c = GradientController::default();
        assert!(c.pointer_down(&g, geometry(), marker_x(0.0), &capture).handled);
        assert!(capture.is_captured());

        let first = c.pointer_move(&g, geometry(), marker_x(20.0)).change.unwrap();
        let second = c.pointer_move(&first, geometry(), marker_x(50.0)).change.unwrap();
        assert_eq!(
            serialize(&second),
            "linear-gradient(135deg, rgb(6,147,227) 50%, rgb(155,81,224) 100%)"
        );

        let up = c.pointer_up(&second, geometry());
        assert!(up.editor.is_none());
        assert!(matches!(c.interaction(), Interaction::Idle));
        assert!(!capture.is_captured());
    }

    #[test]
    fn resize_mid_drag_uses_fresh_geometry_and_frozen_snapshot() {
        let g = parse(TWO_STOPS);
        let capture = PointerCapture::new();
        let mut c = GradientController::default();
        c.pointer_down(&g, geometry(), marker_x(0.0), &capture);
        let first = c.pointer_move(&g, geometry(), marker_x(20.0)).change.unwrap();
        assert_eq!(first.stops[0].position_percent(), Some(20.0));

        // Track grows to 400px: max 377, so x = 200 centers a marker at 50%.
        let wide = TrackGeometry { origin_x: 0.0, track_width: 400.0 };
        assert_eq!(geometry().marker_percent_at(c.config(), 200.0), 80.0);
        let unrelated = with_stop_removed(&first, 1);
        let second = c.pointer_move(&unrelated, wide, 200.0).change.unwrap();
        assert_eq!(second, with_position_at(&g, 0, 50.0));
    }

    #[test]
    fn small_moves_still_emit_but_count_as_click() {
        let g = parse(TWO_STOPS);
        let capture = PointerCapture::new();
        let mut c = GradientController::default();
        c.pointer_down(&g, geometry(), marker_x(0.0), &capture);
        let moved = c.pointer_move(&g, geometry(), marker_x(4.0)).change.unwrap();
        assert_eq!(moved.stops[0].position_percent(), Some(4.0));
        let up = c.pointer_up(&moved, geometry());
        assert!(matches!(up.editor, Some(EditorSignal::Open(EditorRequest { removable: true, .. }))));
        assert_eq!(c.editing_stop(), Some(0));
    }

    #[test]
    fn threshold_latches_even_when_returning() {
        let g = parse(TWO_STOPS);
        let capture = PointerCapture::new();
        let mut c = GradientController::default();
        c.pointer_down(&g, geometry(), marker_x(0.0), &capture);
        c.pointer_move(&g, geometry(), marker_x(30.0));
        let back = c.pointer_move(&g, geometry(), marker_x(0.0)).change.unwrap();
        assert!(c.pointer_up(&back, geometry()).editor.is_none());
        assert!(matches!(c.interaction(), Interaction::Idle));
    }

    #[test]
    fn editor_freezes_indicator_until_closed() {
        let g = parse(TWO_STOPS);
        let mut c = GradientController::default();
        c.pointer_move(&g, geometry(), 109.5);
        assert!(c.click(geometry(), 109.5).handled);
        assert!(matches!(
            c.interaction(),
            Interaction::EditingStop(EditTarget::Insertion { inserted_at: None, .. })
        ));
        c.pointer_move(&g, geometry(), 160.0);
        c.pointer_leave();
        assert_eq!(c.insert_indicator(), Some(98.0));

        let closed = c.close_editor();
        assert_eq!(closed.editor, Some(EditorSignal::Close));
        assert_eq!(c.insert_indicator(), None);
        c.pointer_move(&g, geometry(), 160.0);
        assert_eq!(c.insert_indicator(), Some(148.5));
    }

    #[test]
    fn click_outside_indicator_is_ignored() {
        let g = parse(TWO_STOPS);
        let mut c = GradientController::default();
        c.pointer_move(&g, geometry(), 109.5);
        assert!(!c.click(geometry(), 97.0).handled);
        assert!(!c.click(geometry(), 121.0).handled);
        assert!(c.click(geometry(), 120.9).handled);
    }

    #[test]
    fn second_insertion_commit_replaces() {
        let g = parse(TWO_STOPS);
        let mut c = GradientController::default();
        c.pointer_move(&g, geometry(), 109.5);
        c.click(geometry(), 109.5);

        let once = c.commit_color(&g, geometry(), RgbaColor::opaque(0.0, 0.0, 0.0)).change.unwrap();
        assert_eq!(once.stops.len(), 3);
        assert_eq!(c.hidden_position(), Some(40.0));

        let twice = c.commit_color(&once, geometry(), RgbaColor::new(1.0, 2.0, 3.0, 0.5)).change.unwrap();
        assert_eq!(twice.stops.len(), 3);
        assert_eq!(
            serialize(&twice),
            "linear-gradient(135deg, rgb(6,147,227) 0%, rgba(1,2,3,0.5) 40%, rgb(155,81,224) 100%)"
        );
    }

    #[test]
    fn remove_from_stop_editor() {
        let g = parse(TWO_STOPS);
        let capture = PointerCapture::new();
        let mut c = GradientController::default();
        c.pointer_down(&g, geometry(), marker_x(100.0), &capture);
        c.pointer_up(&g, geometry());
        assert_eq!(c.editing_stop(), Some(1));
        let r = c.remove_stop(&g);
        assert_eq!(r.change.unwrap().stops.len(), 1);
        assert_eq!(r.editor, Some(EditorSignal::Close));
        assert!(!c.remove_stop(&g).handled);
    }

    #[test]
    fn pressing_the_open_marker_toggles_it_closed() {
        let g = parse(TWO_STOPS);
        let capture = PointerCapture::new();
        let mut c = GradientController::default();
        c.pointer_down(&g, geometry(), marker_x(0.0), &capture);
        c.pointer_up(&g, geometry());
        assert_eq!(c.editing_stop(), Some(0));

        let down = c.pointer_down(&g, geometry(), marker_x(0.0), &capture);
        assert_eq!(down.editor, Some(EditorSignal::Close));
        assert!(c.pointer_up(&g, geometry()).editor.is_none());
        assert!(matches!(c.interaction(), Interaction::Idle));

        // A different marker switches editors.
        c.pointer_down(&g, geometry(), marker_x(0.0), &capture);
        c.pointer_up(&g, geometry());
        assert_eq!(c.pointer_down(&g, geometry(), marker_x(100.0), &capture).editor, Some(EditorSignal::Close));
        assert!(matches!(c.pointer_up(&g, geometry()).editor, Some(EditorSignal::Open(_))));
        assert_eq!(c.editing_stop(), Some(1));
    }

    #[test]
    fn press_is_refused_while_capture_is_taken() {
        let g = parse(TWO_STOPS);
        let capture = PointerCapture::new();
        let _other = capture.acquire(CaptureOwner::new()).unwrap();
        let mut c = GradientController::default();
        assert!(!c.pointer_down(&g, geometry(), marker_x(0.0), &capture).handled);
        assert!(matches!(c.interaction(), Interaction::Idle));
    }

    #[test]
    fn stale_stop_index_is_harmless() {
        let g = parse(TWO_STOPS);
        let capture = PointerCapture::new();
        let mut c = GradientController::default();
        c.pointer_down(&g, geometry(), marker_x(100.0), &capture);
        c.pointer_up(&g, geometry());
        let shrunk = with_stop_removed(&g, 1);
        let r = c.commit_color(&shrunk, geometry(), RgbaColor::opaque(0.0, 0.0, 0.0));
        assert_eq!(r.change.unwrap(), shrunk);
    }
}
