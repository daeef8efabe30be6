//! End-to-end scenarios: raw input through `UiScene` into the picker.

use std::cell::RefCell;
use std::rc::Rc;

use gradient_engine::input::{InputEvent, Key, PointerButtonEvent};
use gradient_engine::scene::DrawCmd;
use gradient_ui::prelude::*;

const TWO_STOPS: &str = "linear-gradient(135deg, rgb(6,147,227) 0%, rgb(155,81,224) 100%)";
const Y: f32 = 24.0;

#[derive(Debug, Clone, PartialEq)]
enum EditorCall {
    Open(EditorRequest),
    Close,
}

#[derive(Clone, Default)]
struct RecordingEditor {
    calls: Rc<RefCell<Vec<EditorCall>>>,
}

impl StopEditor for RecordingEditor {
    fn open(&mut self, request: &EditorRequest) {
        self.calls.borrow_mut().push(EditorCall::Open(request.clone()));
    }

    fn close(&mut self) {
        self.calls.borrow_mut().push(EditorCall::Close);
    }
}

struct Harness {
    scene: UiScene,
    picker: CustomGradientPicker,
    changes: Rc<RefCell<Vec<String>>>,
    editor: Rc<RefCell<Vec<EditorCall>>>,
}

impl Harness {
    fn new(value: &str) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let editor = RecordingEditor::default();
        let calls = editor.calls.clone();
        let sink = changes.clone();
        let picker = CustomGradientPicker::new()
            .value(value)
            .on_change(move |v| sink.borrow_mut().push(v.to_string()))
            .editor(editor);
        Self { scene: UiScene::new(Vec2::new(260.0, 48.0)), picker, changes, editor: calls }
    }

    fn hover(&mut self, x: f32) {
        self.scene.dispatch(&mut self.picker, &InputEvent::pointer_moved(x, Y));
    }

    fn down(&mut self, x: f32) {
        self.hover(x);
        self.scene
            .dispatch(&mut self.picker, &InputEvent::PointerButton(PointerButtonEvent::left_pressed(x, Y)));
    }

    fn up(&mut self, x: f32) {
        self.scene
            .dispatch(&mut self.picker, &InputEvent::PointerButton(PointerButtonEvent::left_released(x, Y)));
    }

    fn click(&mut self, x: f32) {
        self.down(x);
        self.up(x);
    }

    fn editor_action(&mut self, action: EditorAction) {
        self.scene.send(&mut self.picker, &UiEvent::Editor(action));
    }

    fn changes(&self) -> Vec<String> {
        self.changes.borrow().clone()
    }

    fn editor_calls(&self) -> Vec<EditorCall> {
        self.editor.borrow().clone()
    }
}

#[test]
fn dragging_first_marker_to_the_middle() {
    let mut h = Harness::new(TWO_STOPS);
    h.down(14.0);
    assert!(h.scene.capture().is_captured());
    h.hover(130.0);
    h.up(130.0);

    assert_eq!(
        h.changes(),
        vec!["linear-gradient(135deg, rgb(6,147,227) 50%, rgb(155,81,224) 100%)".to_string()]
    );
    assert!(h.editor_calls().is_empty(), "a real drag opens no editor");
    assert!(!h.scene.capture().is_captured());
    assert_eq!(h.picker.current_value(), h.changes()[0]);
}

#[test]
fn dragging_past_a_neighbour_reorders_on_output() {
    let mut h = Harness::new(TWO_STOPS);
    h.down(14.0);
    h.hover(400.0);
    h.up(400.0);
    assert_eq!(
        h.changes().last().map(String::as_str),
        Some("linear-gradient(135deg, rgb(6,147,227) 100%, rgb(155,81,224) 100%)")
    );
    // The model keeps its stop order until the host supplies a new value.
    assert_eq!(h.picker.gradient().stops[0].position_percent(), Some(100.0));
}

#[test]
fn inserting_a_stop_from_the_indicator() {
    let mut h = Harness::new(TWO_STOPS);
    h.hover(109.5);
    assert_eq!(h.picker.controller().insert_indicator(), Some(98.0));

    h.click(109.5);
    assert_eq!(
        h.editor_calls(),
        vec![EditorCall::Open(EditorRequest { current: None, removable: false, anchor_offset: 98.0 })]
    );
    assert!(h.changes().is_empty());

    h.editor_action(EditorAction::CommitColor(RgbaColor::opaque(0.0, 0.0, 0.0)));
    assert_eq!(
        h.changes(),
        vec![
            "linear-gradient(135deg, rgb(6,147,227) 0%, rgb(0,0,0) 40%, rgb(155,81,224) 100%)"
                .to_string()
        ]
    );

    // The new stop's marker stays hidden while its editor is open.
    let rect = Rect::new(0.0, 0.0, 260.0, 48.0);
    let positions: Vec<f64> = h.picker.visible_markers(rect).iter().map(|m| m.position).collect();
    assert_eq!(positions, vec![0.0, 100.0]);

    h.editor_action(EditorAction::Dismiss);
    assert_eq!(h.editor_calls().last(), Some(&EditorCall::Close));
    assert_eq!(h.picker.visible_markers(rect).len(), 3);
}

#[test]
fn indicator_hides_near_a_marker() {
    let mut h = Harness::new(TWO_STOPS);
    h.hover(20.0);
    assert_eq!(h.picker.controller().insert_indicator(), None);
    h.click(20.0);
    assert!(h.changes().is_empty());
    assert!(h.editor_calls().is_empty());
}

#[test]
fn clicking_a_marker_opens_its_editor_and_remove_deletes_it() {
    let mut h = Harness::new(TWO_STOPS);
    h.click(14.0);
    assert!(h.changes().is_empty(), "a click without movement emits nothing");
    let calls = h.editor_calls();
    assert_eq!(calls.len(), 1);
    let EditorCall::Open(request) = &calls[0] else { panic!("expected the editor to open") };
    assert!(request.removable);
    assert_eq!(request.anchor_offset, 5.0);
    assert_eq!(request.current.as_ref().map(ToString::to_string).as_deref(), Some("rgb(6,147,227)"));

    h.editor_action(EditorAction::Remove);
    assert_eq!(h.changes(), vec!["linear-gradient(135deg, rgb(155,81,224) 100%)".to_string()]);
    assert_eq!(h.editor_calls().last(), Some(&EditorCall::Close));
}

#[test]
fn escape_closes_the_open_editor() {
    let mut h = Harness::new(TWO_STOPS);
    h.click(246.0);
    assert_eq!(h.picker.controller().editing_stop(), Some(1));
    h.scene.dispatch(&mut h.picker, &InputEvent::key_pressed(Key::Escape));
    assert!(!h.picker.controller().is_editing());
    assert_eq!(h.editor_calls().last(), Some(&EditorCall::Close));
}

#[test]
fn losing_focus_mid_drag_ends_the_gesture() {
    let mut h = Harness::new(TWO_STOPS);
    h.down(14.0);
    h.hover(130.0);
    h.scene.dispatch(&mut h.picker, &InputEvent::Focused(false));
    assert!(!h.picker.controller().is_dragging());
    assert!(!h.scene.capture().is_captured());
    assert!(h.editor_calls().is_empty());
}

#[test]
fn malformed_value_renders_the_default() {
    let mut h = Harness::new("linear-gradient(135deg");
    let draw_list = h.scene.frame(&h.picker);
    let markers: Vec<_> = draw_list
        .items()
        .iter()
        .filter_map(|item| match &item.cmd {
            DrawCmd::RoundedRect(r) if r.border.is_some() => Some(r.rect.origin.x),
            _ => None,
        })
        .collect();
    assert_eq!(markers, vec![5.0, 237.0]);
    assert_eq!(h.picker.gradient(), &gradient_css::default_gradient());
}

#[test]
fn indicator_is_painted_while_hovering() {
    let mut h = Harness::new(TWO_STOPS);
    h.hover(109.5);
    let draw_list = h.scene.frame(&h.picker);
    let circle = draw_list.items().iter().find_map(|item| match &item.cmd {
        DrawCmd::Circle(c) => Some(c.center),
        _ => None,
    });
    assert_eq!(circle, Some(Vec2::new(109.5, 24.0)));
}
