//! Replays a gesture script against a `CustomGradientPicker` and prints every
//! emitted gradient string.
//!
//! ```text
//! gradient-studio drag.script
//! echo "move 109.5" | RUST_LOG=gradient_ui=trace gradient-studio
//! ```

mod script;

use std::cell::RefCell;
use std::io::Read;
use std::rc::Rc;

use anyhow::{Context, Result};
use gradient_engine::input::{InputEvent, PointerButtonEvent};
use gradient_engine::logging::{init_logging, LoggingConfig};
use gradient_ui::prelude::*;

use crate::script::{parse_script, Directive, Line};

/// Stands in for a popover: reports what a real one would show.
struct LoggingEditor;

impl StopEditor for LoggingEditor {
    fn open(&mut self, request: &EditorRequest) {
        match &request.current {
            Some(color) => println!("editor: open {color} at {} (removable)", request.anchor_offset),
            None => println!("editor: open new stop at {}", request.anchor_offset),
        }
    }

    fn close(&mut self) {
        println!("editor: close");
    }
}

struct Replay {
    scene: UiScene,
    picker: CustomGradientPicker,
    /// Last emitted value, echoed back the way a host would.
    emitted: Rc<RefCell<Option<String>>>,
}

impl Replay {
    fn new() -> Self {
        let emitted = Rc::new(RefCell::new(None));
        let sink = emitted.clone();
        let picker = CustomGradientPicker::new()
            .on_change(move |value| {
                println!("change: {value}");
                *sink.borrow_mut() = Some(value.to_string());
            })
            .editor(LoggingEditor);
        Self { scene: UiScene::new(Vec2::new(260.0, 48.0)), picker, emitted }
    }

    fn pointer(&self, x: f32, y: Option<f32>) -> (f32, f32) {
        (x, y.unwrap_or(self.scene.viewport().y / 2.0))
    }

    fn run(&mut self, line: &Line) {
        log::info!("line {}: {:?}", line.number, line.directive);
        match &line.directive {
            Directive::Size { width, height } => self.scene.set_viewport(Vec2::new(*width, *height)),
            Directive::Value(value) => self.picker.set_value(value.as_str()),
            Directive::Move { x, y } => {
                let (x, y) = self.pointer(*x, *y);
                self.scene.dispatch(&mut self.picker, &InputEvent::pointer_moved(x, y));
            }
            Directive::Down { x, y } => {
                let (x, y) = self.pointer(*x, *y);
                let event = InputEvent::PointerButton(PointerButtonEvent::left_pressed(x, y));
                self.scene.dispatch(&mut self.picker, &event);
            }
            Directive::Up { x, y } => {
                let (x, y) = self.pointer(*x, *y);
                let event = InputEvent::PointerButton(PointerButtonEvent::left_released(x, y));
                self.scene.dispatch(&mut self.picker, &event);
            }
            Directive::Leave => {
                self.scene.dispatch(&mut self.picker, &InputEvent::PointerLeft);
            }
            Directive::Blur => {
                self.scene.dispatch(&mut self.picker, &InputEvent::Focused(false));
            }
            Directive::Commit(rgba) => {
                self.scene.send(&mut self.picker, &UiEvent::Editor(EditorAction::CommitColor(*rgba)));
            }
            Directive::Remove => {
                self.scene.send(&mut self.picker, &UiEvent::Editor(EditorAction::Remove));
            }
            Directive::Dismiss => {
                self.scene.send(&mut self.picker, &UiEvent::Editor(EditorAction::Dismiss));
            }
            Directive::Key(key) => {
                self.scene.dispatch(&mut self.picker, &InputEvent::key_pressed(*key));
            }
            Directive::Dump => self.dump(),
        }
        // A host owning the value feeds each emission back in.
        if let Some(value) = self.emitted.borrow_mut().take() {
            self.picker.set_value(value);
        }
    }

    fn dump(&mut self) {
        println!("value: {}", self.picker.current_value());
        println!("state: {}", self.picker.controller().interaction().name());
        if let Some(offset) = self.picker.controller().insert_indicator() {
            println!("indicator: {offset}");
        }
        let rect = self.scene.layout(&self.picker);
        for marker in self.picker.visible_markers(rect) {
            println!("marker: stop {} at {}% ({}) offset {}", marker.stop_index, marker.position, marker.color, marker.offset);
        }
        let draw_list = self.scene.frame(&self.picker);
        println!("draw: {} commands", draw_list.len());
    }
}

fn read_script() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading script {path}")),
        None => {
            let mut src = String::new();
            std::io::stdin().read_to_string(&mut src).context("reading script from stdin")?;
            Ok(src)
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let src = read_script()?;
    let lines = parse_script(&src).context("parsing script")?;
    log::info!("replaying {} directives", lines.len());

    let mut replay = Replay::new();
    for line in &lines {
        replay.run(line);
    }
    Ok(())
}
