use egui::{Context, Event, Key};

use super::{InputEvent, KeyCommand};
use crate::geometry::Point;
use crate::renderer::CanvasView;

/// Converts raw egui input into the document's [`InputEvent`]s.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer: Option<Point>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for this frame, in arrival order: typed keys, then movement,
    /// then button transitions.
    pub fn process_input(&mut self, ctx: &Context, view: &CanvasView) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            for event in &input.events {
                match event {
                    Event::Text(text) => {
                        let commands = text.chars().filter_map(KeyCommand::from_char);
                        events.extend(commands.map(InputEvent::Key));
                    }
                    Event::Key {
                        key: Key::Escape,
                        pressed: true,
                        ..
                    } => events.push(InputEvent::Key(KeyCommand::Quit)),
                    _ => {}
                }
            }

            if let Some(pos) = input.pointer.latest_pos() {
                let point = view.to_canvas(pos);
                if self.last_pointer != Some(point) {
                    events.push(InputEvent::PointerMove(point));
                    self.last_pointer = Some(point);
                }
            }

            // A release outside the window reports no position; fall back to the last one seen.
            let at = self.last_pointer.unwrap_or_default();
            if input.pointer.primary_pressed() {
                events.push(InputEvent::PointerDown(at));
            }
            if input.pointer.primary_released() {
                events.push(InputEvent::PointerUp(at));
            }
        });

        events
    }
}
