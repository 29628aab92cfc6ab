use log::{debug, info};

use crate::clock::TimeAngle;
use crate::config::SketchConfig;
use crate::geometry::{CanvasSize, Point, int_distance};
use crate::gesture::Gesture;
use crate::history::ShapeHistory;
use crate::input::{InputEvent, KeyCommand};
use crate::mode::Mode;
use crate::raster::Rasterizer;
use crate::scene::Scene;
use crate::shape::{CircleShape, ClockShape, CurveShape, LineShape, Shape};

/// What the event loop should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Continue,
    Quit,
}

/// The sketch: active mode, in-progress gesture and committed shapes.
///
/// Owned by the event loop and handed to every handler by reference.
#[derive(Debug, Clone)]
pub struct Document {
    raster: Rasterizer,
    mode: Mode,
    gesture: Gesture,
    history: ShapeHistory,
    show_help: bool,
    show_control_points: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(CanvasSize::default())
    }
}

impl Document {
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            raster: Rasterizer::new(canvas),
            mode: Mode::default(),
            gesture: Gesture::new(),
            history: ShapeHistory::new(),
            show_help: false,
            show_control_points: false,
        }
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        let mut document = Self::new(config.canvas);
        document.show_help = config.show_help;
        document.show_control_points = config.show_control_points;
        document
    }

    pub fn canvas(&self) -> CanvasSize {
        self.raster.canvas()
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.raster
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn history(&self) -> &ShapeHistory {
        &self.history
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn show_control_points(&self) -> bool {
        self.show_control_points
    }

    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::PointerDown(point) => self.pointer_down(point),
            InputEvent::PointerUp(point) => self.pointer_up(point),
            InputEvent::PointerMove(point) => self.pointer_move(point),
            InputEvent::Key(command) => return self.apply_key(command),
        }
        EventOutcome::Continue
    }

    /// Begin a rubber band or add a curve control point.
    ///
    /// Presses outside the canvas are ignored.
    pub fn pointer_down(&mut self, point: Point) {
        if !self.canvas().contains(point) {
            debug!("Ignoring press outside the canvas at {point}");
            return;
        }
        if self.mode.is_rubber_band() {
            self.gesture.press(point);
        } else if self.gesture.add_control_point(point) {
            debug!(
                "Curve control point {} at {point}",
                self.gesture.control_points().len()
            );
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        self.gesture.track(point);
    }

    /// Commit the gesture finished at `point`, if it forms a shape.
    pub fn pointer_up(&mut self, point: Point) {
        self.gesture.track(point);
        let start = self.gesture.release();
        let shape: Shape = match (self.mode, start) {
            (Mode::Line, Some(start)) => LineShape::rasterize(&self.raster, start, point).into(),
            (Mode::Circle, Some(start)) => {
                CircleShape::rasterize(&self.raster, start, int_distance(start, point)).into()
            }
            (Mode::Clock, Some(start)) => {
                ClockShape::rasterize(&self.raster, start, int_distance(start, point)).into()
            }
            (Mode::Curve, _) => match self.gesture.take_curve() {
                Some(control) => CurveShape::rasterize(&self.raster, control).into(),
                None => return,
            },
            _ => return,
        };
        debug!("Committed {} shape with {} pixels", shape.mode(), shape.pixels().len());
        self.history.push(shape);
    }

    pub fn apply_key(&mut self, command: KeyCommand) -> EventOutcome {
        match command {
            KeyCommand::ToggleHelp => {
                self.show_help = !self.show_help;
                info!("Help menu {}", on_off(self.show_help));
            }
            KeyCommand::ToggleControlPoints => {
                self.show_control_points = !self.show_control_points;
                info!("Control points {}", on_off(self.show_control_points));
            }
            KeyCommand::Clear => self.clear(),
            KeyCommand::Undo => {
                self.undo();
            }
            KeyCommand::SelectLine => self.set_mode(Mode::Line),
            KeyCommand::SelectCircle => self.set_mode(Mode::Circle),
            KeyCommand::SelectCurve => self.set_mode(Mode::Curve),
            KeyCommand::SelectClock => self.set_mode(Mode::Clock),
            KeyCommand::Quit => {
                info!("Quit requested");
                return EventOutcome::Quit;
            }
        }
        EventOutcome::Continue
    }

    /// Switch modes. Leaving Curve mode drops any pending control points.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        if self.gesture.is_drawing_curve() {
            debug!(
                "Discarding {} pending control points",
                self.gesture.control_points().len()
            );
            self.gesture.discard_curve();
        }
        info!("Mode changed: {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    /// Pop the most recent shape of the current mode.
    ///
    /// A curve cannot be undone while another is being built.
    pub fn undo(&mut self) -> Option<Shape> {
        if self.mode == Mode::Curve && self.gesture.is_drawing_curve() {
            return None;
        }
        let shape = self.history.undo(self.mode)?;
        debug!("Undid {} shape", shape.mode());
        Some(shape)
    }

    /// Drop every committed shape of every mode.
    pub fn clear(&mut self) {
        self.history.clear();
        info!("Cleared all shapes");
    }

    /// Rubber-band pixels for the live pointer; never committed.
    pub fn preview(&self, angle: &TimeAngle) -> Vec<Point> {
        let Some(start) = self.gesture.start() else {
            return Vec::new();
        };
        let pointer = self.gesture.pointer();
        let mut pixels = Vec::new();
        match self.mode {
            Mode::Line => self.raster.line_into(start, pointer, &mut pixels),
            Mode::Circle => {
                self.raster.circle_into(start, int_distance(start, pointer), &mut pixels)
            }
            Mode::Clock => {
                let radius = int_distance(start, pointer);
                self.raster.circle_into(start, radius, &mut pixels);
                self.raster.hands_into(start, radius, angle, &mut pixels);
            }
            Mode::Curve => {}
        }
        pixels
    }

    /// Polygon through the pending control points, closed off at the pointer.
    pub fn curve_guide(&self) -> Vec<Point> {
        let control = self.gesture.control_points();
        let mut pixels = Vec::new();
        if let Some(&last) = control.last() {
            self.raster.polyline_into(control, &mut pixels);
            self.raster.line_into(last, self.gesture.pointer(), &mut pixels);
        }
        pixels
    }

    /// Assemble everything to draw this refresh.
    pub fn scene(&self, angle: &TimeAngle) -> Scene<'_> {
        let history = &self.history;
        let shapes = history
            .lines()
            .iter()
            .map(LineShape::pixels)
            .chain(history.curves().iter().map(CurveShape::pixels))
            .chain(history.circles().iter().map(CircleShape::pixels))
            .chain(history.clocks().iter().map(ClockShape::pixels))
            .collect();

        let control_overlays = if self.show_control_points {
            history
                .curves()
                .iter()
                .map(CurveShape::control_overlay)
                .collect()
        } else {
            Vec::new()
        };

        let mut hands = Vec::new();
        for clock in history.clocks() {
            clock.hands_into(&self.raster, angle, &mut hands);
        }

        Scene {
            shapes,
            control_overlays,
            preview: self.preview(angle),
            curve_guide: self.curve_guide(),
            hands,
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "shown" } else { "hidden" }
}
