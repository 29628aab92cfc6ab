use crate::mode::Mode;
use crate::shape::{CircleShape, ClockShape, CurveShape, LineShape, Shape};

/// Committed shapes, one stack per drawing mode.
///
/// Entries are only ever appended at the top, popped from the top by undo, or
/// dropped all at once by clear. A clock's face, center and radius live in one
/// entry, as do a curve and its control overlay, so each commit or undo is a
/// single push or pop.
#[derive(Debug, Default, Clone)]
pub struct ShapeHistory {
    lines: Vec<LineShape>,
    circles: Vec<CircleShape>,
    curves: Vec<CurveShape>,
    clocks: Vec<ClockShape>,
}

impl ShapeHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a shape onto the stack for its mode
    pub fn push(&mut self, shape: Shape) {
        match shape {
            Shape::Line(line) => self.lines.push(line),
            Shape::Circle(circle) => self.circles.push(circle),
            Shape::Curve(curve) => self.curves.push(curve),
            Shape::Clock(clock) => self.clocks.push(clock),
        }
    }

    /// Pop the most recent shape of `mode`, if any
    pub fn undo(&mut self, mode: Mode) -> Option<Shape> {
        match mode {
            Mode::Line => self.lines.pop().map(Shape::from),
            Mode::Circle => self.circles.pop().map(Shape::from),
            Mode::Curve => self.curves.pop().map(Shape::from),
            Mode::Clock => self.clocks.pop().map(Shape::from),
        }
    }

    /// Drop every shape of every mode
    pub fn clear(&mut self) {
        self.lines.clear();
        self.circles.clear();
        self.curves.clear();
        self.clocks.clear();
    }

    /// Number of committed shapes for `mode`
    pub fn len(&self, mode: Mode) -> usize {
        match mode {
            Mode::Line => self.lines.len(),
            Mode::Circle => self.circles.len(),
            Mode::Curve => self.curves.len(),
            Mode::Clock => self.clocks.len(),
        }
    }

    /// Returns true if no mode has a committed shape
    pub fn is_empty(&self) -> bool {
        Mode::ALL.iter().all(|&mode| self.len(mode) == 0)
    }

    pub fn lines(&self) -> &[LineShape] {
        &self.lines
    }

    pub fn circles(&self) -> &[CircleShape] {
        &self.circles
    }

    pub fn curves(&self) -> &[CurveShape] {
        &self.curves
    }

    pub fn clocks(&self) -> &[ClockShape] {
        &self.clocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CanvasSize, Point};
    use crate::raster::Rasterizer;

    fn line(raster: &Rasterizer, x: i32) -> Shape {
        LineShape::rasterize(raster, Point::new(x, 1), Point::new(x, 5)).into()
    }

    #[test]
    fn test_undo_only_touches_requested_mode() {
        let raster = Rasterizer::new(CanvasSize::default());
        let mut history = ShapeHistory::new();
        history.push(line(&raster, 1));
        history.push(line(&raster, 2));
        history.push(CircleShape::rasterize(&raster, Point::new(50, 50), 3).into());

        let popped = history.undo(Mode::Line).unwrap();
        assert_eq!(popped, line(&raster, 2));
        assert_eq!(history.len(Mode::Line), 1);
        assert_eq!(history.len(Mode::Circle), 1);
    }

    #[test]
    fn test_undo_on_empty_stack() {
        let mut history = ShapeHistory::new();
        assert!(history.undo(Mode::Clock).is_none());
        assert!(history.undo(Mode::Clock).is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let raster = Rasterizer::new(CanvasSize::default());
        let mut history = ShapeHistory::new();
        history.push(line(&raster, 1));
        history.push(ClockShape::rasterize(&raster, Point::new(50, 50), 8).into());
        history.clear();
        assert!(history.is_empty());
        history.clear();
        assert!(history.is_empty());
    }
}
