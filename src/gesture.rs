use crate::geometry::Point;

/// Number of control points a cubic curve needs.
pub const CURVE_CONTROL_POINTS: usize = 4;

/// In-progress pointer gesture.
///
/// `start` is set by a pointer-down inside the canvas in the rubber-band modes
/// and taken back on release. Curve mode instead accumulates up to four
/// control points across clicks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Gesture {
    start: Option<Point>,
    pointer: Point,
    control_points: Vec<Point>,
}

impl Gesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rubber-band anchor, present while the pointer is held down
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Last known pointer position
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn is_pressing(&self) -> bool {
        self.start.is_some()
    }

    pub fn is_drawing_curve(&self) -> bool {
        !self.control_points.is_empty()
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn track(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    pub fn press(&mut self, start: Point) {
        self.start = Some(start);
        self.pointer = start;
    }

    /// End the rubber band, returning its anchor if one was set.
    pub fn release(&mut self) -> Option<Point> {
        self.start.take()
    }

    /// Append a curve control point; ignored once four are held.
    pub fn add_control_point(&mut self, point: Point) -> bool {
        if self.control_points.len() >= CURVE_CONTROL_POINTS {
            return false;
        }
        self.control_points.push(point);
        self.pointer = point;
        true
    }

    /// Take the control points once exactly four are accumulated.
    pub fn take_curve(&mut self) -> Option<[Point; 4]> {
        let control: [Point; 4] = self.control_points.as_slice().try_into().ok()?;
        self.control_points.clear();
        Some(control)
    }

    pub fn discard_curve(&mut self) {
        self.control_points.clear();
    }
}
