//! Integer scan conversion of the sketch primitives.
//!
//! Every function takes points in pointer space and returns pixels in stored
//! space (`y` flipped against the canvas height). The flip happens here and
//! nowhere else.

mod bezier;
mod circle;
mod hands;
mod line;

pub use bezier::BEZIER_SEGMENTS;
pub use hands::HandEndpoints;

use crate::clock::TimeAngle;
use crate::geometry::{CanvasSize, Point};

/// Stateless rasterizer bound to the canvas it flips against.
///
/// Each call returns a freshly allocated pixel sequence; the `*_into` variants
/// append to a caller-owned buffer instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rasterizer {
    canvas: CanvasSize,
}

impl Rasterizer {
    pub fn new(canvas: CanvasSize) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Store a pointer-space pixel.
    #[inline]
    fn emit(&self, x: i32, y: i32, pixels: &mut Vec<Point>) {
        pixels.push(Point::new(x, self.canvas.flip_y(y)));
    }

    pub fn line(&self, p0: Point, p1: Point) -> Vec<Point> {
        let mut pixels = Vec::new();
        self.line_into(p0, p1, &mut pixels);
        pixels
    }

    pub fn circle(&self, center: Point, radius: u32) -> Vec<Point> {
        let mut pixels = Vec::new();
        self.circle_into(center, radius, &mut pixels);
        pixels
    }

    pub fn bezier(&self, control: &[Point; 4]) -> Vec<Point> {
        let mut pixels = Vec::new();
        self.bezier_into(control, &mut pixels);
        pixels
    }

    /// The three hand segments of a clock at the given time.
    pub fn hands(&self, center: Point, radius: u32, angle: &TimeAngle) -> Vec<Point> {
        let mut pixels = Vec::new();
        self.hands_into(center, radius, angle, &mut pixels);
        pixels
    }

    /// Open polyline through `points`, one rasterized segment per consecutive pair.
    pub fn polyline_into(&self, points: &[Point], pixels: &mut Vec<Point>) {
        for pair in points.windows(2) {
            self.line_into(pair[0], pair[1], pixels);
        }
    }
}
