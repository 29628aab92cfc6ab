mod point;

pub use point::Point;

use serde::{Deserialize, Serialize};

/// Fixed logical canvas the sketch is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl CanvasSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A point is inside the canvas only if it lies strictly between the edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x > 0 && point.x < self.width && point.y > 0 && point.y < self.height
    }

    /// Flip a pointer-space y coordinate into the bottom-up stored convention.
    #[inline]
    pub fn flip_y(&self, y: i32) -> i32 {
        self.height - y
    }
}

/// Euclidean distance between two points, truncated toward zero.
///
/// Circle and clock radii are derived with this, so `(0,0)-(1,1)` gives 1, not 2.
pub fn int_distance(start: Point, end: Point) -> u32 {
    let dx = i64::from(end.x) - i64::from(start.x);
    let dy = i64::from(end.y) - i64::from(start.y);
    ((dx * dx + dy * dy) as f64).sqrt() as u32
}
