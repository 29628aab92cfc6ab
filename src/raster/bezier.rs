use super::Rasterizer;
use crate::geometry::Point;

/// Number of fixed parameter steps a cubic curve is flattened into.
pub const BEZIER_SEGMENTS: u32 = 40;

fn bernstein(t: f32) -> [f32; 4] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * t * s * s, 3.0 * t * t * s, t * t * t]
}

/// Curve position at `t`, truncated toward zero.
///
/// Weighted relative to the first control point, so coincident control points
/// evaluate to exactly that point rather than drifting by float rounding.
fn evaluate(control: &[Point; 4], t: f32) -> Point {
    let origin = control[0];
    let weights = bernstein(t);
    let (mut x, mut y) = (origin.x as f32, origin.y as f32);
    for (point, weight) in control.iter().zip(weights).skip(1) {
        x += (point.x - origin.x) as f32 * weight;
        y += (point.y - origin.y) as f32 * weight;
    }
    Point::new(x as i32, y as i32)
}

impl Rasterizer {
    /// Flatten a cubic Bézier into rasterized line segments.
    ///
    /// The curve is sampled at `t = 1/40, 2/40, ..., 1`, and each sample is joined
    /// to the previous one (starting from the first control point) with
    /// [`Rasterizer::line_into`]. Output is therefore pixels, not samples.
    pub fn bezier_into(&self, control: &[Point; 4], pixels: &mut Vec<Point>) {
        let mut begin = control[0];
        for step in 1..=BEZIER_SEGMENTS {
            let t = step as f32 / BEZIER_SEGMENTS as f32;
            let end = evaluate(control, t);
            self.line_into(begin, end, pixels);
            begin = end;
        }
    }
}
