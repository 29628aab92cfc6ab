//! Committed shapes.
//!
//! Each shape owns its rasterized pixels outright; they are computed once when
//! the shape is committed and dropped with it on undo or clear. Clock hands are
//! the exception: only the face is cached, the hands are re-derived per frame
//! from the stored center and radius.

use crate::clock::TimeAngle;
use crate::geometry::Point;
use crate::mode::Mode;
use crate::raster::Rasterizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineShape {
    pub p0: Point,
    pub p1: Point,
    pixels: Vec<Point>,
}

impl LineShape {
    pub fn rasterize(raster: &Rasterizer, p0: Point, p1: Point) -> Self {
        Self {
            p0,
            p1,
            pixels: raster.line(p0, p1),
        }
    }

    pub fn pixels(&self) -> &[Point] {
        &self.pixels
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircleShape {
    pub center: Point,
    pub radius: u32,
    pixels: Vec<Point>,
}

impl CircleShape {
    pub fn rasterize(raster: &Rasterizer, center: Point, radius: u32) -> Self {
        Self {
            center,
            radius,
            pixels: raster.circle(center, radius),
        }
    }

    pub fn pixels(&self) -> &[Point] {
        &self.pixels
    }
}

/// A flattened cubic curve together with its control polygon.
///
/// The polygon is the "control overlay": three segments joining the four
/// control points. Both are committed and undone as one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveShape {
    pub control: [Point; 4],
    pixels: Vec<Point>,
    control_overlay: Vec<Point>,
}

impl CurveShape {
    pub fn rasterize(raster: &Rasterizer, control: [Point; 4]) -> Self {
        let mut control_overlay = Vec::new();
        raster.polyline_into(&control, &mut control_overlay);
        Self {
            control,
            pixels: raster.bezier(&control),
            control_overlay,
        }
    }

    pub fn pixels(&self) -> &[Point] {
        &self.pixels
    }

    pub fn control_overlay(&self) -> &[Point] {
        &self.control_overlay
    }
}

/// Clock face plus the parameters its hands are re-derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockShape {
    pub center: Point,
    pub radius: u32,
    face: Vec<Point>,
}

impl ClockShape {
    pub fn rasterize(raster: &Rasterizer, center: Point, radius: u32) -> Self {
        Self {
            center,
            radius,
            face: raster.circle(center, radius),
        }
    }

    /// Cached face pixels
    pub fn pixels(&self) -> &[Point] {
        &self.face
    }

    /// Append the hands for the current refresh.
    pub fn hands_into(&self, raster: &Rasterizer, angle: &TimeAngle, pixels: &mut Vec<Point>) {
        raster.hands_into(self.center, self.radius, angle, pixels);
    }
}

/// Any committed shape, as handed back by undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Line(LineShape),
    Circle(CircleShape),
    Curve(CurveShape),
    Clock(ClockShape),
}

impl Shape {
    pub fn mode(&self) -> Mode {
        match self {
            Shape::Line(_) => Mode::Line,
            Shape::Circle(_) => Mode::Circle,
            Shape::Curve(_) => Mode::Curve,
            Shape::Clock(_) => Mode::Clock,
        }
    }

    pub fn pixels(&self) -> &[Point] {
        match self {
            Shape::Line(shape) => shape.pixels(),
            Shape::Circle(shape) => shape.pixels(),
            Shape::Curve(shape) => shape.pixels(),
            Shape::Clock(shape) => shape.pixels(),
        }
    }
}

impl From<LineShape> for Shape {
    fn from(shape: LineShape) -> Self {
        Shape::Line(shape)
    }
}

impl From<CircleShape> for Shape {
    fn from(shape: CircleShape) -> Self {
        Shape::Circle(shape)
    }
}

impl From<CurveShape> for Shape {
    fn from(shape: CurveShape) -> Self {
        Shape::Curve(shape)
    }
}

impl From<ClockShape> for Shape {
    fn from(shape: ClockShape) -> Self {
        Shape::Clock(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CanvasSize;

    #[test]
    fn test_curve_overlay_joins_control_points() {
        let raster = Rasterizer::new(CanvasSize::default());
        let control = [
            Point::new(10, 10),
            Point::new(20, 10),
            Point::new(20, 20),
            Point::new(30, 20),
        ];
        let curve = CurveShape::rasterize(&raster, control);
        // 11 + 11 + 11 pixels, joints repeated once per segment
        assert_eq!(curve.control_overlay().len(), 33);
        assert_eq!(curve.control_overlay()[0], Point::new(10, 590));
        assert_eq!(*curve.control_overlay().last().unwrap(), Point::new(30, 580));
    }

    #[test]
    fn test_shape_mode() {
        let raster = Rasterizer::new(CanvasSize::default());
        let clock: Shape = ClockShape::rasterize(&raster, Point::new(50, 50), 10).into();
        assert_eq!(clock.mode(), Mode::Clock);
        assert_eq!(clock.pixels(), raster.circle(Point::new(50, 50), 10).as_slice());
    }
}
