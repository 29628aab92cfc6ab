use super::Rasterizer;
use crate::clock::TimeAngle;
use crate::geometry::Point;

/// Tips of the three clock hands, in pointer space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandEndpoints {
    pub hour: Point,
    pub minute: Point,
    pub second: Point,
}

impl HandEndpoints {
    pub fn new(center: Point, radius: u32, angle: &TimeAngle) -> Self {
        let radius = radius as f32;
        let tip = |(cos, sin): (f32, f32)| {
            Point::new(
                (center.x as f32 + radius * cos) as i32,
                (center.y as f32 + radius * sin) as i32,
            )
        };
        Self {
            hour: tip(angle.hour),
            minute: tip(angle.minute),
            second: tip(angle.second),
        }
    }
}

impl Rasterizer {
    /// Rasterize the hour, minute and second hands from `center`.
    pub fn hands_into(
        &self,
        center: Point,
        radius: u32,
        angle: &TimeAngle,
        pixels: &mut Vec<Point>,
    ) {
        let tips = HandEndpoints::new(center, radius, angle);
        self.line_into(center, tips.hour, pixels);
        self.line_into(center, tips.minute, pixels);
        self.line_into(center, tips.second, pixels);
    }
}
