use super::Rasterizer;
use crate::geometry::Point;

impl Rasterizer {
    /// Emit the eight-way mirror images of an octant offset `(x, y)` with `x <= y`.
    ///
    /// Mirrors across an axis are skipped when the offset along that axis is 0,
    /// and the transposed set is skipped on the diagonal, so no pixel repeats.
    fn circle_points(&self, center: Point, x: i32, y: i32, pixels: &mut Vec<Point>) {
        self.mirror(center, x, y, pixels);
        if x != y {
            self.mirror(center, y, x, pixels);
        }
    }

    fn mirror(&self, center: Point, x: i32, y: i32, pixels: &mut Vec<Point>) {
        self.emit(center.x + x, center.y + y, pixels);
        if x != 0 {
            self.emit(center.x - x, center.y + y, pixels);
        }
        if y != 0 {
            self.emit(center.x + x, center.y - y, pixels);
        }
        if x != 0 && y != 0 {
            self.emit(center.x - x, center.y - y, pixels);
        }
    }

    /// Midpoint circle of `radius` around `center`.
    ///
    /// Walks the second octant from `(0, radius)` while `y >= x` and mirrors
    /// each step. Radius 0 yields the center alone.
    pub fn circle_into(&self, center: Point, radius: u32, pixels: &mut Vec<Point>) {
        let radius = radius as i32;
        let mut x = 0;
        let mut y = radius;
        let mut d = 1 - radius;
        let mut d_east = 3;
        let mut d_south_east = 5 - 2 * radius;

        self.circle_points(center, x, y, pixels);
        while y > x {
            x += 1;
            let east = i32::from(d < 0);
            let south_east = 1 - east;
            d += d_east * east + d_south_east * south_east;
            d_east += 2;
            d_south_east += 2 * east + 4 * south_east;
            y -= south_east;

            // the last step may cross the diagonal onto a mirror of the previous point
            if y >= x {
                self.circle_points(center, x, y, pixels);
            }
        }
    }
}
