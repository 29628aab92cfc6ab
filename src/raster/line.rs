use std::mem::swap;

use super::Rasterizer;
use crate::geometry::Point;

/// Maps a walk position (major, minor) back to pointer-space (x, y).
type Unwalk = fn(i32, i32) -> (i32, i32);

fn along_x(major: i32, minor: i32) -> (i32, i32) {
    (major, minor)
}

fn along_y(major: i32, minor: i32) -> (i32, i32) {
    (minor, major)
}

impl Rasterizer {
    /// Midpoint line between `p0` and `p1`, both endpoints included.
    ///
    /// Steep lines walk along y instead of x. The axis choice is made once
    /// before the walk and the east/diagonal decision is an arithmetic blend,
    /// so the inner loop carries no data-dependent branch. This runs for
    /// every drag-preview frame.
    pub fn line_into(&self, p0: Point, p1: Point, pixels: &mut Vec<Point>) {
        let (mut x0, mut y0, mut x1, mut y1) = (p0.x, p0.y, p1.x, p1.y);
        let mut dx = (x1 - x0).abs();
        let mut dy = (y1 - y0).abs();

        let mut unwalk: Unwalk = along_x;
        if dy > dx {
            swap(&mut dx, &mut dy);
            swap(&mut x0, &mut y0);
            swap(&mut x1, &mut y1);
            unwalk = along_y;
        }
        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }

        let step = if y0 > y1 { -1 } else { 1 };
        let d_east = 2 * dy;
        let d_diagonal = 2 * (dy - dx);
        let mut d = 2 * dy - dx;
        let (mut x, mut y) = (x0, y0);

        pixels.reserve((x1 - x0) as usize + 1);
        let (px, py) = unwalk(x, y);
        self.emit(px, py, pixels);
        while x < x1 {
            x += 1;
            let east = i32::from(d <= 0);
            let diagonal = 1 - east;
            d += d_east * east + d_diagonal * diagonal;
            y += step * diagonal;

            let (px, py) = unwalk(x, y);
            self.emit(px, py, pixels);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{CanvasSize, Point};
    use crate::raster::Rasterizer;

    fn raster() -> Rasterizer {
        Rasterizer::new(CanvasSize::new(100, 100))
    }

    #[test]
    fn test_single_pixel() {
        let pixels = raster().line(Point::new(7, 9), Point::new(7, 9));
        assert_eq!(pixels, vec![Point::new(7, 91)]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        let horizontal = raster().line(Point::new(2, 10), Point::new(6, 10));
        assert_eq!(horizontal.len(), 5);
        assert!(horizontal.iter().all(|p| p.y == 90));

        let vertical = raster().line(Point::new(3, 20), Point::new(3, 10));
        assert_eq!(vertical.len(), 11);
        assert!(vertical.iter().all(|p| p.x == 3));
    }

    #[test]
    fn test_diagonal() {
        let pixels = raster().line(Point::new(0, 0), Point::new(4, 4));
        let expected: Vec<Point> = (0..=4).map(|i| Point::new(i, 100 - i)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_steep_line_has_no_gaps() {
        let pixels = raster().line(Point::new(10, 10), Point::new(13, 30));
        assert_eq!(pixels.len(), 21);
        for pair in pixels.windows(2) {
            assert_eq!((pair[1].y - pair[0].y).abs(), 1);
            assert!((pair[1].x - pair[0].x).abs() <= 1);
        }
    }
}
