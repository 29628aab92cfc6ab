use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

use crate::geometry::{CanvasSize, Point};
use crate::scene::Scene;

pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;
pub const SHAPE_COLOR: Color32 = Color32::WHITE;
pub const ACCENT_COLOR: Color32 = Color32::from_rgb(0, 255, 102);

/// Height of one HUD text line, in canvas pixels
const LINE_HEIGHT: i32 = 13;
/// Stored-space anchors of the menu (top-left) and status line (bottom-left)
const MENU_ANCHOR: (i32, i32) = (12, 24);
const STATUS_ANCHOR: (i32, i32) = (12, 24);

/// Maps the logical canvas onto the screen rect it is shown in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasView {
    rect: Rect,
    canvas: CanvasSize,
}

impl CanvasView {
    pub fn new(rect: Rect, canvas: CanvasSize) -> Self {
        Self { rect, canvas }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Screen size of one canvas pixel
    pub fn scale(&self) -> Vec2 {
        egui::vec2(
            self.rect.width() / self.canvas.width as f32,
            self.rect.height() / self.canvas.height as f32,
        )
    }

    /// Pointer-space canvas coordinate under a screen position.
    pub fn to_canvas(&self, pos: Pos2) -> Point {
        let scale = self.scale();
        let offset = pos - self.rect.min;
        Point::new(
            (offset.x / scale.x).floor() as i32,
            (offset.y / scale.y).floor() as i32,
        )
    }

    /// Top-left screen corner of a stored (bottom-up) pixel.
    pub fn to_screen(&self, pixel: Point) -> Pos2 {
        let scale = self.scale();
        self.rect.min
            + egui::vec2(
                pixel.x as f32 * scale.x,
                self.canvas.flip_y(pixel.y) as f32 * scale.y,
            )
    }

    /// Screen area covered by a stored pixel
    pub fn pixel_rect(&self, pixel: Point) -> Rect {
        Rect::from_min_size(self.to_screen(pixel), self.scale())
    }
}

/// Draws a [`Scene`] and the HUD text with an egui painter. No geometry happens here.
#[derive(Debug, Clone)]
pub struct Renderer {
    shape_color: Color32,
    accent_color: Color32,
    font: FontId,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            shape_color: SHAPE_COLOR,
            accent_color: ACCENT_COLOR,
            font: FontId::monospace(LINE_HEIGHT as f32),
        }
    }

    /// One filled square per pixel
    pub fn pixel_shapes<'p>(
        view: &CanvasView,
        pixels: impl Iterator<Item = &'p Point>,
        color: Color32,
    ) -> Vec<egui::Shape> {
        pixels
            .filter(|&&pixel| view.rect.intersects(view.pixel_rect(pixel)))
            .map(|&pixel| egui::Shape::rect_filled(view.pixel_rect(pixel), 0.0, color))
            .collect()
    }

    /// Paint the background, the scene and the HUD.
    pub fn render(
        &self,
        painter: &Painter,
        view: &CanvasView,
        scene: &Scene<'_>,
        menu: &[&str],
        status: &str,
    ) {
        painter.rect_filled(view.rect(), 0.0, BACKGROUND_COLOR);
        painter.extend(Self::pixel_shapes(view, scene.primary(), self.shape_color));
        painter.extend(Self::pixel_shapes(view, scene.accent(), self.accent_color));
        self.render_text(painter, view, menu, status);
    }

    fn render_text(&self, painter: &Painter, view: &CanvasView, menu: &[&str], status: &str) {
        let height = view.canvas.height;
        let (x, top) = (MENU_ANCHOR.0, height - MENU_ANCHOR.1);
        for (i, line) in menu.iter().enumerate() {
            let y = top - LINE_HEIGHT * i as i32;
            painter.text(
                view.to_screen(Point::new(x, y)),
                Align2::LEFT_BOTTOM,
                *line,
                self.font.clone(),
                self.accent_color,
            );
        }
        painter.text(
            view.to_screen(Point::new(STATUS_ANCHOR.0, STATUS_ANCHOR.1)),
            Align2::LEFT_BOTTOM,
            status,
            self.font.clone(),
            self.accent_color,
        );
    }
}
