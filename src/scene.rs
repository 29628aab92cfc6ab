use crate::geometry::Point;

/// Everything the renderer draws for one refresh.
///
/// Committed pixel sequences are borrowed from the document; transient ones
/// are derived for this refresh only and dropped with the scene.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scene<'a> {
    /// Committed shapes in draw order: lines, curves, circles, clock faces
    pub shapes: Vec<&'a [Point]>,
    /// Committed control polygons, only present while they are toggled visible
    pub control_overlays: Vec<&'a [Point]>,
    /// Rubber-band shape following the pointer
    pub preview: Vec<Point>,
    /// Polygon through pending curve control points up to the pointer
    pub curve_guide: Vec<Point>,
    /// Hands of every committed clock at the current time
    pub hands: Vec<Point>,
}

impl Scene<'_> {
    /// Pixels drawn in the primary colour
    pub fn primary(&self) -> impl Iterator<Item = &Point> {
        self.shapes
            .iter()
            .flat_map(|pixels| pixels.iter())
            .chain(&self.preview)
            .chain(&self.curve_guide)
            .chain(&self.hands)
    }

    /// Pixels drawn in the accent colour
    pub fn accent(&self) -> impl Iterator<Item = &Point> {
        self.control_overlays.iter().flat_map(|pixels| pixels.iter())
    }
}
