use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};
use crate::geometry::CanvasSize;

pub const ENV_CANVAS_WIDTH: &str = "SKETCH_CANVAS_WIDTH";
pub const ENV_CANVAS_HEIGHT: &str = "SKETCH_CANVAS_HEIGHT";
pub const ENV_UTC_OFFSET: &str = "SKETCH_UTC_OFFSET_MINUTES";

const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Startup configuration of the sketch pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchConfig {
    pub canvas: CanvasSize,
    /// Fixed offset from UTC for the clock hands; `None` follows the local time zone
    pub utc_offset_minutes: Option<i32>,
    pub show_help: bool,
    pub show_control_points: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            utc_offset_minutes: None,
            show_help: false,
            show_control_points: false,
        }
    }
}

impl SketchConfig {
    /// Defaults with overrides read from the process environment.
    pub fn from_env() -> SketchResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, then validate.
    pub fn with_overrides<F>(mut self, lookup: F) -> SketchResult<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(width) = parse_override(&lookup, ENV_CANVAS_WIDTH)? {
            self.canvas.width = width;
        }
        if let Some(height) = parse_override(&lookup, ENV_CANVAS_HEIGHT)? {
            self.canvas.height = height;
        }
        if let Some(offset) = parse_override(&lookup, ENV_UTC_OFFSET)? {
            self.utc_offset_minutes = Some(offset);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> SketchResult<()> {
        let CanvasSize { width, height } = self.canvas;
        if width <= 0 || height <= 0 {
            return Err(SketchError::InvalidCanvas { width, height });
        }
        if let Some(offset) = self
            .utc_offset_minutes
            .filter(|offset| offset.abs() > MAX_UTC_OFFSET_MINUTES)
        {
            return Err(SketchError::InvalidUtcOffset(offset));
        }
        Ok(())
    }
}

fn parse_override<F>(lookup: &F, key: &'static str) -> SketchResult<Option<i32>>
where
    F: Fn(&'static str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    match value.trim().parse() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(SketchError::InvalidOverride { key, value }),
    }
}
