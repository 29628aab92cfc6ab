use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing mode; exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Line,
    Circle,
    Curve,
    Clock,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Line, Mode::Circle, Mode::Curve, Mode::Clock];

    /// Key letter shown in the status line
    pub fn letter(self) -> char {
        match self {
            Mode::Line => 'L',
            Mode::Circle => 'O',
            Mode::Curve => 'S',
            Mode::Clock => 'C',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Line => "Line",
            Mode::Circle => "Circle",
            Mode::Curve => "Curve",
            Mode::Clock => "Clock",
        }
    }

    /// Modes whose gesture is a single press-drag-release.
    pub fn is_rubber_band(self) -> bool {
        !matches!(self, Mode::Curve)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
