use crate::geometry::Point;

mod handler;
pub use handler::InputHandler;

/// Discrete keyboard commands understood by the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    ToggleHelp,
    ToggleControlPoints,
    Clear,
    Undo,
    SelectLine,
    SelectCircle,
    SelectCurve,
    SelectClock,
    Quit,
}

impl KeyCommand {
    /// Map a typed character to its command; letters are case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        let command = match c.to_ascii_lowercase() {
            'h' => Self::ToggleHelp,
            'p' => Self::ToggleControlPoints,
            'x' => Self::Clear,
            'u' => Self::Undo,
            'l' => Self::SelectLine,
            'o' => Self::SelectCircle,
            's' => Self::SelectCurve,
            'c' => Self::SelectClock,
            'q' | '\u{1b}' => Self::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Input events in pointer space (origin at the top-left of the canvas)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown(Point),
    /// Primary button was released
    PointerUp(Point),
    /// Pointer moved, with or without the button held
    PointerMove(Point),
    /// A bound key was typed
    Key(KeyCommand),
}
