//! Text shown over the canvas: the help banner, key menu and status line.

use crate::document::Document;

/// Always-visible banner
pub const TOGGLE: [&str; 3] = [
    "+---------------------+",
    "| H - Toggle Help     |",
    "+---------------------+",
];

/// Key bindings, shown below the banner while help is on
pub const MENU: [&str; 9] = [
    "| L - Line            |",
    "| O - Circle          |",
    "| S - Curve           |",
    "| C - Clock           |",
    "| U - Undo            |",
    "| X - Clear           |",
    "| P - Control Points  |",
    "| Q - Quit            |",
    "+---------------------+",
];

/// Banner and, when help is on, the key menu, top to bottom.
pub fn menu_lines(document: &Document) -> Vec<&'static str> {
    let mut lines = TOGGLE.to_vec();
    if document.show_help() {
        lines.extend_from_slice(&MENU);
    }
    lines
}

/// Mode letter, control-point flag and pointer position, e.g. `[SP] at (12, 40)`.
pub fn status_line(document: &Document) -> String {
    let flag = if document.show_control_points() { "P" } else { "" };
    format!(
        "[{}{}] at {}",
        document.mode().letter(),
        flag,
        document.gesture().pointer()
    )
}
