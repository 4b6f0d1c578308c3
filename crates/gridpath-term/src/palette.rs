//! Cell colours and glyphs.
//!
//! Colours follow the classic visualiser look: black floor, white walls,
//! green start, red end, purple frontier, cyan visited, orange path.

use crossterm::style::Color;
use gridpath_core::CellState;

pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Color = Color::Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const GREEN: Color = Color::Rgb {
    r: 69,
    g: 139,
    b: 116,
};
pub const RED: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const PURPLE: Color = Color::Rgb {
    r: 160,
    g: 32,
    b: 240,
};
pub const CYAN: Color = Color::Rgb {
    r: 0,
    g: 255,
    b: 255,
};
pub const ORANGE: Color = Color::Rgb {
    r: 255,
    g: 165,
    b: 0,
};

/// Background colour for a cell.
pub fn color(state: CellState) -> Color {
    match state {
        CellState::Open => BLACK,
        CellState::Barrier => WHITE,
        CellState::Start => GREEN,
        CellState::End => RED,
        CellState::Frontier => PURPLE,
        CellState::Visited => CYAN,
        CellState::Path => ORANGE,
    }
}

/// Two-column glyph drawn over the background. Endpoints get a letter so
/// they stay readable on terminals without true colour.
pub fn glyph(state: CellState) -> &'static str {
    match state {
        CellState::Start => "S ",
        CellState::End => "E ",
        _ => "  ",
    }
}
