// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bold: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        fg: None,
        bold: false,
    };

    pub fn glyph(ch: char, fg: Color, bold: bool) -> Self {
        Self {
            ch,
            fg: Some(fg),
            bold,
        }
    }

    /// Blank cell painted in `fg`, used to wipe the row a tail just left.
    pub fn erase(fg: Color) -> Self {
        Self {
            ch: ' ',
            fg: Some(fg),
            bold: false,
        }
    }
}
