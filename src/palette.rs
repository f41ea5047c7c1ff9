// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

/// Named base colors accepted by `-C`.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorName {
    Green,
    Red,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
    Black,
}

/// Name, variant and terminal color, in listing order.
pub static COLOR_TABLE: [(&str, ColorName, Color); 8] = [
    ("green", ColorName::Green, Color::DarkGreen),
    ("red", ColorName::Red, Color::DarkRed),
    ("blue", ColorName::Blue, Color::DarkBlue),
    ("yellow", ColorName::Yellow, Color::DarkYellow),
    ("magenta", ColorName::Magenta, Color::DarkMagenta),
    ("cyan", ColorName::Cyan, Color::DarkCyan),
    ("white", ColorName::White, Color::Grey),
    ("black", ColorName::Black, Color::Black),
];

/// Rainbow mode picks uniformly from the same eight colors as the name table.
pub static RAINBOW: [Color; 8] = [
    Color::DarkGreen,
    Color::DarkRed,
    Color::DarkBlue,
    Color::DarkYellow,
    Color::DarkMagenta,
    Color::DarkCyan,
    Color::Grey,
    Color::Black,
];

pub const HEAD_COLOR: Color = Color::White;
pub const ERASE_COLOR: Color = Color::Black;

impl ColorName {
    pub fn color(self) -> Color {
        COLOR_TABLE
            .iter()
            .find(|(_, name, _)| *name == self)
            .map(|&(_, _, c)| c)
            .unwrap_or(Color::DarkGreen)
    }

    pub fn label(self) -> &'static str {
        COLOR_TABLE
            .iter()
            .find(|(_, name, _)| *name == self)
            .map(|&(label, _, _)| label)
            .unwrap_or("green")
    }
}
