//! Palette colors for highlighted segments
//!
//! The palette is closed: configuration names outside it are rejected
//! at load time, so renderers can match exhaustively.

use crossterm::style::Color as TermColor;

/// Colors a syntax rule may assign to its matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Magenta,
    White,
    /// Terminal default styling
    Reset,
}

impl Color {
    /// Every palette entry, in documentation order
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Cyan,
        Color::Magenta,
        Color::White,
        Color::Reset,
    ];

    /// Configuration name for this color
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::White => "white",
            Color::Reset => "reset",
        }
    }

    /// Parse a color from its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "cyan" => Some(Color::Cyan),
            "magenta" => Some(Color::Magenta),
            "white" => Some(Color::White),
            "reset" => Some(Color::Reset),
            _ => None,
        }
    }

    /// Foreground color to emit, or `None` when the segment should be
    /// written with all attributes reset
    ///
    /// Uses the normal-intensity ANSI range (30-37).
    pub fn foreground(&self) -> Option<TermColor> {
        match self {
            Color::Red => Some(TermColor::DarkRed),
            Color::Green => Some(TermColor::DarkGreen),
            Color::Yellow => Some(TermColor::DarkYellow),
            Color::Blue => Some(TermColor::DarkBlue),
            Color::Cyan => Some(TermColor::DarkCyan),
            Color::Magenta => Some(TermColor::DarkMagenta),
            Color::White => Some(TermColor::Grey),
            Color::Reset => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
