//! Light and dark color themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

/// Colors used when drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Default text.
    pub text: Color,
    /// Secondary text and grid lines.
    pub muted: Color,
    /// Headings.
    pub accent: Color,
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Background of the cursor cell.
    pub cursor: Color,
    /// Background of winning cells.
    pub win: Color,
}

/// Confetti colors: coral, steel blue, amber, orange, violet, azure.
pub const CONFETTI_COLORS: [Color; 6] = [
    Color::Rgb(0xff, 0x7e, 0x5f),
    Color::Rgb(0x4a, 0x6f, 0xa5),
    Color::Rgb(0xff, 0xbe, 0x0b),
    Color::Rgb(0xfb, 0x56, 0x07),
    Color::Rgb(0x83, 0x38, 0xec),
    Color::Rgb(0x3a, 0x86, 0xff),
];

const LIGHT: Palette = Palette {
    background: Color::Rgb(245, 245, 250),
    text: Color::Rgb(40, 40, 50),
    muted: Color::Rgb(140, 140, 150),
    accent: Color::Rgb(0x4a, 0x6f, 0xa5),
    x: Color::Rgb(0xfb, 0x56, 0x07),
    o: Color::Rgb(0x3a, 0x86, 0xff),
    cursor: Color::Rgb(215, 215, 225),
    win: Color::Rgb(120, 220, 120),
};

const DARK: Palette = Palette {
    background: Color::Rgb(32, 34, 37),
    text: Color::Rgb(240, 240, 245),
    muted: Color::Rgb(120, 125, 135),
    accent: Color::Rgb(0xff, 0xbe, 0x0b),
    x: Color::Rgb(0xff, 0x7e, 0x5f),
    o: Color::Rgb(0x83, 0x38, 0xec),
    cursor: Color::Rgb(70, 72, 78),
    win: Color::Rgb(50, 160, 70),
};

impl Theme {
    /// Switches between light and dark.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle hint, naming the theme a toggle switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }

    /// Colors for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}
