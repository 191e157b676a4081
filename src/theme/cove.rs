use super::palette::Palette;
use ratatui::style::Color;

/// Traditional keyword-search look: cool slate with a blue accent.
pub const COVE: Palette = Palette {
    base: Color::Rgb(30, 34, 42),
    mantle: Color::Rgb(26, 29, 36),
    crust: Color::Rgb(21, 24, 30),
    text: Color::Rgb(219, 223, 231),
    subtext0: Color::Rgb(154, 161, 176),
    subtext1: Color::Rgb(178, 184, 197),
    surface0: Color::Rgb(44, 50, 61),
    surface1: Color::Rgb(55, 62, 75),
    surface2: Color::Rgb(68, 76, 92),
    overlay0: Color::Rgb(96, 106, 124),
    overlay1: Color::Rgb(118, 128, 147),
    blue: Color::Rgb(97, 154, 234),
    lavender: Color::Rgb(160, 172, 245),
    teal: Color::Rgb(94, 196, 188),
    green: Color::Rgb(138, 197, 125),
    yellow: Color::Rgb(229, 192, 107),
    peach: Color::Rgb(233, 150, 98),
    red: Color::Rgb(226, 100, 106),
    mauve: Color::Rgb(174, 134, 227),
    pink: Color::Rgb(227, 138, 188),
};
