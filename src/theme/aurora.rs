use super::palette::Palette;
use ratatui::style::Color;

/// Conversational / ask-the-assistant look: deep violet with mauve and pink
/// accents, mirroring the original prototype's AI-mode gradient.
pub const AURORA: Palette = Palette {
    base: Color::Rgb(36, 29, 48),
    mantle: Color::Rgb(31, 25, 42),
    crust: Color::Rgb(25, 20, 34),
    text: Color::Rgb(230, 223, 240),
    subtext0: Color::Rgb(167, 156, 186),
    subtext1: Color::Rgb(190, 180, 206),
    surface0: Color::Rgb(53, 43, 70),
    surface1: Color::Rgb(66, 54, 87),
    surface2: Color::Rgb(81, 67, 106),
    overlay0: Color::Rgb(110, 94, 138),
    overlay1: Color::Rgb(132, 116, 160),
    blue: Color::Rgb(134, 140, 250),
    lavender: Color::Rgb(178, 170, 252),
    teal: Color::Rgb(128, 200, 212),
    green: Color::Rgb(150, 200, 145),
    yellow: Color::Rgb(233, 196, 133),
    peach: Color::Rgb(240, 160, 120),
    red: Color::Rgb(233, 110, 130),
    mauve: Color::Rgb(196, 144, 240),
    pink: Color::Rgb(242, 146, 205),
};
