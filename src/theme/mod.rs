use ratatui::style::{Modifier, Style};

pub mod aurora;
pub mod cove;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_active: Style,
    pub header_item: Style,

    pub input_text: Style,
    pub input_placeholder: Style,
    pub mode_badge: Style,
    pub query_echo: Style,

    pub highlight: Style,
    pub list_item: Style,
    pub subtext: Style,
    pub section_label: Style,

    pub footer: Style,
    pub footer_segment_key: Style,
    pub footer_segment_val: Style,

    pub status_ready: Style,
    pub status_error: Style,

    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteType {
    Cove,
    Aurora,
}

impl Theme {
    /// The visual theme follows the mode flag: keyword search renders Cove,
    /// conversational input renders Aurora.
    #[must_use]
    pub fn for_mode(conversational: bool) -> Self {
        if conversational {
            Self::from_palette_type(PaletteType::Aurora)
        } else {
            Self::from_palette_type(PaletteType::Cove)
        }
    }

    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Cove => Self::from_palette(&cove::COVE),
            PaletteType::Aurora => Self::from_palette(&aurora::AURORA),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header: Style::default().bg(p.base).fg(p.text),
            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_active: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),

            input_text: Style::default().fg(p.text),
            input_placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
            mode_badge: Style::default()
                .bg(p.lavender)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            query_echo: Style::default().fg(p.lavender).add_modifier(Modifier::BOLD),

            highlight: Style::default()
                .fg(p.yellow)
                .bg(dim_color(p.yellow, 0.25))
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            subtext: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            section_label: Style::default()
                .fg(p.overlay1)
                .add_modifier(Modifier::BOLD),

            footer: Style::default().bg(p.crust).fg(p.subtext0),
            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.crust).fg(p.text),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::Cove)
    }
}
