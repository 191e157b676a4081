use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Welcome<'a> {
    pub theme: &'a Theme,
}

impl Widget for Welcome<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let logo_ascii = [
            r"  ___  __  __ _  _ ___ ",
            r" / _ \|  \/  | \| |_ _|",
            r"| (_) | |\/| | .` || | ",
            r" \___/|_|  |_|_|\_|___|",
        ];

        let mut lines: Vec<Line> = logo_ascii
            .iter()
            .map(|l| Line::from(Span::styled(*l, self.theme.header_logo)))
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" OMNISWITCH ", self.theme.header_logo),
            Span::raw(" - smart search toggle prototype"),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(
            "The search bar detects natural language as you type and flips",
        ));
        lines.push(Line::from(
            "between keyword search and assistant mode automatically.",
        ));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("/", self.theme.footer_segment_key),
            Span::raw(" and try:"),
        ]));
        lines.push(Line::from(vec![
            Span::styled("\"What are the recent API discussions?\"", self.theme.list_item),
            Span::styled("  switches to assistant mode", self.theme.dimmed),
        ]));
        lines.push(Line::from(vec![
            Span::styled("\"engineering\"", self.theme.list_item),
            Span::styled("  stays in keyword search", self.theme.dimmed),
        ]));
        lines.push(Line::from(vec![
            Span::styled("\"design\"", self.theme.list_item),
            Span::styled("  shows live typeahead matches", self.theme.dimmed),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("q", self.theme.footer_segment_key),
            Span::raw(" to quit, "),
            Span::styled("?", self.theme.footer_segment_key),
            Span::raw(" for all keys"),
        ]));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);

        let content_height = 17;
        let centered_area = Rect {
            x: area.x,
            y: (area.y + area.height / 2).saturating_sub(content_height / 2),
            width: area.width,
            height: content_height.min(area.height),
        };

        if centered_area.width > 0 && centered_area.height > 0 {
            paragraph.render(centered_area, buf);
        }
    }
}
