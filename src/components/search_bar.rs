use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// The always-visible search bar. Closed it shows a hint, open it hosts the
/// live query input; the mode badge in the title tracks the classifier.
pub struct SearchBar<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let open = self.state.mode == AppMode::Search;
        let is_ai = self.state.search.is_ai_mode;

        let badge = if is_ai { " ✦ ASK AI " } else { " ⌕ SEARCH " };
        let badge_style = if is_ai {
            self.theme.header_active
        } else {
            self.theme.mode_badge
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(badge, badge_style),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Tab", self.theme.footer_segment_key),
                Span::raw(": mode "),
                Span::styled("Enter", self.theme.footer_segment_key),
                Span::raw(": go "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if open {
                self.theme.border_focus
            } else {
                self.theme.border
            });

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if open {
            Widget::render(&self.state.search.input, inner, buf);
        } else {
            let query = self.state.search.query();
            let line = if query.is_empty() {
                let placeholder = if is_ai {
                    "Ask for anything"
                } else {
                    "Search everywhere"
                };
                Line::from(vec![
                    Span::styled(placeholder, self.theme.input_placeholder),
                    Span::raw("   "),
                    Span::styled("/", self.theme.footer_segment_key),
                    Span::styled(" to search", self.theme.dimmed),
                ])
            } else {
                Line::from(Span::styled(query, self.theme.dimmed))
            };
            Paragraph::new(line).render(inner, buf);
        }
    }
}
