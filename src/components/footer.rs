use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {err}  "), theme.status_error)
        } else if state.catalog.is_none() {
            Span::styled("  LOADING  ", theme.header_item)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mode_span = if state.search.is_ai_mode {
            Span::styled(" ✦ ASK AI ", theme.header_active)
        } else {
            Span::styled(" ⌕ SEARCH ", theme.mode_badge)
        };

        let mut spans = vec![status_span, Span::raw(" "), mode_span, Span::raw(" ")];

        // Committed query badge, like an active filter.
        if let Some(committed) = &state.committed {
            spans.push(Span::styled(
                format!(" QUERY: {} ", committed.query),
                theme.header_item,
            ));
            spans.push(Span::raw(" "));
        }

        let hints: &[(&str, &str)] = match state.mode {
            AppMode::Search => &[
                ("Esc", "close"),
                ("Tab", "mode"),
                ("Enter", "go"),
            ],
            AppMode::Help => &[("Esc", "close")],
            AppMode::Browse => &[
                ("/", "search"),
                ("c", "clear"),
                ("?", "help"),
                ("q", "quit"),
            ],
        };

        let available_width = area.width.saturating_sub(4) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for (key, desc) in hints {
            let key_str = format!(" {key} ");
            let desc_str = format!(" {desc} ");
            let item_width = key_str.len() + desc_str.len();
            if current_width + item_width + 1 > available_width {
                break;
            }
            spans.push(Span::styled(key_str, theme.footer_segment_key));
            spans.push(Span::styled(desc_str, theme.footer_segment_val));
            spans.push(Span::raw(" "));
            current_width += item_width + 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
