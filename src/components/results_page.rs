use crate::app::state::CommittedQuery;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// The page shown after a query is submitted. Conversational queries get a
/// canned assistant exchange, keyword queries a canned message-result list;
/// both are static fixtures standing in for a real backend.
pub struct ResultsPage<'a> {
    pub committed: &'a CommittedQuery,
    pub theme: &'a Theme,
}

impl Widget for ResultsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.committed.is_ai_mode {
            " ✦ ASSISTANT "
        } else {
            " ⌕ SEARCH RESULTS "
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title, self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = if self.committed.is_ai_mode {
            self.assistant_lines()
        } else {
            self.message_lines()
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

impl ResultsPage<'_> {
    fn assistant_lines(&self) -> Vec<Line<'_>> {
        let theme = self.theme;
        vec![
            Line::from(vec![
                Span::styled(" You ", theme.header_item),
                Span::raw("  "),
                Span::styled(&self.committed.query, theme.query_echo),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Aurora ", theme.header_active),
                Span::raw("  "),
                Span::styled("37k search results digested", theme.subtext),
            ]),
            Line::from(""),
            Line::from(" There are currently two main threads relevant to your question:"),
            Line::from(""),
            Line::from(vec![
                Span::styled("  • User management: ", theme.section_label),
                Span::raw("a subsidiary is trying to add users already assigned"),
            ]),
            Line::from("    to the main organization and wants them moved over so it can manage"),
            Line::from("    them directly; the suggested external-user workaround was declined."),
            Line::from(""),
            Line::from(vec![
                Span::styled("  • Redirects: ", theme.section_label),
                Span::raw("app download links bounce through geolocation redirects;"),
            ]),
            Line::from("    the customer wants visitors kept on the original URL. Investigation"),
            Line::from("    points at multiple redirect stages."),
            Line::from(""),
            Line::from(" Certificate pinning is also being phased out on the APIs after May 30th."),
            Line::from(""),
            Line::from(Span::styled(" Suggested follow-ups", theme.section_label)),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(" Tell me about the deployment strategy ", theme.header_item),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(" What's the current blocking issue? ", theme.header_item),
            ]),
        ]
    }

    fn message_lines(&self) -> Vec<Line<'_>> {
        let theme = self.theme;
        let mut lines = vec![Line::from(vec![
            Span::styled(" Results for ", theme.subtext),
            Span::styled(&self.committed.query, theme.query_echo),
        ])];

        let messages: [(&str, &str, &str, &str); 3] = [
            (
                "Geeta Joshi",
                "#project-beta",
                "May 23rd at 9:00 AM",
                "Excited to get started on Project Beta! As promised, here are some materials we'd like you all to read before tomorrow's kickoff.",
            ),
            (
                "Emily Nishino",
                "#project-beta",
                "May 22nd at 3:15 PM",
                "Just finished the Project Beta extension proposal. Key points: $4.3M opportunity, focusing on user lifecycle optimization.",
            ),
            (
                "Alex Thompson",
                "#engineering",
                "May 21st at 11:30 AM",
                "Project Beta deployment schedule is now finalized. Please review the timeline and let me know if you spot any conflicts.",
            ),
        ];

        for (author, channel, timestamp, body) in messages {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw(" "),
                Span::styled(author, theme.section_label),
                Span::raw("  "),
                Span::styled(channel, theme.footer_segment_key),
                Span::raw("  "),
                Span::styled(timestamp, theme.subtext),
            ]));
            lines.push(Line::from(vec![Span::raw(" "), Span::raw(body)]));
        }

        lines
    }
}
