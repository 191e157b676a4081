use crate::app::state::SearchState;
use crate::domain::highlight::segment_text;
use crate::domain::models::{Catalog, FieldHighlight, HighlightSpan, MatchField, Suggestion};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

/// The dropdown under the open search bar: suggestion lists while the query
/// is empty, the query echo plus live matches otherwise.
pub struct TypeaheadPanel<'a> {
    pub search: &'a SearchState<'a>,
    pub catalog: Option<&'a Catalog>,
    pub theme: &'a Theme,
}

impl Widget for TypeaheadPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let Some(catalog) = self.catalog else {
            let loading = Line::from(Span::styled(" Loading catalog…", self.theme.dimmed));
            buf.set_line(inner.x, inner.y, &loading, inner.width);
            return;
        };

        if self.search.query().trim().is_empty() {
            self.render_suggestions(catalog, inner, buf);
        } else {
            self.render_results(inner, buf);
        }
    }
}

impl TypeaheadPanel<'_> {
    fn render_suggestions(&self, catalog: &Catalog, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        let max_y = area.y + area.height;

        for (label, entries) in [
            ("Recommended for you", &catalog.recommended),
            ("Recent searches", &catalog.recent),
        ] {
            if y >= max_y {
                break;
            }
            let header = Line::from(Span::styled(format!(" {label} "), self.theme.section_label));
            buf.set_line(area.x, y, &header, area.width);
            y += 1;

            for entry in entries {
                if y >= max_y {
                    break;
                }
                y = self.render_suggestion(entry, area, y, max_y, buf);
            }

            // Spacing between sections
            y += 1;
        }
    }

    fn render_suggestion(
        &self,
        entry: &Suggestion,
        area: Rect,
        mut y: u16,
        max_y: u16,
        buf: &mut Buffer,
    ) -> u16 {
        let title = Line::from(vec![
            Span::raw("  "),
            Span::styled(entry.icon, self.theme.list_item),
            Span::raw(" "),
            Span::styled(&entry.primary, self.theme.list_item),
        ]);
        buf.set_line(area.x, y, &title, area.width);
        y += 1;

        if let Some(secondary) = &entry.secondary {
            if y < max_y {
                let sub = Line::from(vec![
                    Span::raw("     "),
                    Span::styled(secondary, self.theme.subtext),
                ]);
                buf.set_line(area.x, y, &sub, area.width);
                y += 1;
            }
        }
        y
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        let max_y = area.y + area.height;

        // Query echo, styled after the active mode.
        let echo_icon = if self.search.is_ai_mode { "✦" } else { "⌕" };
        let echo = Line::from(vec![
            Span::raw(" "),
            Span::styled(echo_icon, self.theme.query_echo),
            Span::raw(" "),
            Span::styled(self.search.query(), self.theme.query_echo),
        ]);
        buf.set_line(area.x, y, &echo, area.width);
        y += 1;

        if y < max_y {
            let separator = "─".repeat(area.width as usize);
            buf.set_string(area.x, y, separator, self.theme.border);
            y += 1;
        }

        if self.search.results.is_empty() {
            if y < max_y {
                let empty = Line::from(Span::styled("  No matches.", self.theme.dimmed));
                buf.set_line(area.x, y, &empty, area.width);
            }
            return;
        }

        for result in &self.search.results {
            if y >= max_y {
                break;
            }

            let (primary_span, secondary_span) = split_highlight(result.highlight.as_ref());

            let title = Line::from(
                std::iter::once(Span::raw("  "))
                    .chain(std::iter::once(Span::styled(
                        result.item.icon,
                        self.theme.list_item,
                    )))
                    .chain(std::iter::once(Span::raw(" ")))
                    .chain(field_spans(
                        &result.item.primary,
                        primary_span,
                        self.theme.list_item,
                        self.theme.highlight,
                    ))
                    .collect::<Vec<_>>(),
            );
            buf.set_line(area.x, y, &title, area.width);
            y += 1;

            if let Some(secondary) = &result.item.secondary {
                if y < max_y {
                    let sub = Line::from(
                        std::iter::once(Span::raw("     "))
                            .chain(field_spans(
                                secondary,
                                secondary_span,
                                self.theme.subtext,
                                self.theme.highlight,
                            ))
                            .collect::<Vec<_>>(),
                    );
                    buf.set_line(area.x, y, &sub, area.width);
                    y += 1;
                }
            }
        }
    }
}

fn split_highlight(
    highlight: Option<&FieldHighlight>,
) -> (Option<&HighlightSpan>, Option<&HighlightSpan>) {
    match highlight {
        Some(h) if h.field == MatchField::Primary => (Some(&h.span), None),
        Some(h) => (None, Some(&h.span)),
        None => (None, None),
    }
}

/// Styled spans for one displayed field, with the matched range (if any)
/// rendered in the highlight style.
fn field_spans<'a>(
    text: &'a str,
    span: Option<&HighlightSpan>,
    base: Style,
    highlight: Style,
) -> impl Iterator<Item = Span<'a>> {
    let spans = match span {
        Some(s) => std::slice::from_ref(s),
        None => &[],
    };
    segment_text(text, spans)
        .into_iter()
        .map(move |seg| Span::styled(seg.text, if seg.highlighted { highlight } else { base }))
}
