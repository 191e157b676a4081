use crate::domain::models::MatchResult;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Single-line query input. Wraps `TextArea` so the containing state can
/// still derive Debug and Clone; Enter never reaches the widget, so the
/// buffer holds exactly one line.
#[derive(Default)]
pub struct QueryInput<'a>(pub TextArea<'a>);

impl QueryInput<'_> {
    /// The raw query as typed.
    #[must_use]
    pub fn text(&self) -> &str {
        self.0.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.0 = TextArea::default();
    }
}

impl Clone for QueryInput<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for QueryInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryInput")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for QueryInput<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for QueryInput<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for QueryInput<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &QueryInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// The live search panel state: raw input, the derived conversational flag,
/// and the results of the last keystroke. Recomputed synchronously on every
/// input event; cleared when the panel closes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState<'a> {
    pub input: QueryInput<'a>,
    pub is_ai_mode: bool,
    pub results: Vec<MatchResult>,
}

impl SearchState<'_> {
    #[must_use]
    pub fn query(&self) -> &str {
        self.input.text()
    }
}

/// Query and mode captured on submit. Survives closing the panel so the
/// results page stays up while the user keeps browsing.
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedQuery {
    pub query: String,
    pub is_ai_mode: bool,
}
