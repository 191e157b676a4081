use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::helpers::{centered_rect, draw_drop_shadow};
use crate::components::results_page::ResultsPage;
use crate::components::search_bar::SearchBar;
use crate::components::typeahead::TypeaheadPanel;
use crate::components::welcome::Welcome;
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub struct AppLayout {
    pub main: Vec<Rect>,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area)
        .to_vec();

    AppLayout { main }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = app_state.theme.clone();

    // Keep the input's chrome in sync with the current mode before any
    // widget borrows the state.
    let placeholder = if app_state.search.is_ai_mode {
        "Ask for anything"
    } else {
        "Search everywhere"
    };
    app_state.search.input.set_placeholder_text(placeholder);
    app_state
        .search
        .input
        .set_placeholder_style(theme.input_placeholder);
    app_state.search.input.set_style(theme.input_text);
    app_state.search.input.set_cursor_line_style(theme.input_text);

    let layout = get_layout(f.area());

    // --- Header ---
    if layout.main[0].width > 0 && layout.main[0].height > 0 {
        let subtitle = " prototype gallery · smart search toggle ";
        let padding = (f.area().width as usize).saturating_sub(subtitle.len() + 12);
        let header = Paragraph::new(Line::from(vec![
            Span::styled(" OMNISWITCH ", theme.header_logo),
            Span::styled(subtitle, theme.header),
            Span::styled(" ".repeat(padding), theme.header),
        ]))
        .style(theme.header);
        f.render_widget(header, layout.main[0]);
    }

    // --- Search Bar ---
    if layout.main[1].width > 0 && layout.main[1].height > 0 {
        let search_bar = SearchBar {
            state: app_state,
            theme: &theme,
        };
        f.render_widget(search_bar, layout.main[1]);
    }

    // --- Body ---
    let body = layout.main[2];
    if body.width > 0 && body.height > 0 {
        if let Some(committed) = &app_state.committed {
            let page = ResultsPage {
                committed,
                theme: &theme,
            };
            f.render_widget(page, body);
        } else {
            f.render_widget(Welcome { theme: &theme }, body);
        }
    }

    // --- Typeahead Dropdown ---
    if app_state.mode == AppMode::Search && body.width > 4 && body.height > 0 {
        let bar = layout.main[1];
        let panel = Rect {
            x: bar.x + 2,
            y: body.y,
            width: bar.width.saturating_sub(4),
            height: body.height.min(dropdown_height(app_state)),
        };
        if panel.width > 0 && panel.height > 0 {
            let frame_area = f.area();
            draw_drop_shadow(f.buffer_mut(), panel, frame_area);
            f.render_widget(Clear, panel);
            let dropdown = TypeaheadPanel {
                search: &app_state.search,
                catalog: app_state.catalog.as_ref(),
                theme: &theme,
            };
            f.render_widget(dropdown, panel);
        }
    }

    // --- Footer ---
    if layout.main[3].width > 0 && layout.main[3].height > 0 {
        let footer = Footer {
            state: app_state,
            theme: &theme,
        };
        f.render_widget(footer, layout.main[3]);
    }

    // --- Modals ---
    if app_state.mode == AppMode::Help {
        draw_help(f, &theme);
    }

    if let Some(err) = &app_state.last_error {
        draw_error(f, &theme, err);
    }
}

/// Rows the open dropdown wants: two per entry plus chrome, clamped later
/// to the body height.
fn dropdown_height(app_state: &AppState) -> u16 {
    let entries = if app_state.search.query().trim().is_empty() {
        app_state
            .catalog
            .as_ref()
            .map_or(1, |c| c.recommended.len() + c.recent.len() + 2)
    } else {
        app_state.search.results.len().max(1) + 1
    };
    (entries as u16).saturating_mul(2) + 3
}

fn draw_help(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let help_area = centered_rect(60, 70, area);
    if help_area.width == 0 || help_area.height == 0 {
        return;
    }
    f.render_widget(Clear, help_area);

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(" HELP - KEYBINDINGS ", theme.header_active),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focus);

    use ratatui::widgets::{Cell, Row, Table};

    let key_style = theme.footer_segment_key;
    let desc_style = theme.list_item;
    let category_style = theme.header_item;

    let rows = vec![
        Row::new(vec![
            Cell::from(Span::styled("Browsing", category_style)),
            Cell::from(""),
        ]),
        Row::new(vec![Cell::from(Span::styled(" / or Enter", key_style)), Cell::from(Span::styled("Open the search panel", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" c", key_style)), Cell::from(Span::styled("Clear the committed results page", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" r", key_style)), Cell::from(Span::styled("Reload the catalog", desc_style))]),
        Row::new(vec![Cell::from(""), Cell::from("")]),
        Row::new(vec![
            Cell::from(Span::styled("Search panel", category_style)),
            Cell::from(""),
        ]),
        Row::new(vec![Cell::from(Span::styled(" (typing)", key_style)), Cell::from(Span::styled("Live typeahead + mode detection", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" Tab", key_style)), Cell::from(Span::styled("Toggle search / assistant mode", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" Enter", key_style)), Cell::from(Span::styled("Submit the query", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" Esc", key_style)), Cell::from(Span::styled("Close and clear the panel", desc_style))]),
        Row::new(vec![Cell::from(""), Cell::from("")]),
        Row::new(vec![
            Cell::from(Span::styled("General", category_style)),
            Cell::from(""),
        ]),
        Row::new(vec![Cell::from(Span::styled(" ?", key_style)), Cell::from(Span::styled("Show this help", desc_style))]),
        Row::new(vec![Cell::from(Span::styled(" q", key_style)), Cell::from(Span::styled("Quit", desc_style))]),
    ];

    let table = Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)]).block(block);

    f.render_widget(table, help_area);
}

fn draw_error(f: &mut Frame, theme: &Theme, message: &str) {
    let area = centered_rect(60, 20, f.area());
    if area.width == 0 || area.height == 0 {
        return;
    }
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(" ERROR ", theme.status_error),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(theme.status_error);

    let text_lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme.footer_segment_val)),
        Line::from(""),
        Line::from(vec![
            Span::raw(" Press "),
            Span::styled("Esc", theme.footer_segment_key),
            Span::raw(" to acknowledge "),
        ]),
    ];

    let paragraph = Paragraph::new(text_lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(block);

    f.render_widget(paragraph, area);
}
