use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState, CommittedQuery},
};
use crate::domain::{classifier, matcher};
use crate::theme::Theme;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- Search Panel ---
        Action::OpenSearch => {
            state.mode = AppMode::Search;
        }
        Action::CloseSearch => {
            // Closing discards the live query but keeps the committed page
            // so the user can come back to it.
            state.mode = AppMode::Browse;
            state.search.input.clear();
            state.search.results.clear();
        }
        Action::SearchInput(key) => {
            if state.mode == AppMode::Search {
                state.search.input.input(key);
                refresh_query(state);
            }
        }
        Action::ToggleMode => {
            if state.mode == AppMode::Search {
                state.search.is_ai_mode = !state.search.is_ai_mode;
                state.theme = Theme::for_mode(state.search.is_ai_mode);
            }
        }
        Action::CommitQuery => {
            let query = state.search.query().trim().to_string();
            if !query.is_empty() {
                state.committed = Some(CommittedQuery {
                    query,
                    is_ai_mode: state.search.is_ai_mode,
                });
                // The input keeps its text; reopening the panel resumes it.
                state.mode = AppMode::Browse;
            }
        }
        Action::ClearCommitted => {
            state.committed = None;
        }

        // --- UI ---
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Browse
            } else {
                AppMode::Help
            };
        }
        Action::DismissError => {
            state.last_error = None;
        }
        Action::ReloadCatalog => {
            return Some(Command::LoadCatalog);
        }
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Async Results ---
        Action::CatalogLoaded(catalog) => {
            state.catalog = Some(*catalog);
            refresh_query(state);
        }
        Action::ErrorOccurred(message) => {
            state.last_error = Some(message);
        }

        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Resize(..) => {}
    }
    None
}

/// Re-derive everything that depends on the current query text: the
/// conversational flag (which drags the theme with it) and the match list.
/// Runs synchronously on every keystroke; the catalog is tens of items, so
/// this is comfortably sub-millisecond.
fn refresh_query(state: &mut AppState) {
    let query = state.search.query().to_string();
    if query.trim().is_empty() {
        state.search.results.clear();
        return;
    }

    // Live mode detection: a manual toggle holds only until the next
    // keystroke reclassifies the text.
    state.search.is_ai_mode = classifier::is_conversational(&query);
    state.theme = Theme::for_mode(state.search.is_ai_mode);

    if let Some(catalog) = &state.catalog {
        state.search.results = matcher::match_catalog(&query, &catalog.items);
    }
}
