use super::keymap::{KeyConfig, KeyMap};
use crate::domain::models::Catalog;
use std::sync::Arc;

pub mod search;

// Re-exports
pub use search::{CommittedQuery, QueryInput, SearchState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Browse, // Panel closed, browsing the committed results (or the welcome screen)
    Search, // Panel open, every keystroke reclassifies and re-matches
    Help,   // Showing the help overlay
}

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<String>,

    // --- Catalog (the "Source of Truth") ---
    // None until the injected source has loaded; read-only afterwards.
    pub catalog: Option<Catalog>,

    // --- Search ---
    pub search: SearchState<'a>,
    pub committed: Option<CommittedQuery>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,

    // --- Animation ---
    pub frame_count: u64,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &KeyConfig) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(config)),
            ..Default::default()
        }
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Browse,
            last_error: None,
            catalog: None,
            search: SearchState::default(),
            committed: None,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            theme: crate::theme::Theme::default(),
            frame_count: 0,
        }
    }
}
