use crate::domain::models::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Search Panel ---
    OpenSearch,           // Focus the search bar (/)
    CloseSearch,          // Esc: close the panel, clear the live query
    SearchInput(crossterm::event::KeyEvent), // Keystroke into the query input
    ToggleMode,           // Manually flip search/assistant mode (Tab)
    CommitQuery,          // Enter: capture query + mode for the results page
    ClearCommitted,       // Back from the results page to the welcome screen

    // --- UI ---
    ToggleHelp,
    DismissError,
    ReloadCatalog,

    // --- Async Results ---
    // Dispatched by the command runner back to the main loop
    CatalogLoaded(Box<Catalog>),
    ErrorOccurred(String),
}
