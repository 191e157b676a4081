use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Channel,
    Person,
    Message,
    File,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemKind::Channel => "channel",
            ItemKind::Person => "person",
            ItemKind::Message => "message",
            ItemKind::File => "file",
        };
        write!(f, "{label}")
    }
}

/// One searchable entry in the fixed demo catalog. Never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub kind: ItemKind,
    pub icon: &'static str,
    pub primary: String,
    pub secondary: Option<String>,
}

/// Half-open byte range into the text of the field it annotates.
/// Offsets always land on char boundaries of that exact text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// Which displayed field of a [`CatalogItem`] a highlight annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHighlight {
    pub field: MatchField,
    pub span: HighlightSpan,
}

/// A surviving catalog item for one render pass. Recomputed on every
/// keystroke; relative order follows catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub item: CatalogItem,
    pub highlight: Option<FieldHighlight>,
}

/// A fixed "Recommended for you" / "Recent searches" entry. Static shell
/// data, not computed by the matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub icon: &'static str,
    pub primary: String,
    pub secondary: Option<String>,
}

/// Everything the injected data source provides. Read-only after startup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub items: Vec<CatalogItem>,
    pub recommended: Vec<Suggestion>,
    pub recent: Vec<Suggestion>,
}
