//! Typeahead filtering over the fixed catalog. Case-insensitive plain
//! substring search, never pattern matching, so a query full of regex
//! metacharacters is just more characters.

use super::models::{CatalogItem, FieldHighlight, HighlightSpan, ItemKind, MatchField, MatchResult};

/// Filter `items` against `query`, preserving catalog order, and compute at
/// most one highlight per surviving item. An empty query yields no results.
#[must_use]
pub fn match_catalog(query: &str, items: &[CatalogItem]) -> Vec<MatchResult> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item_matches(item, &query_lower))
        .map(|item| MatchResult {
            item: item.clone(),
            highlight: compute_highlight(item, &query_lower),
        })
        .collect()
}

/// Channels can be searched with or without the leading `#`: a `#`-prefixed
/// query is tested against the full displayed name, anything else against
/// the name with the prefix stripped. Other kinds match on either field.
fn item_matches(item: &CatalogItem, query_lower: &str) -> bool {
    if item.kind == ItemKind::Channel {
        if query_lower.starts_with('#') {
            find_ci(&item.primary, query_lower).is_some()
        } else {
            let stripped = item.primary.strip_prefix('#').unwrap_or(&item.primary);
            find_ci(stripped, query_lower).is_some()
        }
    } else {
        find_ci(&item.primary, query_lower).is_some()
            || item
                .secondary
                .as_deref()
                .is_some_and(|s| find_ci(s, query_lower).is_some())
    }
}

/// Exactly one highlight: first occurrence in the primary text wins,
/// otherwise the secondary text. Offsets always index the full displayed
/// field, including a channel's `#`, even when the query omitted it.
fn compute_highlight(item: &CatalogItem, query_lower: &str) -> Option<FieldHighlight> {
    if let Some(span) = find_ci(&item.primary, query_lower) {
        return Some(FieldHighlight {
            field: MatchField::Primary,
            span,
        });
    }
    item.secondary.as_deref().and_then(|s| {
        find_ci(s, query_lower).map(|span| FieldHighlight {
            field: MatchField::Secondary,
            span,
        })
    })
}

/// First case-insensitive occurrence of `needle_lower` (pre-lowercased) in
/// `haystack`, as byte offsets into `haystack` itself. Walks char boundaries
/// rather than searching a lowercased copy, so the span is always a valid
/// slice of the original text.
fn find_ci(haystack: &str, needle_lower: &str) -> Option<HighlightSpan> {
    if needle_lower.is_empty() {
        return None;
    }
    for (start, _) in haystack.char_indices() {
        if let Some(len) = match_len_at(haystack, start, needle_lower) {
            return Some(HighlightSpan {
                start,
                end: start + len,
            });
        }
    }
    None
}

/// Byte length of a match of `needle_lower` starting at `start`, if any.
/// Chars whose lowercase form expands to multiple chars never match a
/// single needle char; the catalog is plain text, so nothing is lost.
fn match_len_at(haystack: &str, start: usize, needle_lower: &str) -> Option<usize> {
    let mut len = 0;
    let mut haystack_chars = haystack[start..].chars();
    for needle_char in needle_lower.chars() {
        let c = haystack_chars.next()?;
        let mut lowered = c.to_lowercase();
        if lowered.next() != Some(needle_char) || lowered.next().is_some() {
            return None;
        }
        len += c.len_utf8();
    }
    Some(len)
}
