use super::models::{Catalog, CatalogItem, ItemKind, Suggestion};
use anyhow::Result;

/// Read-only source of searchable data. Injected so the matcher and the
/// shell are testable against any dataset.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Catalog>;
}

/// The fixed, hand-authored demo dataset: a handful of channels, people,
/// messages and files, plus the suggestion lists shown while the query is
/// empty.
pub struct DemoCatalog;

impl CatalogSource for DemoCatalog {
    fn load(&self) -> Result<Catalog> {
        Ok(Catalog {
            items: demo_items(),
            recommended: recommended_queries(),
            recent: recent_searches(),
        })
    }
}

fn item(kind: ItemKind, icon: &'static str, primary: &str, secondary: &str) -> CatalogItem {
    CatalogItem {
        kind,
        icon,
        primary: primary.to_string(),
        secondary: Some(secondary.to_string()),
    }
}

fn demo_items() -> Vec<CatalogItem> {
    vec![
        // Channels
        item(ItemKind::Channel, "#", "#engineering", "843 members"),
        item(ItemKind::Channel, "#", "#design-team", "156 members"),
        item(ItemKind::Channel, "#", "#product", "392 members"),
        item(ItemKind::Channel, "#", "#random", "1,024 members"),
        // People
        item(ItemKind::Person, "👤", "Sarah Parker", "Software Engineer • Online"),
        item(ItemKind::Person, "👤", "Alex Thompson", "Product Manager • Away"),
        item(ItemKind::Person, "👤", "Maria Garcia", "Design Lead • In a meeting"),
        // Recent messages
        item(
            ItemKind::Message,
            "💬",
            "Updated the design system documentation with new component guidelines",
            "in #design-team • 2h ago",
        ),
        item(
            ItemKind::Message,
            "💬",
            "Sprint planning meeting notes from yesterday",
            "in #engineering • 1d ago",
        ),
        item(
            ItemKind::Message,
            "💬",
            "Q4 roadmap discussion highlights",
            "in #product • 2d ago",
        ),
        // Files
        item(
            ItemKind::File,
            "📄",
            "Design System Guidelines.pdf",
            "Shared in #design-team • 3d ago",
        ),
        item(
            ItemKind::File,
            "📄",
            "Q4_Product_Roadmap.xlsx",
            "Shared in #product • 1w ago",
        ),
        item(
            ItemKind::File,
            "📄",
            "Engineering_Architecture_Diagram.png",
            "Shared in #engineering • 2w ago",
        ),
        item(
            ItemKind::File,
            "📄",
            "Team_Offsite_Photos.zip",
            "Shared in #random • 3w ago",
        ),
    ]
}

fn suggestion(icon: &'static str, primary: &str, secondary: &str) -> Suggestion {
    Suggestion {
        icon,
        primary: primary.to_string(),
        secondary: Some(secondary.to_string()),
    }
}

fn recommended_queries() -> Vec<Suggestion> {
    vec![
        suggestion(
            "✨",
            "Show me recent API discussions",
            "Find recent messages about APIs across channels",
        ),
        suggestion(
            "✨",
            "Summarize sprint planning decisions",
            "Get key points from recent planning meetings",
        ),
        suggestion(
            "✨",
            "Find code review feedback",
            "Collect recent code review comments",
        ),
    ]
}

fn recent_searches() -> Vec<Suggestion> {
    vec![
        suggestion("🕐", "\"deployment issues\"", "in #engineering • 2h ago"),
        suggestion("🕐", "from:sarah standup updates", "in #team-updates • 1d ago"),
        suggestion("🕐", "has:link documentation", "in #engineering-docs • 3d ago"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_loads_every_kind() {
        let catalog = DemoCatalog.load().unwrap();
        assert_eq!(catalog.items.len(), 14);
        for kind in [ItemKind::Channel, ItemKind::Person, ItemKind::Message, ItemKind::File] {
            assert!(catalog.items.iter().any(|i| i.kind == kind), "missing {kind}");
        }
        assert_eq!(catalog.recommended.len(), 3);
        assert_eq!(catalog.recent.len(), 3);
    }

    #[test]
    fn channel_names_carry_the_hash_prefix() {
        let catalog = DemoCatalog.load().unwrap();
        for item in catalog.items.iter().filter(|i| i.kind == ItemKind::Channel) {
            assert!(item.primary.starts_with('#'), "{}", item.primary);
        }
    }
}
