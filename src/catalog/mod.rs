//! The curated technology catalog.
//!
//! The catalog is a static, load-time-immutable table of [`TechEntry`]
//! rows. Nothing in the crate mutates it, so it is shared freely between
//! threads without locking.

mod entries;

use std::collections::{BTreeMap, HashSet};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;

use crate::icons::{IconRef, VectorIconProvider};
use crate::validate::is_valid_icon_id;

// ============================================================================
// Category
// ============================================================================

/// Fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Language,
    Framework,
    Library,
    Platform,
    Cloud,
    Database,
    #[cfg_attr(feature = "cli", value(name = "cicd"))]
    CICD,
    BuildTool,
    Testing,
    MessageQueue,
    Monitoring,
    Editor,
    Design,
    Other,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Self::Language,
        Self::Framework,
        Self::Library,
        Self::Platform,
        Self::Cloud,
        Self::Database,
        Self::CICD,
        Self::BuildTool,
        Self::Testing,
        Self::MessageQueue,
        Self::Monitoring,
        Self::Editor,
        Self::Design,
        Self::Other,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Language => "Language",
            Self::Framework => "Framework",
            Self::Library => "Library",
            Self::Platform => "Platform",
            Self::Cloud => "Cloud",
            Self::Database => "Database",
            Self::CICD => "CI/CD",
            Self::BuildTool => "Build Tool",
            Self::Testing => "Testing",
            Self::MessageQueue => "Message Queue",
            Self::Monitoring => "Monitoring",
            Self::Editor => "Editor",
            Self::Design => "Design",
            Self::Other => "Other",
        }
    }
}

// ============================================================================
// TechEntry
// ============================================================================

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechEntry {
    /// Stable identifier, as used in request URLs.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    pub category: Category,

    /// `prefix:name` reference into an icon family.
    pub icon_ref: &'static str,

    /// Alternate reference used on dark backgrounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_ref_dark: Option<&'static str>,

    /// Canonical project URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,

    /// Extra search terms.
    #[serde(skip_serializing_if = "no_aliases")]
    pub aliases: &'static [&'static str],
}

impl TechEntry {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        category: Category,
        icon_ref: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            category,
            icon_ref,
            icon_ref_dark: None,
            link: None,
            aliases: &[],
        }
    }

    pub const fn dark(self, icon_ref_dark: &'static str) -> Self {
        Self {
            icon_ref_dark: Some(icon_ref_dark),
            ..self
        }
    }

    pub const fn link(self, link: &'static str) -> Self {
        Self {
            link: Some(link),
            ..self
        }
    }

    pub const fn aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    /// Returns the canonical link, or a Simple Icons search for the name.
    pub fn link_or_search(&self) -> String {
        match self.link {
            Some(link) => link.to_string(),
            None => search_url(self.name),
        }
    }

    /// Returns true if `keyword` (already lower-cased) occurs in the name,
    /// the id or any alias.
    fn matches(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(keyword)
            || self.id.contains(keyword)
            || self.aliases.iter().any(|alias| alias.contains(keyword))
    }
}

fn no_aliases(aliases: &&'static [&'static str]) -> bool {
    aliases.is_empty()
}

/// Characters left unescaped in a URI component: ASCII alphanumerics and
/// `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the fallback link used for entries without a canonical URL.
///
/// The name is encoded as a URI component, so spaces become `%20`.
pub fn search_url(name: &str) -> String {
    format!(
        "https://simpleicons.org/?q={}",
        utf8_percent_encode(name, URI_COMPONENT)
    )
}

// ============================================================================
// Queries
// ============================================================================

/// Returns every catalog entry.
pub fn all() -> &'static [TechEntry] {
    entries::ENTRIES
}

/// Looks up an entry by id, ignoring ASCII case.
pub fn get(id: &str) -> Option<&'static TechEntry> {
    all().iter().find(|entry| entry.id.eq_ignore_ascii_case(id))
}

/// Returns the entries whose category is one of `categories`.
pub fn filter_by_categories(categories: &[Category]) -> Vec<&'static TechEntry> {
    all()
        .iter()
        .filter(|entry| categories.contains(&entry.category))
        .collect()
}

/// Case-insensitive substring search over names, ids and aliases.
///
/// An empty keyword matches everything.
pub fn search(keyword: &str) -> Vec<&'static TechEntry> {
    let keyword = keyword.trim().to_lowercase();
    all().iter().filter(|entry| entry.matches(&keyword)).collect()
}

/// Groups all entries by category, preserving catalog order within a group.
pub fn group_by_category() -> BTreeMap<Category, Vec<&'static TechEntry>> {
    let mut groups: BTreeMap<Category, Vec<&'static TechEntry>> = BTreeMap::new();
    for entry in all() {
        groups.entry(entry.category).or_default().push(entry);
    }
    groups
}

// ============================================================================
// Tabs
// ============================================================================

/// Category groupings the selection UI presents as tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Tab {
    Languages,
    Frameworks,
    Platforms,
    Databases,
    Devops,
    Design,
    Queues,
    Other,
    All,
}

impl Tab {
    pub const ALL: [Tab; 9] = [
        Self::Languages,
        Self::Frameworks,
        Self::Platforms,
        Self::Databases,
        Self::Devops,
        Self::Design,
        Self::Queues,
        Self::Other,
        Self::All,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Frameworks => "Frameworks & Libraries",
            Self::Platforms => "Platforms & Cloud",
            Self::Databases => "Databases",
            Self::Devops => "DevOps & Build Tools",
            Self::Design => "Design & Editors",
            Self::Queues => "Message Queues",
            Self::Other => "Other",
            Self::All => "All",
        }
    }

    /// Short prefix used to namespace per-tab state in URLs.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Languages => "lang",
            Self::Frameworks => "framework",
            Self::Platforms => "platform",
            Self::Databases => "db",
            Self::Devops => "devops",
            Self::Design => "design",
            Self::Queues => "queue",
            Self::Other => "other",
            Self::All => "all",
        }
    }

    pub fn categories(self) -> &'static [Category] {
        use Category::*;
        match self {
            Self::Languages => &[Language],
            Self::Frameworks => &[Framework, Library],
            Self::Platforms => &[Platform, Cloud],
            Self::Databases => &[Database],
            Self::Devops => &[CICD, BuildTool, Testing, Monitoring],
            Self::Design => &[Design, Editor],
            Self::Queues => &[MessageQueue],
            Self::Other => &[Other],
            Self::All => &Category::ALL,
        }
    }

    pub fn entries(self) -> Vec<&'static TechEntry> {
        filter_by_categories(self.categories())
    }

    /// Finds a tab by its title or prefix.
    pub fn find(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.title() == name || tab.prefix() == name)
    }
}

// ============================================================================
// Audit
// ============================================================================

/// A problem found by [`check`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogIssue {
    #[error("duplicate id '{0}'")]
    DuplicateId(&'static str),

    #[error("id '{0}' is not a valid request identifier")]
    InvalidId(&'static str),

    #[error("'{id}': {source}")]
    BadReference {
        id: &'static str,
        source: crate::icons::IconRefError,
    },

    #[error("'{id}': reference '{reference}' has no icon (key '{key}')")]
    Unresolved {
        id: &'static str,
        reference: &'static str,
        key: String,
    },
}

/// Audits a catalog against a provider, offline.
///
/// Every id must be unique and usable in a request, and every icon
/// reference (primary and dark) must parse and resolve in `provider`.
pub fn check_entries(
    entries: &'static [TechEntry],
    provider: &dyn VectorIconProvider,
) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for entry in entries {
        if !seen.insert(entry.id.to_ascii_lowercase()) {
            issues.push(CatalogIssue::DuplicateId(entry.id));
        }
        if !is_valid_icon_id(entry.id) {
            issues.push(CatalogIssue::InvalidId(entry.id));
        }

        for reference in std::iter::once(entry.icon_ref).chain(entry.icon_ref_dark) {
            match IconRef::parse(reference) {
                Ok(parsed) => {
                    let key = parsed.key();
                    if provider.lookup(&key).is_none() {
                        issues.push(CatalogIssue::Unresolved {
                            id: entry.id,
                            reference,
                            key,
                        });
                    }
                }
                Err(source) => issues.push(CatalogIssue::BadReference {
                    id: entry.id,
                    source,
                }),
            }
        }
    }

    issues
}

/// Audits the bundled catalog against `provider`.
pub fn check(provider: &dyn VectorIconProvider) -> Vec<CatalogIssue> {
    check_entries(all(), provider)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{BundledIcons, JsonIconProvider};

    #[test]
    fn bundled_catalog_passes_audit() {
        let issues = check(&BundledIcons);
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn audit_reports_problems() {
        static BAD: &[TechEntry] = &[
            TechEntry::new("dup", "One", Category::Other, "simple-icons:react"),
            TechEntry::new("DUP", "Two", Category::Other, "simple-icons:react"),
            TechEntry::new("bad id", "Three", Category::Other, "react"),
            TechEntry::new("ghost", "Four", Category::Other, "logos:ghost"),
        ];
        let issues = check_entries(BAD, &BundledIcons);

        assert!(issues.contains(&CatalogIssue::DuplicateId("DUP")));
        assert!(issues.contains(&CatalogIssue::InvalidId("bad id")));
        assert!(issues.iter().any(|i| matches!(
            i,
            CatalogIssue::BadReference { id: "bad id", .. }
        )));
        assert!(issues.iter().any(|i| matches!(
            i,
            CatalogIssue::Unresolved { id: "ghost", key, .. } if key == "siGhost"
        )));
    }

    #[test]
    fn audit_against_empty_provider_flags_everything() {
        let empty = JsonIconProvider::default();
        let issues = check(&empty);
        let refs = all().iter().map(|e| 1 + e.icon_ref_dark.is_some() as usize).sum::<usize>();
        assert_eq!(issues.len(), refs);
    }

    #[test]
    fn get_is_case_insensitive() {
        assert_eq!(get("react").unwrap().name, "React");
        assert_eq!(get("React").unwrap().id, "react");
        assert!(get("not-a-tech").is_none());
    }

    #[test]
    fn link_falls_back_to_search() {
        assert_eq!(get("react").unwrap().link_or_search(), "https://react.dev");
        assert_eq!(
            get("c").unwrap().link_or_search(),
            "https://simpleicons.org/?q=C"
        );
        assert_eq!(search_url("C++"), "https://simpleicons.org/?q=C%2B%2B");
        assert_eq!(search_url("Ruby on Rails"), "https://simpleicons.org/?q=Ruby%20on%20Rails");
        assert_eq!(search_url("C#"), "https://simpleicons.org/?q=C%23");
        assert_eq!(search_url("Node.js (LTS)"), "https://simpleicons.org/?q=Node.js%20(LTS)");
    }

    #[test]
    fn search_matches_name_id_and_alias() {
        let ids = |v: Vec<&TechEntry>| v.iter().map(|e| e.id).collect::<Vec<_>>();
        assert!(ids(search("script")).contains(&"ts"));
        assert!(ids(search("k8s")).contains(&"kubernetes"));
        assert!(ids(search("POSTGRES")).contains(&"postgres"));
        assert_eq!(search("").len(), all().len());
        assert!(search("no-such-technology").is_empty());
    }

    #[test]
    fn filter_and_group() {
        let dbs = filter_by_categories(&[Category::Database]);
        assert!(!dbs.is_empty());
        assert!(dbs.iter().all(|e| e.category == Category::Database));

        let groups = group_by_category();
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, all().len());
        assert_eq!(groups[&Category::Database].len(), dbs.len());
    }

    #[test]
    fn every_category_is_populated() {
        let groups = group_by_category();
        for category in Category::ALL {
            assert!(groups.contains_key(&category), "{}", category.label());
        }
    }

    #[test]
    fn tabs_cover_catalog() {
        assert_eq!(Tab::All.entries().len(), all().len());
        let partitioned: usize = Tab::ALL
            .iter()
            .filter(|t| **t != Tab::All)
            .map(|t| t.entries().len())
            .sum();
        assert_eq!(partitioned, all().len());
        assert_eq!(Tab::find("db"), Some(Tab::Databases));
        assert_eq!(Tab::find("Design & Editors"), Some(Tab::Design));
        assert_eq!(Tab::find("nope"), None);
    }

    #[test]
    fn entry_serializes_camel_case() {
        let json = serde_json::to_value(get("rust").unwrap()).unwrap();
        assert_eq!(json["iconRef"], "simple-icons:rust");
        assert_eq!(json["iconRefDark"], "simple-icons:rust-white");
        assert_eq!(json["category"], "language");
        assert!(serde_json::to_value(get("c").unwrap()).unwrap().get("link").is_none());
    }
}
