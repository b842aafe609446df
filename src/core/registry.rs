//! Validated navigation registry with search filtering and route resolution.
//!
//! The registry is constructed once at startup and never mutated. All
//! operations are pure functions of `(registry, input)`.

use std::collections::HashSet;

use crate::models::{NavEntry, NavSection, PageMeta};

use super::error::RegistryError;

/// Read-only, ordered list of navigation sections.
///
/// Construction validates that every entry path is unique across the whole
/// registry and that required fields are non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    sections: Vec<NavSection>,
}

impl Registry {
    /// Build a registry, enforcing the construction-time invariants.
    pub fn new(sections: Vec<NavSection>) -> Result<Self, RegistryError> {
        let mut seen_paths = HashSet::new();
        let mut seen_ids = HashSet::new();

        for section in &sections {
            if section.id.is_empty() {
                return Err(RegistryError::EmptySectionField("id"));
            }
            if section.title.is_empty() {
                return Err(RegistryError::EmptySectionField("title"));
            }
            if !seen_ids.insert(section.id.clone()) {
                return Err(RegistryError::DuplicateSectionId(section.id.clone()));
            }

            for entry in &section.entries {
                if entry.path.is_empty() {
                    return Err(RegistryError::EmptyEntryField {
                        section: section.id.clone(),
                        field: "path",
                    });
                }
                if entry.title.is_empty() {
                    return Err(RegistryError::EmptyEntryField {
                        section: section.id.clone(),
                        field: "title",
                    });
                }
                if !seen_paths.insert(entry.path.clone()) {
                    return Err(RegistryError::DuplicatePath(entry.path.clone()));
                }
            }
        }

        Ok(Self { sections })
    }

    /// All sections in display order.
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// All entries across all sections, in registry order.
    #[cfg(test)]
    pub fn entries(&self) -> impl Iterator<Item = &NavEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// Sections matching a search query.
    ///
    /// An empty query is the identity transform. Otherwise a section is
    /// included wholesale (all entries) when its title, any entry title, or
    /// any entry description contains the query, case-insensitively. The
    /// query is matched literally; whitespace is not trimmed.
    pub fn filter(&self, query: &str) -> Vec<NavSection> {
        if query.is_empty() {
            return self.sections().to_vec();
        }

        let needle = query.to_lowercase();
        self.sections
            .iter()
            .filter(|section| section_matches(section, &needle))
            .cloned()
            .collect()
    }

    /// Find the section and entry owning an exact route path.
    ///
    /// Scans in registry order (section order, then entry order), first
    /// match wins. Under the uniqueness invariant at most one match exists.
    pub fn locate(&self, path: &str) -> Option<(&NavSection, &NavEntry)> {
        self.sections.iter().find_map(|section| {
            section
                .entries
                .iter()
                .find(|entry| entry.path == path)
                .map(|entry| (section, entry))
        })
    }

    /// Resolve a route path to page header metadata.
    ///
    /// Total: unknown paths fall back to the fixed default title and
    /// description rather than failing.
    pub fn resolve(&self, path: &str) -> PageMeta {
        self.locate(path)
            .map(|(_, entry)| PageMeta {
                title: entry.title.clone(),
                description: entry.description.clone().unwrap_or_default(),
            })
            .unwrap_or_else(PageMeta::fallback)
    }
}

fn section_matches(section: &NavSection, needle: &str) -> bool {
    if section.title.to_lowercase().contains(needle) {
        return true;
    }
    section.entries.iter().any(|entry| {
        entry.title.to_lowercase().contains(needle)
            || entry
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NavSection;
    use icondata as i;

    fn fixture() -> Registry {
        Registry::new(vec![
            NavSection::new("getting-started", "Getting Started", i::BsHouseFill)
                .entry("/docs/introduction", "Introduction", "What Brolostack is")
                .entry("/docs/quick-start", "Quick Start", "First app in minutes"),
            NavSection::new("ai-framework", "AI Framework", i::BsCpu)
                .entry(
                    "/docs/ai-framework",
                    "AI Framework",
                    "Comprehensive AI capabilities",
                )
                .entry("/docs/token-usage", "Token Usage Control", "AI cost management"),
            NavSection::new("cloud-integration", "Cloud Integration", i::BsCloud)
                .plain_entry("/docs/cloud-overview", "Cloud Overview"),
        ])
        .expect("fixture registry is valid")
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = Registry::new(vec![
            NavSection::new("a", "A", i::BsHouseFill).entry("/docs/x", "X", "first"),
            NavSection::new("b", "B", i::BsCpu).entry("/docs/x", "X again", "second"),
        ]);
        assert_eq!(
            result,
            Err(RegistryError::DuplicatePath("/docs/x".to_string()))
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        let result = Registry::new(vec![NavSection::new("", "A", i::BsHouseFill)]);
        assert_eq!(result, Err(RegistryError::EmptySectionField("id")));

        let result = Registry::new(vec![
            NavSection::new("a", "A", i::BsHouseFill).plain_entry("", "X"),
        ]);
        assert!(matches!(
            result,
            Err(RegistryError::EmptyEntryField { field: "path", .. })
        ));
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        let registry = fixture();
        assert_eq!(registry.filter(""), registry.sections().to_vec());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let registry = fixture();
        assert_eq!(registry.filter("CLOUD"), registry.filter("cloud"));
        assert_eq!(registry.filter("Cloud").len(), 1);
    }

    #[test]
    fn test_filter_never_invents_sections() {
        let registry = fixture();
        for query in ["ai", "cloud", "zzz-no-match", " "] {
            for section in registry.filter(query) {
                assert!(registry.sections().contains(&section));
            }
        }
    }

    #[test]
    fn test_filter_matches_by_entry_description() {
        let registry = fixture();
        let filtered = registry.filter("cost management");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "ai-framework");
        // Matched sections keep all their entries
        assert_eq!(filtered[0].entries.len(), 2);
    }

    #[test]
    fn test_filter_whitespace_query_is_literal() {
        let registry = fixture();
        // No title or description in the fixture contains a double space.
        assert!(registry.filter("  ").is_empty());
    }

    #[test]
    fn test_resolve_exact_match() {
        let registry = fixture();
        let meta = registry.resolve("/docs/ai-framework");
        assert_eq!(meta.title, "AI Framework");
        assert_eq!(meta.description, "Comprehensive AI capabilities");
    }

    #[test]
    fn test_resolve_unknown_path_falls_back() {
        let registry = fixture();
        let meta = registry.resolve("/docs/does-not-exist");
        assert_eq!(meta.title, "Documentation");
        assert_eq!(meta.description, "Brolostack Documentation");
    }

    #[test]
    fn test_resolve_is_total() {
        let registry = fixture();
        for path in ["", "/", "garbage", "/docs", "/docs/../../etc"] {
            let meta = registry.resolve(path);
            assert!(!meta.title.is_empty());
        }
    }

    #[test]
    fn test_resolve_missing_description_is_empty() {
        let registry = fixture();
        let meta = registry.resolve("/docs/cloud-overview");
        assert_eq!(meta.title, "Cloud Overview");
        assert_eq!(meta.description, "");
    }

    #[test]
    fn test_locate_returns_owning_section() {
        let registry = fixture();
        let (section, entry) = registry
            .locate("/docs/token-usage")
            .expect("entry is registered");
        assert_eq!(section.id, "ai-framework");
        assert_eq!(entry.title, "Token Usage Control");
        assert_eq!(registry.locate("/docs/nope"), None);
    }
}
