//! Navigation tree data types for the documentation shell.
//!
//! The registry built from these types is immutable after startup; see
//! [`crate::core::Registry`] for validation and lookup operations.

use icondata::Icon;

// ============================================================================
// NavSection
// ============================================================================

/// A named group of related navigation entries.
///
/// Sections are independently expandable/collapsible in the sidebar. Entry
/// order is significant and defines menu display order.
#[derive(Clone, Debug)]
pub struct NavSection {
    /// Unique stable key, also used by the expansion state store.
    pub id: String,
    /// Display label.
    pub title: String,
    /// Opaque glyph handle rendered next to the section title.
    pub icon: Icon,
    /// Ordered entries shown while the section is expanded.
    pub entries: Vec<NavEntry>,
}

impl NavSection {
    /// Creates an empty section. Entries are attached with [`Self::entry`].
    pub fn new(id: impl Into<String>, title: impl Into<String>, icon: Icon) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon,
            entries: Vec::new(),
        }
    }

    /// Appends an entry with a one-line description.
    pub fn entry(
        mut self,
        path: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.entries.push(NavEntry {
            path: path.into(),
            title: title.into(),
            description: Some(description.into()),
        });
        self
    }

    /// Appends an entry without a description.
    #[cfg(test)]
    pub fn plain_entry(mut self, path: impl Into<String>, title: impl Into<String>) -> Self {
        self.entries.push(NavEntry {
            path: path.into(),
            title: title.into(),
            description: None,
        });
        self
    }
}

// Icon handles are opaque display data and carry no identity of their own;
// equality is defined by id, title, and entries.
impl PartialEq for NavSection {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title && self.entries == other.entries
    }
}

impl Eq for NavSection {}

// ============================================================================
// NavEntry
// ============================================================================

/// A single navigable item with a route, title, and optional description.
///
/// `path` must be unique across the whole registry; the invariant is checked
/// at registry construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Exact route string (e.g. `/docs/ai-framework`).
    pub path: String,
    /// Display label.
    pub title: String,
    /// Optional one-line summary, also searched by the sidebar filter.
    pub description: Option<String>,
}

// ============================================================================
// PageMeta
// ============================================================================

/// Title/description pair shown in the page header for the active route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    /// Metadata shown when no registry entry matches the active route.
    pub fn fallback() -> Self {
        Self {
            title: crate::config::DEFAULT_PAGE_TITLE.to_string(),
            description: crate::config::DEFAULT_PAGE_DESCRIPTION.to_string(),
        }
    }
}
