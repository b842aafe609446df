//! Hash-based routing for static-host-compatible navigation.

use crate::utils::dom;

/// Active route for the documentation site.
///
/// URL format: `#/docs/<page>` (e.g. `#/docs/ai-framework`). The shell never
/// owns this value; it is derived from the browser location and re-read on
/// every `hashchange` event. All navigation is anchor-driven (`to_hash`
/// supplies the `href`), so the browser itself fires `hashchange`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppRoute {
    path: String,
}

impl AppRoute {
    /// Parse a URL hash into a normalized route.
    ///
    /// Empty hashes (`""`, `"#"`, `"#/"`) normalize to the documentation
    /// root. Trailing slashes are stripped so `#/docs/install/` and
    /// `#/docs/install` resolve identically.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_end_matches('/');

        if path.is_empty() {
            return Self::root();
        }

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self { path }
    }

    /// The documentation landing route.
    pub fn root() -> Self {
        Self {
            path: crate::config::DOCS_ROOT.to_string(),
        }
    }

    /// Route for a registry entry path.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Exact route string matched against the navigation registry.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Convert the route back to a URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path)
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::root());
        assert_eq!(AppRoute::from_hash("#"), AppRoute::root());
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::root());
        assert_eq!(
            AppRoute::from_hash("#/docs/ai-framework").path(),
            "/docs/ai-framework"
        );
        // Trailing slash is not significant
        assert_eq!(
            AppRoute::from_hash("#/docs/quick-start/").path(),
            "/docs/quick-start"
        );
        // A missing leading slash is repaired
        assert_eq!(
            AppRoute::from_hash("#docs/installation").path(),
            "/docs/installation"
        );
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::root().to_hash(), "#/docs");
        assert_eq!(
            AppRoute::from_path("/docs/ai-framework").to_hash(),
            "#/docs/ai-framework"
        );
    }

    #[test]
    fn test_route_round_trip() {
        let route = AppRoute::from_hash("#/docs/token-usage");
        assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
    }
}
