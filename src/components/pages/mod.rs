//! Content pages and their dispatch registry.
//!
//! Every registered route maps to a [`DocPage`] variant through a single
//! exhaustive match, so adding a page is a compile-time-checked registry
//! entry rather than an implicit lookup. The test suite asserts that the
//! variant set and the navigation registry stay referentially consistent.

mod ai;
mod cloud;
mod core_framework;
mod getting_started;
mod integrations;
mod overview;
mod realtime;
mod reference;
mod security;

use leptos::prelude::*;

use ai::{AiAgents, AiFramework, AiGovernance, TokenUsage};
use cloud::{BackupSync, CloudOverview, CloudProviders};
use core_framework::{CoreConcepts, DataSync, LocalStorage, StateManagement};
use getting_started::{Installation, Introduction, ProjectStructure, QuickStart};
use integrations::{NextjsIntegration, NodejsIntegration, ReactIntegration};
use overview::Overview;
use realtime::{MultiRoom, RealtimeSync, WebsocketFramework};
use reference::{ApiReference, Configuration, Migration, Troubleshooting};
use security::{Authentication, Encryption, PrivateMode, SecurityFramework};

// ============================================================================
// DocPage
// ============================================================================

/// Enum-keyed registry of content pages.
///
/// `Overview` doubles as the landing page and the soft-404 fallback for
/// unmatched routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocPage {
    Overview,
    Introduction,
    Installation,
    QuickStart,
    ProjectStructure,
    CoreConcepts,
    LocalStorage,
    StateManagement,
    DataSync,
    AiFramework,
    AiAgents,
    TokenUsage,
    AiGovernance,
    WebsocketFramework,
    RealtimeSync,
    MultiRoom,
    SecurityFramework,
    Encryption,
    Authentication,
    PrivateMode,
    CloudOverview,
    CloudProviders,
    BackupSync,
    ReactIntegration,
    NextjsIntegration,
    NodejsIntegration,
    ApiReference,
    Configuration,
    Troubleshooting,
    Migration,
}

impl DocPage {
    /// Every page variant, for dev-time consistency checks.
    pub const ALL: &'static [DocPage] = &[
        Self::Overview,
        Self::Introduction,
        Self::Installation,
        Self::QuickStart,
        Self::ProjectStructure,
        Self::CoreConcepts,
        Self::LocalStorage,
        Self::StateManagement,
        Self::DataSync,
        Self::AiFramework,
        Self::AiAgents,
        Self::TokenUsage,
        Self::AiGovernance,
        Self::WebsocketFramework,
        Self::RealtimeSync,
        Self::MultiRoom,
        Self::SecurityFramework,
        Self::Encryption,
        Self::Authentication,
        Self::PrivateMode,
        Self::CloudOverview,
        Self::CloudProviders,
        Self::BackupSync,
        Self::ReactIntegration,
        Self::NextjsIntegration,
        Self::NodejsIntegration,
        Self::ApiReference,
        Self::Configuration,
        Self::Troubleshooting,
        Self::Migration,
    ];

    /// Exact-match lookup. `None` means the path is unregistered; callers
    /// fall back to the landing page.
    pub fn from_path(path: &str) -> Option<Self> {
        let page = match path {
            "/docs" => Self::Overview,
            "/docs/introduction" => Self::Introduction,
            "/docs/installation" => Self::Installation,
            "/docs/quick-start" => Self::QuickStart,
            "/docs/project-structure" => Self::ProjectStructure,
            "/docs/core-concepts" => Self::CoreConcepts,
            "/docs/local-storage" => Self::LocalStorage,
            "/docs/state-management" => Self::StateManagement,
            "/docs/data-sync" => Self::DataSync,
            "/docs/ai-framework" => Self::AiFramework,
            "/docs/ai-agents" => Self::AiAgents,
            "/docs/token-usage" => Self::TokenUsage,
            "/docs/ai-governance" => Self::AiGovernance,
            "/docs/websocket-framework" => Self::WebsocketFramework,
            "/docs/realtime-sync" => Self::RealtimeSync,
            "/docs/multi-room" => Self::MultiRoom,
            "/docs/security-framework" => Self::SecurityFramework,
            "/docs/encryption" => Self::Encryption,
            "/docs/authentication" => Self::Authentication,
            "/docs/private-mode" => Self::PrivateMode,
            "/docs/cloud-overview" => Self::CloudOverview,
            "/docs/cloud-providers" => Self::CloudProviders,
            "/docs/backup-sync" => Self::BackupSync,
            "/docs/react-integration" => Self::ReactIntegration,
            "/docs/nextjs-integration" => Self::NextjsIntegration,
            "/docs/nodejs-integration" => Self::NodejsIntegration,
            "/docs/api-reference" => Self::ApiReference,
            "/docs/configuration" => Self::Configuration,
            "/docs/troubleshooting" => Self::Troubleshooting,
            "/docs/migration" => Self::Migration,
            _ => return None,
        };
        Some(page)
    }

    /// Route path this page is mounted at.
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/docs",
            Self::Introduction => "/docs/introduction",
            Self::Installation => "/docs/installation",
            Self::QuickStart => "/docs/quick-start",
            Self::ProjectStructure => "/docs/project-structure",
            Self::CoreConcepts => "/docs/core-concepts",
            Self::LocalStorage => "/docs/local-storage",
            Self::StateManagement => "/docs/state-management",
            Self::DataSync => "/docs/data-sync",
            Self::AiFramework => "/docs/ai-framework",
            Self::AiAgents => "/docs/ai-agents",
            Self::TokenUsage => "/docs/token-usage",
            Self::AiGovernance => "/docs/ai-governance",
            Self::WebsocketFramework => "/docs/websocket-framework",
            Self::RealtimeSync => "/docs/realtime-sync",
            Self::MultiRoom => "/docs/multi-room",
            Self::SecurityFramework => "/docs/security-framework",
            Self::Encryption => "/docs/encryption",
            Self::Authentication => "/docs/authentication",
            Self::PrivateMode => "/docs/private-mode",
            Self::CloudOverview => "/docs/cloud-overview",
            Self::CloudProviders => "/docs/cloud-providers",
            Self::BackupSync => "/docs/backup-sync",
            Self::ReactIntegration => "/docs/react-integration",
            Self::NextjsIntegration => "/docs/nextjs-integration",
            Self::NodejsIntegration => "/docs/nodejs-integration",
            Self::ApiReference => "/docs/api-reference",
            Self::Configuration => "/docs/configuration",
            Self::Troubleshooting => "/docs/troubleshooting",
            Self::Migration => "/docs/migration",
        }
    }

    /// Select the page for a route, falling back to the landing page for
    /// unmatched paths (soft 404).
    pub fn dispatch(path: &str) -> Self {
        Self::from_path(path).unwrap_or(Self::Overview)
    }
}

// ============================================================================
// PageView
// ============================================================================

/// Mounts the content page for the active route.
#[component]
pub fn PageView(page: Memo<DocPage>) -> impl IntoView {
    move || match page.get() {
        DocPage::Overview => view! { <Overview /> }.into_any(),
        DocPage::Introduction => view! { <Introduction /> }.into_any(),
        DocPage::Installation => view! { <Installation /> }.into_any(),
        DocPage::QuickStart => view! { <QuickStart /> }.into_any(),
        DocPage::ProjectStructure => view! { <ProjectStructure /> }.into_any(),
        DocPage::CoreConcepts => view! { <CoreConcepts /> }.into_any(),
        DocPage::LocalStorage => view! { <LocalStorage /> }.into_any(),
        DocPage::StateManagement => view! { <StateManagement /> }.into_any(),
        DocPage::DataSync => view! { <DataSync /> }.into_any(),
        DocPage::AiFramework => view! { <AiFramework /> }.into_any(),
        DocPage::AiAgents => view! { <AiAgents /> }.into_any(),
        DocPage::TokenUsage => view! { <TokenUsage /> }.into_any(),
        DocPage::AiGovernance => view! { <AiGovernance /> }.into_any(),
        DocPage::WebsocketFramework => view! { <WebsocketFramework /> }.into_any(),
        DocPage::RealtimeSync => view! { <RealtimeSync /> }.into_any(),
        DocPage::MultiRoom => view! { <MultiRoom /> }.into_any(),
        DocPage::SecurityFramework => view! { <SecurityFramework /> }.into_any(),
        DocPage::Encryption => view! { <Encryption /> }.into_any(),
        DocPage::Authentication => view! { <Authentication /> }.into_any(),
        DocPage::PrivateMode => view! { <PrivateMode /> }.into_any(),
        DocPage::CloudOverview => view! { <CloudOverview /> }.into_any(),
        DocPage::CloudProviders => view! { <CloudProviders /> }.into_any(),
        DocPage::BackupSync => view! { <BackupSync /> }.into_any(),
        DocPage::ReactIntegration => view! { <ReactIntegration /> }.into_any(),
        DocPage::NextjsIntegration => view! { <NextjsIntegration /> }.into_any(),
        DocPage::NodejsIntegration => view! { <NodejsIntegration /> }.into_any(),
        DocPage::ApiReference => view! { <ApiReference /> }.into_any(),
        DocPage::Configuration => view! { <Configuration /> }.into_any(),
        DocPage::Troubleshooting => view! { <Troubleshooting /> }.into_any(),
        DocPage::Migration => view! { <Migration /> }.into_any(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::core::Registry;
    use std::collections::HashSet;

    fn registry() -> Registry {
        Registry::new(config::navigation_sections()).expect("configured registry is valid")
    }

    #[test]
    fn test_every_registered_path_has_a_page() {
        let registry = registry();
        for entry in registry.entries() {
            assert!(
                DocPage::from_path(&entry.path).is_some(),
                "no page registered for {}",
                entry.path
            );
        }
    }

    #[test]
    fn test_every_page_path_is_registered_or_root() {
        let registry = registry();
        for page in DocPage::ALL {
            let path = page.path();
            assert!(
                path == config::DOCS_ROOT || registry.locate(path).is_some(),
                "page {page:?} mounted at unregistered path {path}"
            );
        }
    }

    #[test]
    fn test_resolver_exactness_for_all_entries() {
        let registry = registry();
        for entry in registry.entries() {
            assert_eq!(registry.resolve(&entry.path).title, entry.title);
        }
    }

    #[test]
    fn test_path_and_from_path_are_inverse() {
        let mut seen = HashSet::new();
        for page in DocPage::ALL {
            assert!(seen.insert(page.path()), "duplicate path for {page:?}");
            assert_eq!(DocPage::from_path(page.path()), Some(*page));
        }
    }

    #[test]
    fn test_dispatch_falls_back_to_landing() {
        assert_eq!(DocPage::from_path("/docs/does-not-exist"), None);
        assert_eq!(DocPage::dispatch("/docs/does-not-exist"), DocPage::Overview);
        assert_eq!(DocPage::dispatch(""), DocPage::Overview);
        assert_eq!(DocPage::dispatch("/docs"), DocPage::Overview);
    }
}
