//! Application configuration.
//!
//! Centralizes the configuration constants used throughout the application,
//! including the navigation registry definition.

use crate::components::icons as ic;
use crate::models::NavSection;

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name displayed in the top bar.
pub const APP_NAME: &str = "Brolostack";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

// =============================================================================
// Routing
// =============================================================================

/// Normalized path of the documentation landing page.
pub const DOCS_ROOT: &str = "/docs";

/// Page header title when no registry entry matches the active route.
pub const DEFAULT_PAGE_TITLE: &str = "Documentation";

/// Page header description when no registry entry matches the active route.
pub const DEFAULT_PAGE_DESCRIPTION: &str = "Brolostack Documentation";

// =============================================================================
// Shell Defaults
// =============================================================================

/// Section ids expanded when the shell first mounts.
///
/// Everything else starts collapsed; the set is passed into
/// [`crate::core::ExpansionState::seeded`] so tests can supply their own.
pub const DEFAULT_EXPANDED_SECTIONS: &[&str] = &["getting-started", "core-framework"];

/// Media query above which the sidebar is pinned instead of overlaid.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Navigation Registry
// =============================================================================

/// The full navigation tree, in display order.
///
/// Every path listed here must have a matching page variant in
/// [`crate::components::pages::DocPage`]; the test suite asserts the
/// correspondence in both directions.
pub fn navigation_sections() -> Vec<NavSection> {
    vec![
        NavSection::new("getting-started", "Getting Started", ic::HOME)
            .entry(
                "/docs/introduction",
                "Introduction",
                "What Brolostack is and why it exists",
            )
            .entry(
                "/docs/installation",
                "Installation",
                "Install the framework and CLI tooling",
            )
            .entry(
                "/docs/quick-start",
                "Quick Start",
                "Build your first zero-backend app in minutes",
            )
            .entry(
                "/docs/project-structure",
                "Project Structure",
                "How a Brolostack application is organized",
            ),
        NavSection::new("core-framework", "Core Framework", ic::GRID)
            .entry(
                "/docs/core-concepts",
                "Core Concepts",
                "Stores, apps, and the browser-local runtime",
            )
            .entry(
                "/docs/local-storage",
                "Local Storage Engine",
                "Durable browser storage without a server",
            )
            .entry(
                "/docs/state-management",
                "State Management",
                "Reactive stores and scoped updates",
            )
            .entry(
                "/docs/data-sync",
                "Data Sync",
                "Export, import, and device hand-off",
            ),
        NavSection::new("ai-framework", "AI Framework", ic::CPU)
            .entry(
                "/docs/ai-framework",
                "AI Framework",
                "Comprehensive AI capabilities",
            )
            .entry(
                "/docs/ai-agents",
                "Multi-Agent Systems",
                "Coordinate specialist agents in the browser",
            )
            .entry("/docs/token-usage", "Token Usage Control", "AI cost management")
            .entry(
                "/docs/ai-governance",
                "AI Governance",
                "Safety, reasoning frameworks, and compliance",
            ),
        NavSection::new("realtime", "Realtime", ic::NETWORK)
            .entry(
                "/docs/websocket-framework",
                "WebSocket Framework",
                "Bidirectional messaging with the ARGS protocol",
            )
            .entry(
                "/docs/realtime-sync",
                "Realtime Sync",
                "Live collaboration across clients",
            )
            .entry(
                "/docs/multi-room",
                "Multi-Room Manager",
                "Isolated channels for rooms and teams",
            ),
        NavSection::new("security", "Security", ic::LOCK)
            .entry(
                "/docs/security-framework",
                "Security Framework",
                "Brolostack Devil source-code protection",
            )
            .entry(
                "/docs/encryption",
                "Encryption",
                "Zero-knowledge encryption for local data",
            )
            .entry(
                "/docs/authentication",
                "Authentication",
                "Sessions, providers, and token storage",
            )
            .entry(
                "/docs/private-mode",
                "Private Mode",
                "Running fully offline and incognito",
            ),
        NavSection::new("cloud-integration", "Cloud Integration", ic::CLOUD)
            .entry(
                "/docs/cloud-overview",
                "Cloud Overview",
                "Optional cloud adapters for a local-first stack",
            )
            .entry(
                "/docs/cloud-providers",
                "Cloud Providers",
                "AWS, Azure, GCP, and twenty more adapters",
            )
            .entry(
                "/docs/backup-sync",
                "Backup & Sync",
                "Snapshot local stores to remote storage",
            ),
        NavSection::new("integrations", "Integrations", ic::PLUG)
            .entry(
                "/docs/react-integration",
                "React Integration",
                "Providers and hooks for React apps",
            )
            .entry(
                "/docs/nextjs-integration",
                "Next.js Integration",
                "SSR-safe setup for Next.js",
            )
            .entry(
                "/docs/nodejs-integration",
                "Node.js Integration",
                "Using Brolostack from server tooling",
            ),
        NavSection::new("reference", "Reference", ic::LIST)
            .entry(
                "/docs/api-reference",
                "API Reference",
                "Classes, interfaces, and methods",
            )
            .entry(
                "/docs/configuration",
                "Configuration",
                "Every option with defaults",
            )
            .entry(
                "/docs/troubleshooting",
                "Troubleshooting",
                "Common issues and fixes",
            )
            .entry(
                "/docs/migration",
                "Migration Guide",
                "Upgrading between major versions",
            ),
    ]
}
