//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config;
use crate::core::{ExpansionState, PanelEvent, PanelState, Registry};
use crate::models::{NavSection, PageMeta};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// All shell state lives here as explicit value types inside signals:
/// - **Registry**: the immutable navigation tree, validated at construction
/// - **Expansion state**: per-section expand/collapse flags
/// - **Search query**: the sidebar filter string
/// - **Panel state**: the mobile navigation panel state machine
///
/// Every transition goes through a pure function on the wrapped value type,
/// so each one is independently testable without mounting a component.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Immutable navigation registry. `StoredValue` rather than a signal:
    /// nothing ever writes to it after startup.
    pub registry: StoredValue<Registry>,

    /// Per-section expand/collapse state, seeded from configuration.
    pub expansion: RwSignal<ExpansionState>,

    /// Sidebar search query; empty string means no filtering.
    pub search: RwSignal<String>,

    /// Mobile navigation panel state machine.
    pub panel: RwSignal<PanelState>,
}

impl AppContext {
    /// Creates the application context, validating the navigation registry.
    ///
    /// # Panics
    ///
    /// Panics when the configured registry violates a construction-time
    /// invariant (duplicate paths, empty required fields). Refusing to start
    /// beats silently resolving to the wrong entry.
    pub fn new() -> Self {
        let registry = Registry::new(config::navigation_sections())
            .expect("navigation registry failed validation");

        Self {
            registry: StoredValue::new(registry),
            expansion: RwSignal::new(ExpansionState::seeded(config::DEFAULT_EXPANDED_SECTIONS)),
            search: RwSignal::new(String::new()),
            panel: RwSignal::new(PanelState::default()),
        }
    }

    /// Sections visible for the current search query, in registry order.
    pub fn visible_sections(&self) -> Vec<NavSection> {
        let query = self.search.get();
        self.registry.with_value(|registry| registry.filter(&query))
    }

    /// Page header metadata for a route path.
    pub fn resolve(&self, path: &str) -> PageMeta {
        self.registry.with_value(|registry| registry.resolve(path))
    }

    /// Whether a search query is currently active.
    pub fn searching(&self) -> bool {
        self.search.with(|query| !query.is_empty())
    }

    /// Whether a section is expanded in the sidebar.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.with(|state| state.is_expanded(id))
    }

    /// Flip a section's expand/collapse flag.
    pub fn toggle_section(&self, id: &str) {
        self.expansion.update(|state| state.toggle(id));
    }

    /// Feed a user event into the panel state machine.
    pub fn panel_event(&self, event: PanelEvent) {
        self.panel.update(|state| *state = state.apply(event));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0b1120;
                    color: #e2e8f0;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #f87171; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #94a3b8; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #1e293b;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #64748b;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #f87171;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #3b82f6;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
