//! Main shell component.
//!
//! Container component that owns the documentation layout: top bar, sidebar,
//! mobile overlay, and the content region. Receives the current route from
//! the parent Router component and passes it to child components via context.
//!
//! ## Layout
//!
//! - **Desktop (≥ 768px)**: sidebar pinned next to the content region; the
//!   panel state machine is ignored for layout
//! - **Mobile (< 768px)**: sidebar slides in as an overlay while the panel
//!   state machine is `Open`

use leptos::prelude::*;
use leptos_use::use_media_query;

use super::header::{PageHeader, TopBar};
use super::sidebar::Sidebar;
use crate::app::AppContext;
use crate::components::pages::{DocPage, PageView};
use crate::config;
use crate::core::PanelEvent;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

// ============================================================================
// Route Context
// ============================================================================

/// Context for accessing the current route from any component.
///
/// This allows child components (Sidebar, PageHeader) to access the current
/// route without prop drilling.
#[derive(Clone, Copy)]
pub struct RouteContext(pub Memo<AppRoute>);

// ============================================================================
// Shell Component
// ============================================================================

/// Documentation shell managing navigation and the content region.
///
/// This is a container component that:
/// - Receives the current route from the Router
/// - Provides route context to child components
/// - Applies the viewport rendering policy for the navigation panel
/// - Selects the content page for the active route
///
/// # Props
/// - `route`: The current application route (derived from URL)
#[component]
pub fn DocShell(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Provide route context for child components
    provide_context(RouteContext(route));

    let is_desktop = use_media_query(config::DESKTOP_MEDIA_QUERY);
    let panel_open = Signal::derive(move || ctx.panel.get().is_open());

    // Content page for the active route (soft fallback to the landing page)
    let page = Memo::new(move |_| DocPage::dispatch(route.get().path()));

    // Reset content scroll when navigating
    let content_ref = NodeRef::<leptos::html::Main>::new();
    Effect::new(move || {
        route.track();
        if let Some(el) = content_ref.get() {
            el.set_scroll_top(0);
        }
    });

    let sidebar_class = move || {
        if panel_open.get() {
            format!("{} {}", css::sidebarPane, css::sidebarPaneOpen)
        } else {
            css::sidebarPane.to_string()
        }
    };

    let on_overlay = move |_: leptos::ev::MouseEvent| {
        ctx.panel_event(PanelEvent::OverlayClicked);
    };

    view! {
        <div class=css::shell>
            <TopBar />

            <div class=css::body>
                <aside class=sidebar_class>
                    <Sidebar />
                </aside>

                // Dimmed backdrop behind the mobile panel. Wide viewports pin
                // the sidebar, so the overlay is a narrow-viewport concern.
                <Show when=move || panel_open.get() && !is_desktop.get()>
                    <div class=css::overlay on:click=on_overlay></div>
                </Show>

                <main class=css::content node_ref=content_ref>
                    <PageHeader />
                    <div class=css::page>
                        <PageView page=page />
                    </div>
                </main>
            </div>
        </div>
    }
}
