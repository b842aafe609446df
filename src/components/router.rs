//! Application router component.
//!
//! Handles URL-based routing with hash history for static-host
//! compatibility. Uses native hashchange events instead of leptos_router for
//! true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: Navigation state is derived from `#/docs/...`
//! - **The shell never re-renders on navigation**: DocShell is always mounted
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::layout::DocShell;
use crate::models::AppRoute;

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/docs` → Documentation landing page
/// - `#/docs/<page>` → Content page for a registered entry
/// - anything else → landing page fallback
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Convert to Memo for DocShell (which expects Memo<AppRoute>)
    let route_memo = Memo::new(move |_| route.get());

    view! {
        // The shell is always rendered (stable across route changes)
        <DocShell route=route_memo />
    }
}
