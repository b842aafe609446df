//! Top bar and per-page header components.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::shell::RouteContext;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config;
use crate::core::PanelEvent;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Site-wide top bar with the navigation toggle and brand link.
#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_menu = move |_: leptos::ev::MouseEvent| {
        ctx.panel_event(PanelEvent::ToggleButtonPressed);
    };

    view! {
        <header class=css::topBar>
            <button
                class=css::menuButton
                on:click=on_menu
                title="Toggle navigation"
                aria-label="Toggle navigation"
            >
                {move || if ctx.panel.get().is_open() {
                    view! { <Icon icon=ic::CLOSE /> }.into_any()
                } else {
                    view! { <Icon icon=ic::MENU /> }.into_any()
                }}
            </button>

            <a href="#/docs" class=css::brand>
                <span class=css::brandMark>"B"</span>
                <span class=css::brandName>{config::APP_NAME}" Documentation"</span>
            </a>

            <a
                class=css::repoLink
                href="https://github.com/Beunec/brolostack"
                target="_blank"
                rel="noreferrer"
            >
                <Icon icon=ic::EXTERNAL_LINK />
                <span class=css::repoLabel>"GitHub"</span>
            </a>
        </header>
    }
}

/// Per-page header: breadcrumb trail plus the resolved title/description
/// for the active route.
#[component]
pub fn PageHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let meta = Memo::new(move |_| ctx.resolve(route_ctx.0.get().path()));

    // Owning section/entry titles for the breadcrumb; None on the landing
    // page and for unregistered routes.
    let crumb = Memo::new(move |_| {
        let route = route_ctx.0.get();
        ctx.registry.with_value(|registry| {
            registry
                .locate(route.path())
                .map(|(section, entry)| (section.title.clone(), entry.title.clone()))
        })
    });

    view! {
        <div class=css::pageHeader>
            <nav class=css::breadcrumb aria-label="Breadcrumb">
                <a href="#/docs" class=css::crumbLink>"Docs"</a>
                {move || crumb.get().map(|(section, entry)| view! {
                    <span class=css::crumbSep aria-hidden="true">
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </span>
                    <span class=css::crumbSection>{section}</span>
                    <span class=css::crumbSep aria-hidden="true">
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </span>
                    <span class=css::crumbCurrent>{entry}</span>
                })}
            </nav>

            <h1 class=css::pageTitle>{move || meta.get().title}</h1>
            <Show when=move || !meta.get().description.is_empty()>
                <p class=css::pageDescription>{move || meta.get().description}</p>
            </Show>
        </div>
    }
}
