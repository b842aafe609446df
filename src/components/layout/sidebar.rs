//! Sidebar navigation component.
//!
//! Search box plus the filtered navigation tree. Sections expand and
//! collapse independently; entries navigate and auto-dismiss the mobile
//! panel.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use super::shell::RouteContext;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config;
use crate::core::PanelEvent;
use crate::models::{AppRoute, NavEntry, NavSection};

stylance::import_crate_style!(css, "src/components/layout/sidebar.module.css");

/// Sidebar navigation: search filter plus the section tree.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let sections = Memo::new(move |_| ctx.visible_sections());

    view! {
        <nav class=css::sidebar aria-label="Documentation">
            <SearchBox />

            <div class=css::sections>
                <For
                    each=move || sections.get()
                    key=|section| section.id.clone()
                    children=move |section| {
                        view! { <SidebarSection section=section /> }
                    }
                />
                <Show when=move || sections.with(|s| s.is_empty())>
                    <p class=css::noResults>"No sections match your search."</p>
                </Show>
            </div>

            <div class=css::version>"v"{config::APP_VERSION}</div>
        </nav>
    }
}

/// Search input filtering the navigation tree on every keystroke.
#[component]
fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let handle_input = move |ev: leptos::ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        ctx.search.set(input.value());
    };

    view! {
        <div class=css::search>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                type="search"
                class=css::searchInput
                placeholder="Search docs..."
                autocomplete="off"
                spellcheck="false"
                prop:value=ctx.search
                on:input=handle_input
            />
        </div>
    }
}

#[component]
fn SidebarSection(section: NavSection) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let NavSection {
        id,
        title,
        icon,
        entries,
    } = section;

    // While a query is active, matched sections render expanded; the stored
    // expansion state is untouched, so clearing the query restores the
    // user's expand/collapse choices.
    let id_for_expanded = id.clone();
    let expanded = Signal::derive(move || ctx.searching() || ctx.is_expanded(&id_for_expanded));

    let on_toggle = move |_: leptos::ev::MouseEvent| {
        ctx.toggle_section(&id);
    };

    let chevron_class = move || {
        if expanded.get() {
            format!("{} {}", css::chevron, css::chevronOpen)
        } else {
            css::chevron.to_string()
        }
    };

    let entries = StoredValue::new(entries);

    view! {
        <section class=css::section>
            <button
                class=css::sectionHeader
                on:click=on_toggle
                aria-expanded=move || expanded.get()
            >
                <span class=css::sectionIcon aria-hidden="true"><Icon icon=icon /></span>
                <span class=css::sectionTitle>{title}</span>
                <span class=chevron_class aria-hidden="true">
                    <Icon icon=ic::CHEVRON_DOWN />
                </span>
            </button>

            <Show when=move || expanded.get()>
                <ul class=css::entries>
                    <For
                        each=move || entries.get_value()
                        key=|entry| entry.path.clone()
                        children=move |entry| {
                            view! { <SidebarEntry entry=entry /> }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn SidebarEntry(entry: NavEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let href = AppRoute::from_path(entry.path.clone()).to_hash();
    let path_for_active = entry.path.clone();
    let is_active = Signal::derive(move || route_ctx.0.get().path() == path_for_active);

    // The panel auto-dismisses after navigating, on any viewport; wide
    // viewports simply ignore the Closed state for layout.
    let on_activate = move |_: leptos::ev::MouseEvent| {
        ctx.panel_event(PanelEvent::EntryActivated);
    };

    let link_class = move || {
        if is_active.get() {
            format!("{} {}", css::entryLink, css::entryActive)
        } else {
            css::entryLink.to_string()
        }
    };

    view! {
        <li class=css::entry>
            <a
                href=href
                class=link_class
                on:click=on_activate
                aria-current=move || is_active.get().then_some("page")
            >
                <span class=css::entryTitle>{entry.title.clone()}</span>
                {entry.description.clone().map(|d| view! {
                    <span class=css::entryDesc>{d}</span>
                })}
            </a>
        </li>
    }
}
