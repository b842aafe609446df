//! Collapsible page subsection.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/content/content.module.css");

/// Page subsection with a heading that expands and collapses.
///
/// Starts expanded. The body stays mounted; collapsing only hides it, so
/// widget state inside (active code tab, copied flag) survives a collapse.
#[component]
pub fn PageSection(title: &'static str, children: Children) -> impl IntoView {
    let (expanded, set_expanded) = signal(true);

    let chevron_class = move || {
        if expanded.get() {
            format!("{} {}", css::sectionChevron, css::sectionChevronOpen)
        } else {
            css::sectionChevron.to_string()
        }
    };

    let body_class = move || {
        if expanded.get() {
            css::sectionBody.to_string()
        } else {
            format!("{} {}", css::sectionBody, css::sectionCollapsed)
        }
    };

    view! {
        <section class=css::pageSection>
            <button
                class=css::sectionHeader
                on:click=move |_| set_expanded.update(|v| *v = !*v)
                aria-expanded=move || expanded.get()
            >
                <h2 class=css::sectionTitle>{title}</h2>
                <span class=chevron_class aria-hidden="true">
                    <Icon icon=ic::CHEVRON_DOWN />
                </span>
            </button>
            <div class=body_class>{children()}</div>
        </section>
    }
}
