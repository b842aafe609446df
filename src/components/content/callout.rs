//! Note/warning asides for content pages.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/content/content.module.css");

/// Visual tone of a [`Callout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalloutKind {
    Note,
    Warning,
}

#[component]
pub fn Callout(kind: CalloutKind, title: &'static str, children: Children) -> impl IntoView {
    let kind_class = match kind {
        CalloutKind::Note => css::calloutNote,
        CalloutKind::Warning => css::calloutWarning,
    };

    view! {
        <aside class=format!("{} {}", css::callout, kind_class)>
            <p class=css::calloutTitle>{title}</p>
            <div class=css::calloutBody>{children()}</div>
        </aside>
    }
}
