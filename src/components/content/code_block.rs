//! Tabbed code snippet with copy-to-clipboard.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::utils::copy_text;

stylance::import_crate_style!(css, "src/components/content/content.module.css");

/// One language tab of a [`CodeBlock`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeTab {
    pub label: &'static str,
    pub code: &'static str,
}

impl CodeTab {
    pub const fn new(label: &'static str, code: &'static str) -> Self {
        Self { label, code }
    }
}

/// Tabbed code snippet with a copy button.
///
/// All state (active tab, copied flag) is local to the widget. Switching
/// tabs clears the copied flag, since the feedback no longer refers to what
/// is on the clipboard-visible tab.
#[component]
pub fn CodeBlock(
    /// Optional filename or label shown in the block header.
    #[prop(optional, into)]
    title: Option<&'static str>,
    tabs: Vec<CodeTab>,
) -> impl IntoView {
    let (active, set_active) = signal(0usize);
    let (copied, set_copied) = signal(false);

    let tabs = StoredValue::new(tabs);

    let active_code = move || {
        tabs.with_value(|tabs| tabs.get(active.get()).map(|t| t.code).unwrap_or_default())
    };

    let on_copy = move |_: leptos::ev::MouseEvent| {
        copy_text(active_code());
        set_copied.set(true);
    };

    view! {
        <div class=css::codeBlock>
            <div class=css::codeHeader>
                {title.map(|t| view! { <span class=css::codeTitle>{t}</span> })}

                <div class=css::codeTabs role="tablist">
                    <For
                        each={move || tabs.get_value().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(i, _)| *i
                        children=move |(i, tab)| {
                            let tab_class = move || {
                                if active.get() == i {
                                    format!("{} {}", css::codeTab, css::codeTabActive)
                                } else {
                                    css::codeTab.to_string()
                                }
                            };
                            view! {
                                <button
                                    class=tab_class
                                    role="tab"
                                    aria-selected=move || active.get() == i
                                    on:click=move |_| {
                                        set_active.set(i);
                                        set_copied.set(false);
                                    }
                                >
                                    {tab.label}
                                </button>
                            }
                        }
                    />
                </div>

                <button class=css::copyButton on:click=on_copy title="Copy to clipboard">
                    {move || if copied.get() {
                        view! { <Icon icon=ic::CLIPBOARD_CHECK /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::CLIPBOARD /> }.into_any()
                    }}
                    <span>{move || if copied.get() { "Copied" } else { "Copy" }}</span>
                </button>
            </div>

            <pre class=css::codePre><code>{active_code}</code></pre>
        </div>
    }
}
