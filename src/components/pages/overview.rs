//! Documentation landing page.
//!
//! Also serves as the soft fallback for unmatched routes.

use leptos::prelude::*;

use crate::components::content::{Callout, CalloutKind, CodeBlock, CodeTab};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Brolostack is a zero-cost full-stack framework that runs entirely in the \
            browser. Your application's storage, state, business logic, and even its AI \
            workloads live on the user's device — no servers to provision, no database \
            to operate, no per-user infrastructure bill."
        </p>

        <Callout kind=CalloutKind::Note title="New to Brolostack?">
            <p>
                "Start with the Introduction, then follow the Quick Start to ship a \
                working app in under ten minutes."
            </p>
        </Callout>

        <div class=css::cardGrid>
            <a href="#/docs/introduction" class=css::card>
                <span class=css::cardTitle>"Introduction"</span>
                <span class=css::cardDesc>
                    "What Brolostack is, the problems it solves, and when to reach for it."
                </span>
            </a>
            <a href="#/docs/quick-start" class=css::card>
                <span class=css::cardTitle>"Quick Start"</span>
                <span class=css::cardDesc>
                    "Create a project, define a store, and render live data in minutes."
                </span>
            </a>
            <a href="#/docs/ai-framework" class=css::card>
                <span class=css::cardTitle>"AI Framework"</span>
                <span class=css::cardDesc>
                    "Multi-provider AI with agents, governance, and cost controls built in."
                </span>
            </a>
            <a href="#/docs/security-framework" class=css::card>
                <span class=css::cardTitle>"Security"</span>
                <span class=css::cardDesc>
                    "Source-code protection and zero-knowledge encryption for local data."
                </span>
            </a>
            <a href="#/docs/cloud-overview" class=css::card>
                <span class=css::cardTitle>"Cloud Integration"</span>
                <span class=css::cardDesc>
                    "Optional adapters for AWS, Azure, GCP, and more when you need them."
                </span>
            </a>
            <a href="#/docs/api-reference" class=css::card>
                <span class=css::cardTitle>"API Reference"</span>
                <span class=css::cardDesc>
                    "Every class, interface, and configuration option in one place."
                </span>
            </a>
        </div>

        <CodeBlock
            title="Install"
            tabs=vec![
                CodeTab::new("npm", "npm install brolostack"),
                CodeTab::new("yarn", "yarn add brolostack"),
                CodeTab::new("pnpm", "pnpm add brolostack"),
            ]
        />
    }
}
