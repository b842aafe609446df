//! Getting Started section pages.

use leptos::prelude::*;

use crate::components::content::{
    Callout, CalloutKind, CodeBlock, CodeTab, FeatureTable, PageSection,
};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn Introduction() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Brolostack (\"Browser Local Stack\") inverts the traditional full-stack \
            architecture: instead of shipping a thin client backed by heavy server \
            infrastructure, it ships the entire stack to the browser."
        </p>
        <p class=css::prose>
            "Each user's device becomes their own private backend. Data is stored in a \
            durable local storage engine, business logic runs in-page, and optional \
            cloud adapters only come into play when an application genuinely needs \
            cross-device sync or shared state."
        </p>

        <PageSection title="Why zero-backend">
            <FeatureTable
                headers=vec!["Concern", "Traditional stack", "Brolostack"]
                rows=vec![
                    vec!["Hosting cost", "Scales with users", "Static files only"],
                    vec!["Data privacy", "Server-side custody", "Stays on the device"],
                    vec!["Offline support", "Bolted on", "The default"],
                    vec!["Scaling", "Capacity planning", "Every user brings their own"],
                ]
            />
        </PageSection>

        <PageSection title="When not to use it">
            <p class=css::prose>
                "Brolostack is deliberately local-first. If your application is mostly \
                shared mutable state between many users — a marketplace, a social \
                network — a conventional backend remains the better fit. The cloud \
                integration layer narrows this gap but does not eliminate it."
            </p>
            <Callout kind=CalloutKind::Warning title="Browser storage limits apply">
                <p>
                    "Local storage engines inherit the browser's quota. Budget roughly \
                    50–200 MB per origin depending on the platform."
                </p>
            </Callout>
        </PageSection>
    }
}

#[component]
pub fn Installation() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Brolostack ships as a single npm package with zero runtime dependencies."
        </p>

        <CodeBlock
            tabs=vec![
                CodeTab::new("npm", "npm install brolostack"),
                CodeTab::new("yarn", "yarn add brolostack"),
                CodeTab::new("pnpm", "pnpm add brolostack"),
            ]
        />

        <PageSection title="Requirements">
            <ul class=css::list>
                <li>"Node.js 18 or newer for the build toolchain"</li>
                <li>"Any evergreen browser; Safari 15+ for full storage support"</li>
                <li>"TypeScript 5 recommended (typings are bundled)"</li>
            </ul>
        </PageSection>

        <PageSection title="Verify the install">
            <CodeBlock
                title="verify.ts"
                tabs=vec![CodeTab::new("TypeScript", r#"import { Brolostack } from 'brolostack';

const app = new Brolostack({ appName: 'hello' });
console.log(app.version); // prints the installed version"#)]
            />
        </PageSection>
    }
}

#[component]
pub fn QuickStart() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Build a working todo application — storage, state, and UI — without \
            touching a server."
        </p>

        <PageSection title="1. Create the app">
            <CodeBlock
                title="app.ts"
                tabs=vec![CodeTab::new("TypeScript", r#"import { Brolostack } from 'brolostack';

const app = new Brolostack({
  appName: 'todo-app',
  version: '1.0.0',
});"#)]
            />
        </PageSection>

        <PageSection title="2. Define a store">
            <CodeBlock
                title="store.ts"
                tabs=vec![CodeTab::new("TypeScript", r#"const todos = app.createStore('todos', {
  items: [] as Todo[],

  add(text: string) {
    this.items.push({ id: crypto.randomUUID(), text, done: false });
  },

  toggle(id: string) {
    const todo = this.items.find(t => t.id === id);
    if (todo) todo.done = !todo.done;
  },
});"#)]
            />
            <p class=css::prose>
                "Stores persist automatically: every committed mutation is written \
                through to the local storage engine, so a reload restores exactly \
                where the user left off."
            </p>
        </PageSection>

        <PageSection title="3. Render">
            <CodeBlock
                tabs=vec![
                    CodeTab::new("React", r#"function TodoList() {
  const { items, add } = useBrolostackStore(todos);
  return <ul>{items.map(t => <li key={t.id}>{t.text}</li>)}</ul>;
}"#),
                    CodeTab::new("Vanilla", r#"todos.subscribe(state => {
  list.innerHTML = state.items
    .map(t => `<li>${t.text}</li>`)
    .join('');
});"#),
                ]
            />
        </PageSection>
    }
}

#[component]
pub fn ProjectStructure() -> impl IntoView {
    view! {
        <p class=css::lead>
            "A Brolostack project is an ordinary front-end project; the framework adds \
            conventions, not scaffolding requirements."
        </p>

        <CodeBlock
            title="Recommended layout"
            tabs=vec![CodeTab::new("text", r#"my-app/
├── src/
│   ├── app.ts          # Brolostack instance and configuration
│   ├── stores/         # one module per store
│   ├── ai/             # agent and provider setup (optional)
│   └── ui/             # components, any framework
├── public/
└── package.json"#)]
        />

        <PageSection title="Conventions">
            <ul class=css::list>
                <li>"One store per domain concept; avoid a single god-store"</li>
                <li>"Store names are stable identifiers — renaming one orphans its persisted data"</li>
                <li>"Keep provider API keys in environment config, never in a store"</li>
            </ul>
        </PageSection>
    }
}
