//! Core Framework section pages.

use leptos::prelude::*;

use crate::components::content::{
    Callout, CalloutKind, CodeBlock, CodeTab, FeatureTable, PageSection,
};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn CoreConcepts() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Three primitives make up the core framework: the app, stores, and the \
            storage engine underneath them."
        </p>

        <FeatureTable
            headers=vec!["Primitive", "Role", "Lifetime"]
            rows=vec![
                vec!["Brolostack app", "Configuration root and store registry", "Page session"],
                vec!["Store", "Reactive state with persisted mutations", "Durable"],
                vec!["Storage engine", "Versioned key-value persistence", "Durable"],
            ]
        />

        <PageSection title="The app instance">
            <p class=css::prose>
                "Every project creates exactly one app instance. It namespaces all \
                persisted data under its "<code>"appName"</code>", carries the schema \
                version used for migrations, and owns the store registry."
            </p>
            <CodeBlock
                tabs=vec![CodeTab::new("TypeScript", r#"const app = new Brolostack({
  appName: 'crm',
  version: '2.1.0',
  storage: { engine: 'auto' },   // localStorage, IndexedDB, or OPFS
});"#)]
            />
        </PageSection>

        <PageSection title="Stores">
            <p class=css::prose>
                "A store couples state with the mutations allowed on it. Mutations run \
                synchronously, and each one commits as a single storage transaction."
            </p>
        </PageSection>
    }
}

#[component]
pub fn LocalStorage() -> impl IntoView {
    view! {
        <p class=css::lead>
            "The storage engine gives stores durable persistence with a uniform API \
            over whatever the browser actually provides."
        </p>

        <PageSection title="Engine selection">
            <p class=css::prose>
                "With "<code>"engine: 'auto'"</code>" the framework probes for the best \
                available backend at startup, in order:"
            </p>
            <ul class=css::list>
                <li>"OPFS — origin-private file system, largest quota"</li>
                <li>"IndexedDB — structured storage, wide support"</li>
                <li>"localStorage — last resort, 5 MB ceiling"</li>
            </ul>
        </PageSection>

        <PageSection title="Direct access">
            <CodeBlock
                tabs=vec![CodeTab::new("TypeScript", r#"// Bypass stores for raw key-value access
await app.storage.set('draft', { body: '...' });
const draft = await app.storage.get('draft');
await app.storage.remove('draft');"#)]
            />
            <Callout kind=CalloutKind::Warning title="Quota errors surface as rejections">
                <p>
                    "Writes reject with a QuotaExceeded error instead of silently \
                    truncating. Handle it where you commit large payloads."
                </p>
            </Callout>
        </PageSection>
    }
}

#[component]
pub fn StateManagement() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Stores are reactive: subscribers re-run when — and only when — the slice \
            of state they read actually changes."
        </p>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"const cart = app.createStore('cart', {
  items: [] as CartItem[],
  get total() {
    return this.items.reduce((sum, i) => sum + i.price, 0);
  },
});

// Scoped subscription: fires only when `total` changes
cart.subscribe(s => s.total, total => {
  badge.textContent = String(total);
});"#)]
        />

        <PageSection title="Update semantics">
            <ul class=css::list>
                <li>"Mutations are synchronous and run to completion before the next event"</li>
                <li>"Subscribers are notified once per committed mutation, not per field write"</li>
                <li>"Derived getters are memoized against the state they read"</li>
            </ul>
        </PageSection>
    }
}

#[component]
pub fn DataSync() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Local-first does not mean locked-in: stores export and import portable \
            snapshots for backup and device hand-off."
        </p>

        <CodeBlock
            title="Export / import"
            tabs=vec![CodeTab::new("TypeScript", r#"// On the old device
const snapshot = await app.exportData();   // JSON, optionally encrypted

// On the new device
await app.importData(snapshot, { merge: 'replace' });"#)]
        />

        <PageSection title="Merge strategies">
            <FeatureTable
                headers=vec!["Strategy", "Behavior"]
                rows=vec![
                    vec!["replace", "Imported snapshot wins wholesale"],
                    vec!["keep-local", "Only keys absent locally are imported"],
                    vec!["newest", "Per-key timestamp comparison"],
                ]
            />
        </PageSection>
    }
}
