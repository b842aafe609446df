//! Reference section pages.

use leptos::prelude::*;

use crate::components::content::{
    Callout, CalloutKind, CodeBlock, CodeTab, FeatureTable, PageSection,
};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn ApiReference() -> impl IntoView {
    view! {
        <p class=css::lead>
            "The surface area is intentionally small: one entry class, a handful of \
            module factories, and the store interface."
        </p>

        <PageSection title="Brolostack">
            <FeatureTable
                headers=vec!["Member", "Signature", "Notes"]
                rows=vec![
                    vec!["constructor", "new Brolostack(config)", "Validates config, probes storage"],
                    vec!["createStore", "(name, def, opts?) => Store", "Names must be unique"],
                    vec!["storage", "StorageApi", "Raw key-value access"],
                    vec!["ai", "(config) => AiClient", "Lazy; first call initializes"],
                    vec!["websocket", "(config) => WsClient", "Lazy"],
                    vec!["auth", "(config) => AuthClient", "Lazy"],
                    vec!["cloud", "CloudApi", "No-op without an adapter"],
                    vec!["exportData", "(opts?) => Promise<Snapshot>", ""],
                    vec!["importData", "(snapshot, opts?) => Promise<void>", ""],
                ]
            />
        </PageSection>

        <PageSection title="Store">
            <FeatureTable
                headers=vec!["Member", "Signature"]
                rows=vec![
                    vec!["state", "Readonly<S>"],
                    vec!["subscribe", "(selector?, listener) => Unsubscribe"],
                    vec!["snapshot", "() => S"],
                    vec!["reset", "() => void"],
                ]
            />
        </PageSection>
    }
}

#[component]
pub fn Configuration() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Everything configurable, with its default. Omitted sections disable the \
            corresponding module entirely."
        </p>

        <FeatureTable
            headers=vec!["Option", "Default", "Description"]
            rows=vec![
                vec!["appName", "required", "Namespace for all persisted data"],
                vec!["version", "\"1.0.0\"", "Schema version used for migrations"],
                vec!["storage.engine", "\"auto\"", "auto | opfs | indexeddb | localstorage | memory"],
                vec!["storage.quotaWarning", "0.8", "Warn when usage crosses this fraction"],
                vec!["security.level", "\"standard\"", "standard | sealed | paranoid"],
                vec!["security.rotateKeys", "\"off\"", "Rotation interval, e.g. \"24h\""],
                vec!["ai.usage.maxTokensPerSession", "unlimited", "Hard session budget"],
                vec!["cloud.sync.interval", "\"manual\"", "Replication cadence"],
            ]
        />

        <PageSection title="Environment detection">
            <CodeBlock
                tabs=vec![CodeTab::new("TypeScript", r#"// Config may vary by detected environment
const app = new Brolostack({
  appName: 'crm',
  env: {
    development: { storage: { engine: 'memory' } },
    production:  { security: { level: 'sealed' } },
  },
});"#)]
            />
        </PageSection>
    }
}

#[component]
pub fn Troubleshooting() -> impl IntoView {
    view! {
        <p class=css::lead>
            "The failure modes people actually hit, roughly in order of frequency."
        </p>

        <PageSection title="Store data disappeared">
            <ul class=css::list>
                <li>"Renamed store or appName — persisted keys are namespaced by both"</li>
                <li>"Browser cleared site data under storage pressure; OPFS is the most durable engine"</li>
                <li>"Private mode configured, so nothing was ever persisted"</li>
            </ul>
        </PageSection>

        <PageSection title="QuotaExceeded on write">
            <p class=css::prose>
                "Check "<code>"app.storage.estimate()"</code>" and either prune old \
                keys or move large blobs to a cloud adapter. The write that rejected \
                was rolled back; the store state in memory remains committed."
            </p>
        </PageSection>

        <PageSection title="AI requests fail only in production">
            <ul class=css::list>
                <li>"Provider key missing from the production environment config"</li>
                <li>"Governance profile blocking a prompt category that dev mode flagged only"</li>
                <li>"Session token budget exhausted — budgets persist across reloads"</li>
            </ul>
        </PageSection>

        <Callout kind=CalloutKind::Note title="Still stuck?">
            <p>
                "Enable "<code>"debug: true"</code>" in the app config and every module \
                logs its decisions to the console."
            </p>
        </Callout>
    }
}

#[component]
pub fn Migration() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Persisted data is versioned by the app's "<code>"version"</code>" field; \
            register migrations for any breaking store shape change."
        </p>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"const app = new Brolostack({
  appName: 'crm',
  version: '3.0.0',
  migrations: {
    '2.x -> 3.0.0': state => ({
      ...state,
      contacts: state.contacts.map(addCountryCode),
    }),
  },
});"#)]
        />

        <PageSection title="Upgrading from 1.x">
            <ul class=css::list>
                <li>"createStore no longer accepts a bare object — wrap mutations in methods"</li>
                <li>"ai() replaces the standalone BrolostackAI export"</li>
                <li>"Cloud adapters moved from constructor flags to the cloud config block"</li>
            </ul>
            <p class=css::prose>
                "Migrations run once, transactionally, on the first load after an \
                upgrade. A failed migration leaves the previous data untouched."
            </p>
        </PageSection>
    }
}
