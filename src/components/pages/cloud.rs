//! Cloud Integration section pages.

use leptos::prelude::*;

use crate::components::content::{
    Callout, CalloutKind, CodeBlock, CodeTab, FeatureTable, PageSection,
};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn CloudOverview() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Cloud integration is strictly additive: the application keeps working \
            fully offline, and adapters replicate selected stores outward when \
            connectivity and configuration allow."
        </p>

        <PageSection title="Design principles">
            <ul class=css::list>
                <li>"Local is the source of truth; the cloud is a replica"</li>
                <li>"Adapters are opt-in per store, never global"</li>
                <li>"A failed replication never blocks a local mutation"</li>
            </ul>
        </PageSection>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"const app = new Brolostack({
  appName: 'field-notes',
  cloud: {
    adapter: 'aws',
    region: 'eu-west-1',
    sync: { stores: ['notes'], interval: '5m' },
  },
});"#)]
        />

        <Callout kind=CalloutKind::Note title="Zero-cost stays zero-cost">
            <p>
                "Without a configured adapter no network calls are made at all; the \
                cloud module is tree-shaken out of the bundle."
            </p>
        </Callout>
    }
}

#[component]
pub fn CloudProviders() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Adapters cover the major clouds and common backend stacks, all behind one \
            replication interface."
        </p>

        <FeatureTable
            headers=vec!["Adapter", "Targets", "Auth"]
            rows=vec![
                vec!["aws", "S3, DynamoDB", "Cognito / IAM"],
                vec!["azure", "Blob Storage, Cosmos DB", "Entra ID"],
                vec!["gcp", "Cloud Storage, Firestore", "Firebase Auth"],
                vec!["mongodb", "Atlas", "API key"],
                vec!["redis", "Redis Cloud", "ACL token"],
                vec!["postgres", "Any Postgres 13+", "Connection string"],
            ]
        />

        <PageSection title="Writing a custom adapter">
            <CodeBlock
                tabs=vec![CodeTab::new("TypeScript", r#"class MyAdapter implements CloudAdapter {
  async push(batch: ChangeBatch): Promise<void> { /* ... */ }
  async pull(since: Cursor): Promise<ChangeBatch> { /* ... */ }
}

app.cloud.register('mine', new MyAdapter());"#)]
            />
        </PageSection>
    }
}

#[component]
pub fn BackupSync() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Backup & Sync schedules snapshot uploads of selected stores, with \
            client-side encryption applied before anything leaves the device."
        </p>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"app.cloud.backup({
  stores: ['notes', 'contacts'],
  schedule: 'daily',
  encrypt: true,                  // passphrase-derived key
  retain: 30,                     // keep 30 snapshots
});

// Restore on a new device
await app.cloud.restore({ snapshot: 'latest' });"#)]
        />

        <PageSection title="Restore semantics">
            <p class=css::prose>
                "Restores run through the same import pipeline as manual snapshots, so \
                merge strategies from the Data Sync page apply unchanged."
            </p>
        </PageSection>
    }
}
