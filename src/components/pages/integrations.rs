//! Integrations section pages.

use leptos::prelude::*;

use crate::components::content::{Callout, CalloutKind, CodeBlock, CodeTab, PageSection};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn ReactIntegration() -> impl IntoView {
    view! {
        <p class=css::lead>
            "The React package wraps the app instance in a provider and exposes stores \
            through hooks with automatic subscription scoping."
        </p>

        <CodeBlock
            title="main.tsx"
            tabs=vec![CodeTab::new("TSX", r#"import { BrolostackProvider, useBrolostackStore } from 'brolostack/react';

root.render(
  <BrolostackProvider app={app}>
    <App />
  </BrolostackProvider>
);

function Counter() {
  const { count, increment } = useBrolostackStore('counter');
  return <button onClick={increment}>{count}</button>;
}"#)]
        />

        <PageSection title="Hooks">
            <ul class=css::list>
                <li><code>"useBrolostackStore(name)"</code>" — state plus bound mutations"</li>
                <li><code>"useBrolostackAI()"</code>" — the configured AI client"</li>
                <li><code>"useBrolostackAuth()"</code>" — session state and login/logout"</li>
            </ul>
        </PageSection>
    }
}

#[component]
pub fn NextjsIntegration() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Brolostack is browser-only by nature; the Next.js package makes that safe \
            under server rendering instead of fighting it."
        </p>

        <CodeBlock
            tabs=vec![CodeTab::new("TSX", r#"'use client';

import { BrolostackNextProvider } from 'brolostack/next';

// Renders children only after hydration; SSR emits a stable placeholder
export default function Providers({ children }) {
  return (
    <BrolostackNextProvider app={app} fallback={<Skeleton />}>
      {children}
    </BrolostackNextProvider>
  );
}"#)]
        />

        <Callout kind=CalloutKind::Warning title="No server access to stores">
            <p>
                "Server components cannot read store state — it only exists in the \
                visitor's browser. Fetch shared data through a cloud adapter instead."
            </p>
        </Callout>
    }
}

#[component]
pub fn NodejsIntegration() -> impl IntoView {
    view! {
        <p class=css::lead>
            "The Node package exists for tooling — seeding fixtures, validating \
            snapshots, and running store logic in tests — not for serving users."
        </p>

        <CodeBlock
            title="seed.test.ts"
            tabs=vec![CodeTab::new("TypeScript", r#"import { createTestApp } from 'brolostack/node';

test('cart totals', () => {
  const app = createTestApp();          // in-memory engine
  const cart = app.createStore('cart', cartDefinition);

  cart.add({ sku: 'A1', price: 40 });
  expect(cart.state.total).toBe(40);
});"#)]
        />

        <PageSection title="What carries over">
            <ul class=css::list>
                <li>"Stores, mutations, and derived getters run unchanged"</li>
                <li>"The storage engine is swapped for an in-memory implementation"</li>
                <li>"AI and WebSocket modules require explicit mocks"</li>
            </ul>
        </PageSection>
    }
}
