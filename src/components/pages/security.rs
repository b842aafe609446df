//! Security section pages.

use leptos::prelude::*;

use crate::components::content::{
    Callout, CalloutKind, CodeBlock, CodeTab, FeatureTable, PageSection,
};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn SecurityFramework() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Brolostack Devil is the framework's security layer: it obfuscates shipped \
            source, seals store contents, and rotates the sealing keys on an interval \
            you control."
        </p>

        <PageSection title="Protection levels">
            <FeatureTable
                headers=vec!["Level", "Source", "Stored data"]
                rows=vec![
                    vec!["standard", "Minified", "Plaintext"],
                    vec!["sealed", "Obfuscated", "Encrypted at rest"],
                    vec!["paranoid", "Obfuscated + anti-debug", "Encrypted, keys rotated hourly"],
                ]
            />
        </PageSection>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"const app = new Brolostack({
  appName: 'ledger',
  security: { level: 'sealed', rotateKeys: '24h' },
});"#)]
        />

        <Callout kind=CalloutKind::Warning title="Client-side limits">
            <p>
                "Obfuscation raises the cost of reverse engineering; it is not a \
                substitute for keeping genuinely secret material off the client."
            </p>
        </Callout>
    }
}

#[component]
pub fn Encryption() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Store encryption is zero-knowledge: keys derive from a user-held secret, \
            and nothing recoverable ever leaves the device."
        </p>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"const vault = app.createStore('vault', {}, {
  encryption: {
    derive: 'argon2id',       // from the user's passphrase
    cipher: 'aes-256-gcm',
  },
});

await vault.unlock(passphrase);   // required once per session"#)]
        />

        <PageSection title="What is encrypted">
            <ul class=css::list>
                <li>"Store values, before they reach the storage engine"</li>
                <li>"Export snapshots, when a passphrase is supplied"</li>
                <li>"AI conversation memory for stores marked sensitive"</li>
            </ul>
            <p class=css::prose>
                "Keys live only in memory while a session is unlocked. A forgotten \
                passphrase is unrecoverable by design."
            </p>
        </PageSection>
    }
}

#[component]
pub fn Authentication() -> impl IntoView {
    view! {
        <p class=css::lead>
            "The CIAM module handles sign-in against external identity providers and \
            keeps the resulting session entirely client-side."
        </p>

        <CodeBlock
            tabs=vec![
                CodeTab::new("TypeScript", r#"const auth = app.auth({
  provider: 'auth0',
  domain: 'example.auth0.com',
  clientId: '...',
});

await auth.login();                 // redirect or popup
const session = auth.session();     // tokens in sealed storage"#),
                CodeTab::new("Hybrid", r#"// Multi-provider: corporate SSO first, social fallback
const auth = app.auth({
  providers: ['entra', 'google'],
  strategy: 'first-available',
});"#),
            ]
        />

        <PageSection title="Session storage">
            <p class=css::prose>
                "Tokens are written to a sealed store and refreshed in the background. \
                Logging out wipes the store and revokes the refresh token with the \
                provider."
            </p>
        </PageSection>
    }
}

#[component]
pub fn PrivateMode() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Private mode runs the whole stack without touching durable storage — \
            useful for shared machines, kiosks, and incognito sessions."
        </p>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"const app = new Brolostack({
  appName: 'kiosk',
  storage: { engine: 'memory' },    // nothing persists
});"#)]
        />

        <PageSection title="Behavior changes">
            <ul class=css::list>
                <li>"Stores work normally but evaporate on reload"</li>
                <li>"Export is still available for an explicit user-initiated save"</li>
                <li>"Cloud adapters refuse to start unless explicitly re-enabled"</li>
            </ul>
        </PageSection>
    }
}
