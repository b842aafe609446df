//! AI Framework section pages.

use leptos::prelude::*;

use crate::components::content::{
    Callout, CalloutKind, CodeBlock, CodeTab, FeatureTable, PageSection,
};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn AiFramework() -> impl IntoView {
    view! {
        <p class=css::lead>
            "The AI framework brings provider-agnostic language-model access into the \
            browser stack: one client API across 18+ providers, with conversation \
            memory persisted in ordinary Brolostack stores."
        </p>

        <PageSection title="Providers">
            <FeatureTable
                headers=vec!["Provider", "Modes", "Streaming"]
                rows=vec![
                    vec!["OpenAI", "chat, embeddings, tools", "yes"],
                    vec!["Anthropic", "chat, tools", "yes"],
                    vec!["Google AI", "chat, embeddings", "yes"],
                    vec!["DeepSeek", "chat", "yes"],
                    vec!["Ollama (local)", "chat, embeddings", "yes"],
                ]
            />
        </PageSection>

        <PageSection title="First request">
            <CodeBlock
                tabs=vec![CodeTab::new("TypeScript", r#"const ai = app.ai({
  provider: 'anthropic',
  model: 'claude-sonnet-4-5',
});

const reply = await ai.chat([
  { role: 'user', content: 'Summarize my open tasks.' },
], {
  context: todos.snapshot(),   // stores plug in as grounding data
});"#)]
            />
        </PageSection>

        <Callout kind=CalloutKind::Note title="Keys stay client-side">
            <p>
                "Provider keys are held in memory or the encrypted key vault — they are \
                never proxied through a Brolostack server, because there isn't one."
            </p>
        </Callout>
    }
}

#[component]
pub fn AiAgents() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Compose specialist agents — each with its own provider, system prompt, and \
            tool set — and let a coordinator route work between them."
        </p>

        <CodeBlock
            title="agents.ts"
            tabs=vec![CodeTab::new("TypeScript", r#"const researcher = ai.agent({
  name: 'researcher',
  instructions: 'Gather and cite facts. Never speculate.',
  tools: [searchStore],
});

const writer = ai.agent({
  name: 'writer',
  instructions: 'Draft prose from the researcher notes.',
});

const crew = ai.team([researcher, writer], {
  mode: 'sequential',          // or 'parallel', 'adaptive'
});

const report = await crew.run('Write a brief on Q3 churn.');"#)]
        />

        <PageSection title="Coordination modes">
            <ul class=css::list>
                <li><code>"sequential"</code>" — agents run in declaration order, each seeing prior output"</li>
                <li><code>"parallel"</code>" — independent fan-out, results merged by the coordinator"</li>
                <li><code>"adaptive"</code>" — the coordinator model decides routing per task"</li>
            </ul>
        </PageSection>
    }
}

#[component]
pub fn TokenUsage() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Token Usage Control meters every request against per-session and \
            per-application budgets, so an agent loop can never surprise you on cost."
        </p>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"const ai = app.ai({
  provider: 'openai',
  usage: {
    maxTokensPerSession: 50_000,
    maxTokensPerRequest: 4_000,
    onBudgetExceeded: 'truncate',   // or 'reject', 'warn'
  },
});

ai.usage.subscribe(u => {
  meter.value = u.sessionTokens / u.sessionBudget;
});"#)]
        />

        <PageSection title="Enforcement points">
            <FeatureTable
                headers=vec!["Check", "When", "On violation"]
                rows=vec![
                    vec!["Request ceiling", "Before dispatch", "Prompt is truncated or rejected"],
                    vec!["Session budget", "After each response", "Further requests blocked"],
                    vec!["Streaming cutoff", "Mid-stream", "Stream closed at the boundary"],
                ]
            />
            <p class=css::prose>
                "Usage counters persist with the session store, so a reload does not \
                reset a spent budget."
            </p>
        </PageSection>
    }
}

#[component]
pub fn AiGovernance() -> impl IntoView {
    view! {
        <p class=css::lead>
            "The governance layer (\"BrolostackBSDGF4AI\") screens AI traffic in both \
            directions: prompts before dispatch, completions before they reach \
            application code."
        </p>

        <PageSection title="Built-in checks">
            <ul class=css::list>
                <li>"Hallucination detection against supplied grounding context"</li>
                <li>"Jailbreak and prompt-injection screening"</li>
                <li>"Toxicity, bias, and privacy-leak filters"</li>
                <li>"Industry-specific compliance profiles (healthcare, finance, legal)"</li>
            </ul>
        </PageSection>

        <PageSection title="Configuration">
            <CodeBlock
                tabs=vec![CodeTab::new("TypeScript", r#"const ai = app.ai({
  provider: 'anthropic',
  governance: {
    profile: 'finance',
    onViolation: (finding, ctx) => {
      audit.add(finding);        // audit trail is a plain store
      return finding.severity === 'high' ? 'block' : 'flag';
    },
  },
});"#)]
            />
        </PageSection>
    }
}
