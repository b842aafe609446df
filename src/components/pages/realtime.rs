//! Realtime section pages.

use leptos::prelude::*;

use crate::components::content::{CodeBlock, CodeTab, FeatureTable, PageSection};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn WebsocketFramework() -> impl IntoView {
    view! {
        <p class=css::lead>
            "When an application opts into shared state, the WebSocket framework \
            provides bidirectional messaging over the ARGS protocol (Agent Real-time \
            Governance & Streaming)."
        </p>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"const ws = app.websocket({
  url: 'wss://relay.example.com',
  reconnect: { retries: 5, backoff: 'exponential' },
});

ws.on('task:update', payload => {
  tasks.applyRemote(payload);
});

ws.send('task:update', { id, done: true });"#)]
        />

        <PageSection title="ARGS message envelope">
            <FeatureTable
                headers=vec!["Field", "Purpose"]
                rows=vec![
                    vec!["channel", "Topic routing key"],
                    vec!["seq", "Per-sender monotonic sequence number"],
                    vec!["origin", "Stable client identifier"],
                    vec!["payload", "Application data, JSON-encoded"],
                ]
            />
        </PageSection>
    }
}

#[component]
pub fn RealtimeSync() -> impl IntoView {
    view! {
        <p class=css::lead>
            "Realtime sync layers store replication on top of the WebSocket framework: \
            mark a store as shared and committed mutations broadcast to every peer in \
            the room."
        </p>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"const board = app.createStore('board', initialState, {
  sync: { room: 'team-42', conflict: 'last-write-wins' },
});"#)]
        />

        <PageSection title="Conflict handling">
            <ul class=css::list>
                <li><code>"last-write-wins"</code>" — timestamp ordering, simplest"</li>
                <li><code>"merge"</code>" — field-level merge for disjoint updates"</li>
                <li><code>"custom"</code>" — application-supplied resolver function"</li>
            </ul>
            <p class=css::prose>
                "Offline peers replay their local mutation log on reconnect; the same \
                conflict policy applies to replayed entries."
            </p>
        </PageSection>
    }
}

#[component]
pub fn MultiRoom() -> impl IntoView {
    view! {
        <p class=css::lead>
            "The multi-room manager partitions realtime traffic into isolated \
            channels, each with its own membership, permissions, and message history."
        </p>

        <CodeBlock
            tabs=vec![CodeTab::new("TypeScript", r#"const rooms = app.rooms();

const standup = await rooms.join('standup-notes', {
  role: 'editor',
});

standup.on('message', msg => feed.append(msg));
await standup.send({ text: 'Done with the migration.' });
await standup.leave();"#)]
        />

        <PageSection title="Isolation guarantees">
            <ul class=css::list>
                <li>"Messages never cross room boundaries, including through replays"</li>
                <li>"Roles (viewer, editor, owner) are enforced at the relay"</li>
                <li>"Rooms are garbage-collected after the last member leaves"</li>
            </ul>
        </PageSection>
    }
}
