//! Clipboard access for code snippet copy buttons.

/// Write text to the system clipboard.
///
/// Fire-and-forget: the returned promise is awaited on the microtask queue
/// and its result discarded. No-op outside the browser.
pub fn copy_text(text: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::JsFuture;

        if let Some(window) = super::dom::window() {
            let promise: js_sys::Promise = window.navigator().clipboard().write_text(text);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = JsFuture::from(promise).await;
            });
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = text;
}
