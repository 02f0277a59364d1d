//! Best-effort clipboard writes via `navigator.clipboard`.

#![allow(clippy::unused_async)]

/// Copy `text` to the system clipboard.
///
/// Returns `true` when the browser accepted the write. Failures are logged at
/// debug level and otherwise ignored.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) else {
            return false;
        };
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await {
            Ok(_) => true,
            Err(e) => {
                log::debug!("clipboard write rejected: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
