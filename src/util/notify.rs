//! User-facing notifications.
//!
//! The save dialog reports failures through [`Notifier`] instead of calling
//! `window.alert` itself, so its state machine runs without a browser.

use std::sync::Arc;

/// Sink for blocking user notifications.
pub trait Notifier {
    fn notify_error(&self, message: &str);
}

/// Shows notifications with `window.alert`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify_error(&self, message: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
        }
    }
}

/// Notifier reference provided through Leptos context.
#[derive(Clone)]
pub struct NotifierHandle(Arc<dyn Notifier + Send + Sync>);

impl NotifierHandle {
    pub fn new(notifier: impl Notifier + Send + Sync + 'static) -> Self {
        Self(Arc::new(notifier))
    }
}

impl Default for NotifierHandle {
    fn default() -> Self {
        Self::new(AlertNotifier)
    }
}

impl Notifier for NotifierHandle {
    fn notify_error(&self, message: &str) {
        self.0.notify_error(message);
    }
}
