use std::sync::Mutex;

use curetrackr_core::domain::diagnosis::ports::Notifier;

/// Collects the notifications raised while handling one request so they can
/// be rendered as toasts on the returned page.
#[derive(Debug, Default)]
pub struct ToastCollector {
    messages: Mutex<Vec<String>>,
}

impl ToastCollector {
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Notifier for ToastCollector {
    fn notify_error(&self, message: &str) {
        tracing::warn!(toast = message, "Notifying user");
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
