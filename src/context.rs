//! App-wide context: the catalog, the toast center, and clipboard access.
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = use_catalog();
//! let mut toasts = use_toasts();
//! toasts.notify("Copied", ToastKind::Success);
//! ```

use std::collections::HashMap;
use std::time::Duration;

use dioxus::prelude::*;
use vitrine_core::notify::{
    ToastQueue, TOAST_ENTER_MS, TOAST_EXIT_MS, TOAST_VISIBLE_MS,
};
use vitrine_core::{Catalog, Toast, ToastKind};
use vitrine_ui::ToastPhase;

/// Hook to access the catalog from context.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}

/// Hook to access the toast center from context.
pub fn use_toasts() -> ToastCenter {
    use_context::<ToastCenter>()
}

/// Owner of the toast queue and each visible toast's lifecycle.
///
/// The queue itself (ordering, cap, promotion) is `vitrine_core::notify`;
/// this type drives the timed phases: enter 100ms after insertion, leave
/// after 5s, removed 300ms later. Every timer step re-checks the phase it
/// expects, so a manual dismiss supersedes the automatic timeline instead
/// of racing it.
#[derive(Clone, Copy)]
pub struct ToastCenter {
    queue: Signal<ToastQueue>,
    phases: Signal<HashMap<u64, ToastPhase>>,
}

impl ToastCenter {
    /// Create the center and provide it as context. Call once, in `App`.
    pub fn provide() -> Self {
        let center = Self {
            queue: use_signal(ToastQueue::default),
            phases: use_signal(HashMap::new),
        };
        use_context_provider(|| center)
    }

    /// Enqueue a toast. Its lifecycle starts immediately if a visible
    /// slot is free, otherwise when it gets promoted.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) {
        let id = self.queue.write().push(message, kind);
        if self.queue.read().is_visible(id) {
            self.run_lifecycle(id);
        }
    }

    /// Manually dismiss a toast (close button).
    pub fn dismiss(&mut self, id: u64) {
        if !self.queue.read().is_visible(id) {
            // Still pending: drop it before it ever shows.
            self.queue.write().dismiss(id);
            return;
        }
        self.phases.write().insert(id, ToastPhase::Leaving);
        let mut center = *self;
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(TOAST_EXIT_MS)).await;
            center.remove(id);
        });
    }

    /// Currently visible toasts, oldest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.read().visible().to_vec()
    }

    /// Lifecycle phase of a visible toast.
    pub fn phase_of(&self, id: u64) -> Option<ToastPhase> {
        self.phases.read().get(&id).copied()
    }

    fn run_lifecycle(&self, id: u64) {
        let mut center = *self;
        center.phases.write().insert(id, ToastPhase::Entering);
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(TOAST_ENTER_MS)).await;
            if center.phase_of(id) != Some(ToastPhase::Entering) {
                return; // superseded by a manual dismiss
            }
            center.phases.write().insert(id, ToastPhase::Shown);

            tokio::time::sleep(Duration::from_millis(TOAST_VISIBLE_MS)).await;
            if center.phase_of(id) != Some(ToastPhase::Shown) {
                return;
            }
            center.phases.write().insert(id, ToastPhase::Leaving);

            tokio::time::sleep(Duration::from_millis(TOAST_EXIT_MS)).await;
            center.remove(id);
        });
    }

    fn remove(&mut self, id: u64) {
        self.phases.write().remove(&id);
        let promoted = self.queue.write().dismiss(id);
        if let Some(promoted) = promoted {
            self.run_lifecycle(promoted.id);
        }
    }
}

/// Copy `text` to the system clipboard and confirm with a toast.
///
/// Prefers arboard; if the system clipboard is unavailable, falls back to
/// the webview clipboard API.
pub fn copy_to_clipboard(mut toasts: ToastCenter, text: String) {
    spawn(async move {
        let copied = match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.clone())) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "system clipboard unavailable, trying webview fallback");
                let script = format!(
                    "navigator.clipboard.writeText({});",
                    serde_json::Value::String(text.clone())
                );
                dioxus::document::eval(&script).await.is_ok()
            }
        };

        if copied {
            toasts.notify(format!("Copied: {text}"), ToastKind::Success);
        } else {
            toasts.notify("Could not copy to clipboard", ToastKind::Error);
        }
    });
}
