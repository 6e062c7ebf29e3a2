//! Toast notification queue.
//!
//! Transient banners with a fixed lifecycle: slide in shortly after
//! insertion, auto-dismiss after five seconds, then a short exit
//! transition before removal.
//!
//! Unlike the usual "append a node and forget it" approach, toasts go
//! through an explicit ordered queue with a maximum concurrent-visible
//! count and a deterministic stacking offset, so bursts of notifications
//! never overlap. Dismissing a visible toast promotes the oldest pending
//! one.

use std::collections::VecDeque;

/// Delay before the enter transition starts, in milliseconds.
pub const TOAST_ENTER_MS: u64 = 100;
/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_VISIBLE_MS: u64 = 5000;
/// Duration of the exit transition before removal.
pub const TOAST_EXIT_MS: u64 = 300;
/// Default cap on concurrently visible toasts.
pub const DEFAULT_MAX_VISIBLE: usize = 3;
/// Vertical distance between stacked toasts, in pixels.
pub const TOAST_STACK_STEP_PX: u32 = 76;

/// Severity / styling of a toast.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// CSS class suffix for the banner.
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }

    /// Glyph shown before the message.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2713}",
            ToastKind::Error => "\u{2715}",
            ToastKind::Info => "\u{2139}",
        }
    }
}

/// One notification banner.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Toast {
    /// Unique within the queue's lifetime, monotonically increasing.
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Ordered toast queue with a visible-count cap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    max_visible: usize,
    visible: Vec<Toast>,
    pending: VecDeque<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE)
    }
}

impl ToastQueue {
    /// Create a queue showing at most `max_visible` toasts at once
    /// (clamped to at least one).
    pub fn new(max_visible: usize) -> Self {
        Self {
            next_id: 0,
            max_visible: max_visible.max(1),
            visible: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Enqueue a toast. It becomes visible immediately if there is room,
    /// otherwise it waits in insertion order. Returns the toast id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let toast = Toast {
            id: self.next_id,
            message: message.into(),
            kind,
        };
        self.next_id += 1;
        let id = toast.id;
        if self.visible.len() < self.max_visible {
            self.visible.push(toast);
        } else {
            self.pending.push_back(toast);
        }
        id
    }

    /// Remove a toast by id. If it was visible, the oldest pending toast
    /// (if any) is promoted and returned so its lifecycle can be started.
    pub fn dismiss(&mut self, id: u64) -> Option<Toast> {
        if let Some(pos) = self.visible.iter().position(|t| t.id == id) {
            self.visible.remove(pos);
            if let Some(promoted) = self.pending.pop_front() {
                self.visible.push(promoted.clone());
                return Some(promoted);
            }
            return None;
        }
        self.pending.retain(|t| t.id != id);
        None
    }

    /// Currently visible toasts, oldest first.
    pub fn visible(&self) -> &[Toast] {
        &self.visible
    }

    /// Whether the toast with this id is currently on screen.
    pub fn is_visible(&self, id: u64) -> bool {
        self.visible.iter().any(|t| t.id == id)
    }

    /// Number of toasts waiting for a visible slot.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Deterministic vertical offset for the toast at `visible_index`.
    pub fn offset_px(visible_index: usize) -> u32 {
        visible_index as u32 * TOAST_STACK_STEP_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut q = ToastQueue::new(3);
        let a = q.push("a", ToastKind::Info);
        let b = q.push("b", ToastKind::Info);
        assert!(b > a);
    }

    #[test]
    fn cap_defers_excess_toasts() {
        let mut q = ToastQueue::new(2);
        q.push("a", ToastKind::Success);
        q.push("b", ToastKind::Success);
        let c = q.push("c", ToastKind::Error);
        assert_eq!(q.visible().len(), 2);
        assert_eq!(q.pending_len(), 1);
        assert!(!q.is_visible(c));
    }

    #[test]
    fn dismiss_promotes_oldest_pending() {
        let mut q = ToastQueue::new(1);
        let a = q.push("a", ToastKind::Info);
        let b = q.push("b", ToastKind::Info);
        let c = q.push("c", ToastKind::Info);

        let promoted = q.dismiss(a).expect("b should be promoted");
        assert_eq!(promoted.id, b);
        assert!(q.is_visible(b));
        assert_eq!(q.pending_len(), 1);

        let promoted = q.dismiss(b).expect("c should be promoted");
        assert_eq!(promoted.id, c);
        assert_eq!(q.pending_len(), 0);

        assert!(q.dismiss(c).is_none());
        assert!(q.visible().is_empty());
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let mut q = ToastQueue::default();
        q.push("a", ToastKind::Info);
        assert!(q.dismiss(999).is_none());
        assert_eq!(q.visible().len(), 1);
    }

    #[test]
    fn dismiss_pending_removes_it_without_promotion() {
        let mut q = ToastQueue::new(1);
        q.push("a", ToastKind::Info);
        let b = q.push("b", ToastKind::Info);
        assert!(q.dismiss(b).is_none());
        assert_eq!(q.pending_len(), 0);
        assert_eq!(q.visible().len(), 1);
    }

    #[test]
    fn zero_cap_is_clamped_to_one() {
        let mut q = ToastQueue::new(0);
        let a = q.push("a", ToastKind::Info);
        assert!(q.is_visible(a));
    }

    #[test]
    fn stacking_offsets_are_deterministic() {
        assert_eq!(ToastQueue::offset_px(0), 0);
        assert_eq!(ToastQueue::offset_px(1), TOAST_STACK_STEP_PX);
        assert_eq!(ToastQueue::offset_px(2), 2 * TOAST_STACK_STEP_PX);
    }

    #[test]
    fn kind_classes_and_icons() {
        assert_eq!(ToastKind::Success.class(), "toast-success");
        assert_eq!(ToastKind::Error.class(), "toast-error");
        assert_eq!(ToastKind::Info.class(), "toast-info");
        assert_eq!(ToastKind::Success.icon(), "\u{2713}");
    }
}
