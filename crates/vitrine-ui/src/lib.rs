//! Vitrine UI Components
//!
//! Reusable Dioxus components for the portfolio app: buttons, form
//! fields with inline validation, filter pills, toast banners, the modal
//! shell, and the typing-text effect.
//!
//! ## Design Philosophy
//!
//! Dark slate surfaces with a purple-to-blue gradient accent:
//! - **Gradient (#a855f7 -> #2563eb)**: Active pills, primary actions
//! - **Slate (#0f172a / #1e293b)**: Backgrounds and cards
//! - **Green (#4ade80)**: Valid input focus, success toasts
//! - **Red (#ef4444)**: Field errors, error toasts
//!
//! Components render state from `vitrine-core`; none of them own timers
//! except [`TypingText`], which drives its animator in a scoped task.

pub mod components;

pub use components::*;
