//! Toast banner rendering.
//!
//! The queue and timings live in `vitrine_core::notify`; this component
//! renders one visible toast at its deterministic stack offset. The phase
//! drives the slide-in/slide-out transform classes.

use dioxus::prelude::*;
use vitrine_core::notify::ToastQueue;
use vitrine_core::Toast;

/// Visual lifecycle stage of one toast.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastPhase {
    /// Just inserted, still translated off-screen
    #[default]
    Entering,
    /// Slid into view
    Shown,
    /// Exit transition before removal
    Leaving,
}

impl ToastPhase {
    /// CSS class fragment for this phase.
    pub fn class(&self) -> &'static str {
        match self {
            ToastPhase::Entering => "toast-enter",
            ToastPhase::Shown => "toast-shown",
            ToastPhase::Leaving => "toast-leave",
        }
    }
}

/// Properties for the ToastView component
#[derive(Clone, PartialEq, Props)]
pub struct ToastViewProps {
    /// The toast to render
    pub toast: Toast,
    /// Current lifecycle phase
    pub phase: ToastPhase,
    /// Position in the visible stack (0 = oldest, at the anchor)
    pub stack_index: usize,
    /// Handler for the manual dismiss button
    pub on_dismiss: EventHandler<u64>,
}

/// One notification banner at the fixed top-right anchor
#[component]
pub fn ToastView(props: ToastViewProps) -> Element {
    let offset = ToastQueue::offset_px(props.stack_index);
    let id = props.toast.id;

    rsx! {
        div {
            class: "toast {props.toast.kind.class()} {props.phase.class()}",
            style: "top: calc(1rem + {offset}px);",
            role: "status",
            "aria-live": "polite",

            span { class: "toast-icon", "{props.toast.kind.icon()}" }
            span { class: "toast-message", "{props.toast.message}" }
            button {
                class: "toast-close",
                "aria-label": "Dismiss notification",
                onclick: move |_| props.on_dismiss.call(id),
                "\u{00D7}"
            }
        }
    }
}
