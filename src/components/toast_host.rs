//! Fixed top-right host for the visible notification stack.

use dioxus::prelude::*;
use vitrine_ui::{ToastPhase, ToastView};

use crate::context::use_toasts;

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let visible = toasts.visible();

    rsx! {
        div { class: "toast-host",
            for (stack_index, toast) in visible.into_iter().enumerate() {
                {
                    let phase = toasts.phase_of(toast.id).unwrap_or_default();
                    let mut toasts = toasts;
                    rsx! {
                        ToastView {
                            key: "{toast.id}",
                            toast: toast,
                            phase: phase,
                            stack_index: stack_index,
                            on_dismiss: move |id| toasts.dismiss(id),
                        }
                    }
                }
            }
        }
    }
}
