//! Modal shell.
//!
//! Overlay dialog used by the gallery viewer: closes on overlay click,
//! on the close button, and on Escape. Content clicks are stopped from
//! propagating to the overlay.

use dioxus::prelude::*;

use crate::CloseButton;

/// Properties for the ModalShell component
#[derive(Clone, PartialEq, Props)]
pub struct ModalShellProps {
    /// Dialog title
    pub title: String,
    /// Dialog body
    pub children: Element,
    /// Callback when the modal is closed
    pub on_close: EventHandler<()>,
}

/// Overlay dialog shell
///
/// # Example
///
/// ```rust,ignore
/// if let Some(project) = open_project() {
///     rsx! {
///         ModalShell {
///             title: project.title.clone(),
///             on_close: move |_| open_project.set(None),
///             div { class: "modal-gallery", /* tiles */ }
///         }
///     }
/// }
/// ```
#[component]
pub fn ModalShell(props: ModalShellProps) -> Element {
    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "modal-dialog",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                div { class: "modal-body",
                    {props.children}
                }
            }
        }
    }
}
