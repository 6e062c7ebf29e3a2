//! Gallery modal: every image of one project, in catalog order.

use dioxus::prelude::*;
use vitrine_core::Project;
use vitrine_ui::ModalShell;

#[derive(Props, Clone, PartialEq)]
pub struct GalleryModalProps {
    pub project: Project,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn GalleryModal(props: GalleryModalProps) -> Element {
    let title = props.project.title.clone();
    let on_close = props.on_close;

    rsx! {
        ModalShell {
            title: title,
            on_close: move |_| on_close.call(()),
            div { class: "gallery-grid",
                for (index, image) in props.project.images.iter().enumerate() {
                    {
                        let number = index + 1;
                        rsx! {
                            div { key: "{image}", class: "gallery-tile",
                                img {
                                    src: "{image}",
                                    alt: "{props.project.title} - {number}",
                                    loading: "lazy",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
