//! Hero section: headline, typing tagline, and the two call-to-action
//! buttons. The decorative background drifts at half scroll speed.

use dioxus::prelude::*;
use vitrine_core::scroll::parallax_offset;
use vitrine_core::typing::default_phrases;
use vitrine_ui::{Button, ButtonVariant, TypingText};

#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    /// Current page scroll offset, for the parallax background
    pub scroll_y: f64,
    pub on_navigate: EventHandler<String>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let offset = parallax_offset(props.scroll_y);
    let on_navigate = props.on_navigate;

    rsx! {
        section { id: "home", class: "hero",
            div {
                class: "hero-backdrop",
                style: "transform: translateY({offset}px);",
            }
            div { class: "hero-content",
                p { class: "hero-greeting", "Hello, I'm" }
                h1 { class: "hero-title", "Omar Nasser" }
                div { class: "hero-tagline",
                    TypingText { phrases: default_phrases() }
                }
                p { class: "hero-blurb",
                    "Crafting visual identities and motion graphics that tell your story."
                }
                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_navigate.call("portfolio".to_string()),
                        "View My Work"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_navigate.call("contact".to_string()),
                        "Get In Touch"
                    }
                }
            }
        }
    }
}
