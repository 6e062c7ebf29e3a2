//! Floating scroll-to-top button, shown once the page is scrolled past
//! the threshold.

use dioxus::prelude::*;
use vitrine_core::scroll::show_scroll_top;
use vitrine_ui::IconButton;

#[derive(Props, Clone, PartialEq)]
pub struct ScrollTopButtonProps {
    pub scroll_y: f64,
    pub on_click: EventHandler<()>,
}

#[component]
pub fn ScrollTopButton(props: ScrollTopButtonProps) -> Element {
    let shown = show_scroll_top(props.scroll_y);
    let class = if shown {
        "scroll-top shown".to_string()
    } else {
        "scroll-top".to_string()
    };
    let on_click = props.on_click;

    rsx! {
        IconButton {
            class: class,
            aria_label: "Scroll to top".to_string(),
            onclick: move |_| on_click.call(()),
            "\u{2191}"
        }
    }
}
