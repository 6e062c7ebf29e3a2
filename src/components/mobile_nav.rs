//! Slide-down navigation panel for narrow windows.
//!
//! Rendered unconditionally and toggled with the `open` class so the
//! CSS transition (max-height + opacity) can animate both directions.

use dioxus::prelude::*;

use crate::components::nav_header::NavLocation;

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    pub open: bool,
    pub active: Option<String>,
    pub on_navigate: EventHandler<String>,
}

#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let panel_class = if props.open {
        "mobile-nav open"
    } else {
        "mobile-nav"
    };
    let hidden = !props.open;
    let on_navigate = props.on_navigate;

    rsx! {
        nav { id: "mobile-menu", class: "{panel_class}", "aria-hidden": "{hidden}",
            for location in NavLocation::all() {
                {
                    let location = *location;
                    let is_active = props.active.as_deref() == Some(location.section_id());
                    rsx! {
                        button {
                            key: "{location.section_id()}",
                            class: if is_active { "mobile-nav-item active" } else { "mobile-nav-item" },
                            tabindex: if props.open { "0" } else { "-1" },
                            onclick: move |_| on_navigate.call(location.section_id().to_string()),
                            "{location.display_name()}"
                        }
                    }
                }
            }
        }
    }
}
