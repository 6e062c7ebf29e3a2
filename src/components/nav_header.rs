//! Navigation Header Component
//!
//! Desktop: fixed horizontal bar with the site title and section links.
//! Gains a solid, blurred background once the page is scrolled, and
//! highlights the link of the section currently in view.
//! Mobile (< 768px): the links collapse behind a hamburger button that
//! opens the slide-down panel ([`MobileNav`]).

use dioxus::prelude::*;

use crate::components::mobile_nav::MobileNav;

/// Section targets of the page, in document order
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavLocation {
    Home,
    About,
    Skills,
    Portfolio,
    Contact,
}

impl NavLocation {
    pub fn all() -> &'static [NavLocation] {
        &[
            NavLocation::Home,
            NavLocation::About,
            NavLocation::Skills,
            NavLocation::Portfolio,
            NavLocation::Contact,
        ]
    }

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::About => "About",
            NavLocation::Skills => "Skills",
            NavLocation::Portfolio => "Portfolio",
            NavLocation::Contact => "Contact",
        }
    }

    /// The element id of the section this link scrolls to
    pub fn section_id(&self) -> &'static str {
        match self {
            NavLocation::Home => "home",
            NavLocation::About => "about",
            NavLocation::Skills => "skills",
            NavLocation::Portfolio => "portfolio",
            NavLocation::Contact => "contact",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Whether the page is scrolled past the navbar threshold
    pub scrolled: bool,
    /// Section id currently in view, if any
    pub active: Option<String>,
    /// Callback with the target section id when a link is clicked
    pub on_navigate: EventHandler<String>,
}

/// Navigation header component
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut menu_open = use_signal(|| false);

    let header_class = if props.scrolled {
        "nav-header scrolled"
    } else {
        "nav-header"
    };
    let on_navigate = props.on_navigate;

    rsx! {
        header { id: "navbar", class: "{header_class}",
            div { class: "nav-inner",
                // Left: site title
                button {
                    class: "nav-brand",
                    onclick: move |_| on_navigate.call("home".to_string()),
                    "Omar Nasser"
                }

                // Center: section links (desktop only)
                nav { class: "nav-links",
                    for location in NavLocation::all() {
                        {
                            let location = *location;
                            let is_active =
                                props.active.as_deref() == Some(location.section_id());
                            rsx! {
                                button {
                                    key: "{location.section_id()}",
                                    class: if is_active { "nav-item active" } else { "nav-item" },
                                    onclick: move |_| {
                                        on_navigate.call(location.section_id().to_string())
                                    },
                                    "{location.display_name()}"
                                }
                            }
                        }
                    }
                }

                // Right: hamburger (mobile only)
                button {
                    id: "mobile-menu-btn",
                    class: "mobile-menu-btn",
                    "aria-label": if menu_open() { "Close menu" } else { "Open menu" },
                    "aria-expanded": "{menu_open()}",
                    onclick: move |_| menu_open.set(!menu_open()),
                    {menu_icon(menu_open())}
                }
            }
        }

        MobileNav {
            open: menu_open(),
            active: props.active.clone(),
            on_navigate: move |section: String| {
                // Any link click closes the panel.
                menu_open.set(false);
                on_navigate.call(section);
            },
        }
    }
}

/// Hamburger / X glyph, swapped with the panel state
fn menu_icon(open: bool) -> Element {
    if open {
        rsx! {
            // Lucide x icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M18 6 6 18" }
                path { d: "m6 6 12 12" }
            }
        }
    } else {
        rsx! {
            // Lucide menu icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                line { x1: "4", x2: "20", y1: "6", y2: "6" }
                line { x1: "4", x2: "20", y1: "12", y2: "12" }
                line { x1: "4", x2: "20", y1: "18", y2: "18" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_cover_all_sections_in_order() {
        let ids: Vec<&str> = NavLocation::all().iter().map(|l| l.section_id()).collect();
        assert_eq!(ids, vec!["home", "about", "skills", "portfolio", "contact"]);
    }

    #[test]
    fn display_names_are_nonempty() {
        for location in NavLocation::all() {
            assert!(!location.display_name().is_empty());
        }
    }
}
