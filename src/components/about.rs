//! About section. Static copy plus the headline stats row.

use dioxus::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("50+", "Projects Completed"),
    ("5+", "Years Experience"),
    ("30+", "Happy Clients"),
];

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "section about",
            h2 { class: "section-title", "About Me" }
            div { class: "about-body",
                p {
                    "I'm a graphic designer specializing in brand identity, "
                    "social media design, and motion graphics. I help businesses "
                    "stand out with visuals that are bold, consistent, and memorable."
                }
                p {
                    "From logo systems to full campaign rollouts, every project "
                    "starts with understanding your audience and ends with work "
                    "you're proud to put your name on."
                }
            }
            div { class: "about-stats",
                for (value, label) in STATS {
                    div { key: "{label}", class: "stat",
                        span { class: "stat-value", "{value}" }
                        span { class: "stat-label", "{label}" }
                    }
                }
            }
        }
    }
}
