//! Skills section: proficiency bars that fill once the section scrolls
//! into view, staggered 200ms apart. The reveal latches — scrolling back
//! up does not reset the bars.

use dioxus::prelude::*;
use vitrine_core::scroll::skill_reveal_delay;

const SKILLS: &[(&str, u8)] = &[
    ("Adobe Photoshop", 95),
    ("Adobe Illustrator", 90),
    ("Adobe After Effects", 85),
    ("Adobe Premiere Pro", 80),
    ("Brand Identity Design", 92),
    ("Motion Graphics", 88),
];

#[derive(Props, Clone, PartialEq)]
pub struct SkillsProps {
    /// Set once the section has been scrolled at least half into view
    pub revealed: bool,
}

#[component]
pub fn Skills(props: SkillsProps) -> Element {
    rsx! {
        section { id: "skills", class: "section skills",
            h2 { class: "section-title", "My Skills" }
            div { class: "skills-grid",
                for (index, (name, level)) in SKILLS.iter().enumerate() {
                    {
                        let delay_ms = skill_reveal_delay(index).as_millis();
                        let width = if props.revealed { *level } else { 0 };
                        rsx! {
                            div { key: "{name}", class: "skill",
                                div { class: "skill-head",
                                    span { class: "skill-name", "{name}" }
                                    span { class: "skill-level", "{level}%" }
                                }
                                div { class: "skill-track",
                                    div {
                                        class: "skill-fill",
                                        style: "width: {width}%; transition-delay: {delay_ms}ms;",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
