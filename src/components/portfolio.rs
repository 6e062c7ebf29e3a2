//! Portfolio section: filter pills over a responsive project grid.
//!
//! Filtering is state-driven. Items matching the active filter carry the
//! `show` class with a per-index transition delay (the 100ms stagger);
//! non-matching items fade out with `hide` and leave the layout 300ms
//! later by moving into the `gone` set. The pass counter makes a stale
//! hide timer a no-op when the filter changes again mid-fade.

use std::collections::HashSet;
use std::time::Duration;

use dioxus::prelude::*;
use vitrine_core::filter::{reveal_delay, Filter, ITEM_HIDE_MS};
use vitrine_ui::FilterPills;

use crate::context::use_catalog;

#[derive(Props, Clone, PartialEq)]
pub struct PortfolioProps {
    /// Called with the project id when a card is clicked
    pub on_open: EventHandler<String>,
}

#[component]
pub fn Portfolio(props: PortfolioProps) -> Element {
    let catalog = use_catalog();
    let mut filter = use_signal(Filter::default);
    // Ids removed from the layout after their fade-out finished
    let mut gone: Signal<HashSet<String>> = use_signal(HashSet::new);
    let mut pass: Signal<u64> = use_signal(|| 0);

    let pills = Filter::pills_for(&catalog.read().categories());
    let selected = filter();
    let projects = catalog.read().projects().to_vec();
    let on_open = props.on_open;

    let select = move |next: Filter| {
        if next == filter() {
            return;
        }
        filter.set(next);
        let this_pass = pass() + 1;
        pass.set(this_pass);

        // Items matching the new filter re-enter the layout right away;
        // the rest keep fading where they are.
        let matching: HashSet<String> = catalog
            .read()
            .projects()
            .iter()
            .filter(|p| next.matches(p.category))
            .map(|p| p.id.clone())
            .collect();
        gone.write().retain(|id| !matching.contains(id));

        spawn(async move {
            tokio::time::sleep(Duration::from_millis(ITEM_HIDE_MS)).await;
            if pass() != this_pass {
                return; // a newer filter change owns the layout now
            }
            let hidden: HashSet<String> = catalog
                .read()
                .projects()
                .iter()
                .filter(|p| !next.matches(p.category))
                .map(|p| p.id.clone())
                .collect();
            gone.set(hidden);
        });
    };

    // Card classes and stagger delays are fixed before rendering; only
    // visible cards advance the stagger index.
    let mut visible_index = 0usize;
    let cards: Vec<(vitrine_core::Project, &'static str, u64)> = projects
        .into_iter()
        .map(|project| {
            let matching = selected.matches(project.category);
            let is_gone = gone.read().contains(&project.id);
            let card_class = if matching {
                "portfolio-card show"
            } else if is_gone {
                "portfolio-card gone"
            } else {
                "portfolio-card hide"
            };
            let delay_ms = if matching {
                let d = reveal_delay(visible_index).as_millis() as u64;
                visible_index += 1;
                d
            } else {
                0
            };
            (project, card_class, delay_ms)
        })
        .collect();

    rsx! {
        section { id: "portfolio", class: "section portfolio",
            h2 { class: "section-title", "My Portfolio" }

            FilterPills {
                filters: pills,
                selected: selected,
                on_select: select,
            }

            div { class: "portfolio-grid",
                for (project, card_class, delay_ms) in cards {
                    {
                        let id = project.id.clone();
                        rsx! {
                            div {
                                key: "{project.id}",
                                class: "{card_class}",
                                style: "transition-delay: {delay_ms}ms;",
                                onclick: move |_| on_open.call(id.clone()),
                                img {
                                    class: "portfolio-cover",
                                    src: "{project.cover()}",
                                    alt: "{project.title}",
                                    loading: "lazy",
                                }
                                div { class: "portfolio-overlay",
                                    h3 { class: "portfolio-title", "{project.title}" }
                                    span { class: "portfolio-category", "{project.category.label()}" }
                                    span { class: "portfolio-cta", "View Gallery" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
