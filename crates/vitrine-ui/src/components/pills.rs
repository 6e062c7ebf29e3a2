//! Filter pill row.
//!
//! Horizontal radiogroup of portfolio filters; exactly one pill is active
//! at a time.

use dioxus::prelude::*;
use vitrine_core::Filter;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Available filters, "All" first
    pub filters: Vec<Filter>,
    /// Currently active filter
    pub selected: Filter,
    /// Handler called when a pill is clicked
    pub on_select: EventHandler<Filter>,
}

/// Displays the row of portfolio filter pills
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(Filter::default);
///
/// rsx! {
///     FilterPills {
///         filters: Filter::pills_for(&catalog.categories()),
///         selected: filter(),
///         on_select: move |f| filter.set(f),
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "filter-pills",
            role: "radiogroup",
            "aria-label": "Portfolio filter",
            for pill in props.filters.iter() {
                {
                    let pill = *pill;
                    let is_selected = pill == props.selected;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{pill.label()}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(pill),
                            "{pill.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::catalog::ProjectCategory;
    use vitrine_core::Filter;

    #[test]
    fn pill_labels_are_distinct() {
        let pills = Filter::pills_for(&[
            ProjectCategory::Branding,
            ProjectCategory::Social,
            ProjectCategory::Motion,
        ]);
        let labels: Vec<&str> = pills.iter().map(|p| p.label()).collect();
        let mut dedup = labels.clone();
        dedup.dedup();
        assert_eq!(labels, dedup);
    }
}
