//! Portfolio filter.
//!
//! One filter is active at a time; switching filters is pure state
//! replacement, so an in-flight reveal pass is superseded deterministically
//! instead of racing stale timers.

use std::time::Duration;

use crate::catalog::{Project, ProjectCategory};

/// Per-item stagger between reveal animations, in milliseconds.
pub const ITEM_STAGGER_MS: u64 = 100;
/// Fade-out duration before a hidden item leaves the layout.
pub const ITEM_HIDE_MS: u64 = 300;

/// Active portfolio filter: everything, or a single category.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Filter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl Filter {
    /// Whether an item tagged with `category` stays visible under this
    /// filter.
    pub fn matches(&self, category: ProjectCategory) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(wanted) => *wanted == category,
        }
    }

    /// Label shown on the filter trigger.
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Category(cat) => cat.label(),
        }
    }

    /// The pill row for a catalog: "All" plus one pill per category that
    /// occurs, in display order.
    pub fn pills_for(categories: &[ProjectCategory]) -> Vec<Filter> {
        let mut pills = vec![Filter::All];
        pills.extend(categories.iter().copied().map(Filter::Category));
        pills
    }
}

/// Reveal delay for the nth visible item (n starting at zero).
pub fn reveal_delay(visible_index: usize) -> Duration {
    Duration::from_millis(visible_index as u64 * ITEM_STAGGER_MS)
}

/// Projects that remain visible under `filter`, in catalog order.
pub fn visible_projects<'a>(projects: &'a [Project], filter: Filter) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| filter.matches(p.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: ProjectCategory) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            category,
            images: vec!["x.png".to_string()],
        }
    }

    #[test]
    fn all_matches_every_category() {
        assert!(Filter::All.matches(ProjectCategory::Branding));
        assert!(Filter::All.matches(ProjectCategory::Social));
        assert!(Filter::All.matches(ProjectCategory::Motion));
    }

    #[test]
    fn category_filter_matches_only_its_tag() {
        let f = Filter::Category(ProjectCategory::Social);
        assert!(f.matches(ProjectCategory::Social));
        assert!(!f.matches(ProjectCategory::Branding));
    }

    #[test]
    fn visible_projects_keeps_catalog_order() {
        let projects = vec![
            project("a", ProjectCategory::Branding),
            project("b", ProjectCategory::Social),
            project("c", ProjectCategory::Branding),
        ];

        let all = visible_projects(&projects, Filter::All);
        assert_eq!(all.len(), 3);

        let branding = visible_projects(&projects, Filter::Category(ProjectCategory::Branding));
        let ids: Vec<&str> = branding.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let motion = visible_projects(&projects, Filter::Category(ProjectCategory::Motion));
        assert!(motion.is_empty());
    }

    #[test]
    fn reveal_delays_are_staggered() {
        assert_eq!(reveal_delay(0), Duration::ZERO);
        assert_eq!(reveal_delay(1), Duration::from_millis(ITEM_STAGGER_MS));
        assert_eq!(reveal_delay(4), Duration::from_millis(4 * ITEM_STAGGER_MS));
    }

    #[test]
    fn pills_start_with_all() {
        let pills = Filter::pills_for(&[ProjectCategory::Branding, ProjectCategory::Social]);
        assert_eq!(pills[0], Filter::All);
        assert_eq!(pills.len(), 3);
        assert_eq!(pills[1].label(), "Branding");
        assert_eq!(pills[2].label(), "Social Media");
    }
}
