//! Scroll math for the navigation bar and ancillary effects.
//!
//! Pure functions over the page's vertical scroll offset. The UI measures
//! section positions once after mount and feeds the live offset in on
//! every scroll event; everything else derives from these.

use std::time::Duration;

/// Offset past which the navbar switches to its "scrolled" style.
pub const NAVBAR_SCROLLED_Y: f64 = 50.0;
/// Offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_SHOW_Y: f64 = 500.0;
/// Look-ahead subtracted from a section top when picking the active one.
pub const SECTION_PROBE_OFFSET: f64 = 200.0;
/// Height of the fixed navbar, subtracted from anchor scroll targets.
pub const NAVBAR_HEIGHT: f64 = 80.0;
/// Background layers move at this fraction of the scroll delta.
pub const PARALLAX_RATE: f64 = 0.5;
/// Per-bar stagger for the skills reveal.
pub const SKILL_STAGGER_MS: u64 = 200;
/// Fraction of a section that must be on screen to trigger its reveal.
pub const REVEAL_THRESHOLD: f64 = 0.5;

/// Measured position of one page section, in document order.
#[derive(Clone, PartialEq, Debug)]
pub struct SectionPos {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Navbar gains its solid/blurred style once scrolled past 50px.
pub fn navbar_scrolled(y: f64) -> bool {
    y > NAVBAR_SCROLLED_Y
}

/// Scroll-to-top button is shown once scrolled past 500px.
pub fn show_scroll_top(y: f64) -> bool {
    y > SCROLL_TOP_SHOW_Y
}

/// Vertical translation of parallax background layers.
pub fn parallax_offset(y: f64) -> f64 {
    -(y * PARALLAX_RATE)
}

/// Scroll target for an in-page anchor: the section top minus the fixed
/// navbar height, clamped at the document start.
pub fn anchor_target(section_top: f64) -> f64 {
    (section_top - NAVBAR_HEIGHT).max(0.0)
}

/// The active section: the last one (in document order) whose top, minus
/// the probe offset, is at or above the current position. `None` when the
/// page is above every section.
pub fn active_section(sections: &[SectionPos], y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| s.top - SECTION_PROBE_OFFSET <= y)
        .next_back()
        .map(|s| s.id.as_str())
}

/// Fraction of a section currently inside the viewport, in `0.0..=1.0`.
pub fn fraction_visible(section: &SectionPos, y: f64, viewport: f64) -> f64 {
    if section.height <= 0.0 {
        return 0.0;
    }
    let visible =
        (section.top + section.height).min(y + viewport) - section.top.max(y);
    (visible / section.height).clamp(0.0, 1.0)
}

/// Whether a section has crossed the reveal threshold (half on screen).
pub fn section_revealed(section: &SectionPos, y: f64, viewport: f64) -> bool {
    fraction_visible(section, y, viewport) >= REVEAL_THRESHOLD
}

/// Reveal delay for the nth skill bar.
pub fn skill_reveal_delay(index: usize) -> Duration {
    Duration::from_millis(index as u64 * SKILL_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionPos> {
        ["home", "about", "skills", "portfolio", "contact"]
            .iter()
            .enumerate()
            .map(|(i, id)| SectionPos {
                id: id.to_string(),
                top: i as f64 * 1000.0,
                height: 1000.0,
            })
            .collect()
    }

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
    }

    #[test]
    fn scroll_top_threshold() {
        assert!(!show_scroll_top(500.0));
        assert!(show_scroll_top(501.0));
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_offset(0.0), -0.0);
        assert_eq!(parallax_offset(200.0), -100.0);
    }

    #[test]
    fn anchor_target_accounts_for_navbar() {
        assert_eq!(anchor_target(1000.0), 920.0);
        // Targets near the top never go negative.
        assert_eq!(anchor_target(30.0), 0.0);
    }

    #[test]
    fn active_section_is_last_reached() {
        let secs = sections();
        assert_eq!(active_section(&secs, 0.0), Some("home"));
        // 200px look-ahead: about (top 1000) activates at y=800.
        assert_eq!(active_section(&secs, 799.0), Some("home"));
        assert_eq!(active_section(&secs, 800.0), Some("about"));
        assert_eq!(active_section(&secs, 4500.0), Some("contact"));
    }

    #[test]
    fn no_active_section_above_the_first() {
        let secs = vec![SectionPos {
            id: "about".to_string(),
            top: 1000.0,
            height: 500.0,
        }];
        assert_eq!(active_section(&secs, 0.0), None);
    }

    #[test]
    fn fraction_visible_clamps() {
        let sec = SectionPos {
            id: "skills".to_string(),
            top: 1000.0,
            height: 600.0,
        };
        // Entirely below the viewport.
        assert_eq!(fraction_visible(&sec, 0.0, 800.0), 0.0);
        // Half visible: viewport bottom at 1300 of 1000..1600.
        assert!((fraction_visible(&sec, 500.0, 800.0) - 0.5).abs() < 1e-9);
        // Fully visible.
        assert_eq!(fraction_visible(&sec, 1000.0, 800.0), 1.0);
        assert!(section_revealed(&sec, 500.0, 800.0));
        assert!(!section_revealed(&sec, 400.0, 800.0));
    }

    #[test]
    fn zero_height_section_never_reveals() {
        let sec = SectionPos {
            id: "x".to_string(),
            top: 0.0,
            height: 0.0,
        };
        assert_eq!(fraction_visible(&sec, 0.0, 800.0), 0.0);
        assert!(!section_revealed(&sec, 0.0, 800.0));
    }

    #[test]
    fn skill_delays_stagger_by_200ms() {
        assert_eq!(skill_reveal_delay(0), Duration::ZERO);
        assert_eq!(skill_reveal_delay(3), Duration::from_millis(600));
    }
}
