//! Typing-text animator.
//!
//! Deterministic cyclic character-reveal over a fixed phrase list: reveal
//! one character at a time, hold the full phrase, delete it faster, pause,
//! then move to the next phrase modulo the list length. The cycle never
//! terminates; the driving task is simply dropped with its component.

use std::time::Duration;

/// Delay per revealed character.
pub const TYPE_MS: u64 = 100;
/// Delay per deleted character.
pub const DELETE_MS: u64 = 50;
/// Hold at the fully revealed phrase before deleting.
pub const HOLD_MS: u64 = 2000;
/// Pause between finishing a phrase and starting the next.
pub const NEXT_PHRASE_MS: u64 = 500;

/// State machine for the typing effect.
///
/// `tick` advances one step (reveal or delete a single character) and
/// returns the delay to wait before the next step; `current` is the text
/// to display.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    deleting: bool,
}

impl TypingAnimator {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            deleting: false,
        }
    }

    /// The currently displayed prefix of the active phrase.
    pub fn current(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((idx, _)) => &phrase[..idx],
            None => phrase,
        }
    }

    /// Advance one step and return the delay before the next one.
    ///
    /// With an empty phrase list the animator is inert: the display stays
    /// empty and the hold delay is returned.
    pub fn tick(&mut self) -> Duration {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return Duration::from_millis(HOLD_MS);
        };
        let len = phrase.chars().count();

        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown = (self.shown + 1).min(len);
        }

        if !self.deleting && self.shown == len {
            self.deleting = true;
            Duration::from_millis(HOLD_MS)
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            Duration::from_millis(NEXT_PHRASE_MS)
        } else if self.deleting {
            Duration::from_millis(DELETE_MS)
        } else {
            Duration::from_millis(TYPE_MS)
        }
    }
}

/// Phrases cycled in the hero section.
pub fn default_phrases() -> Vec<String> {
    vec![
        "Professional Graphic Designer".to_string(),
        "Motion Graphics Specialist".to_string(),
        "Brand Identity Expert".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(phrases: &[&str]) -> TypingAnimator {
        TypingAnimator::new(phrases.iter().map(|s| s.to_string()).collect())
    }

    /// Drive the animator collecting (display, delay_ms) pairs.
    fn run(anim: &mut TypingAnimator, steps: usize) -> Vec<(String, u64)> {
        (0..steps)
            .map(|_| {
                let delay = anim.tick();
                (anim.current().to_string(), delay.as_millis() as u64)
            })
            .collect()
    }

    #[test]
    fn cycles_through_two_phrases() {
        let mut anim = animator(&["A", "BB"]);
        let trace = run(&mut anim, 9);
        let expected = vec![
            ("A".to_string(), HOLD_MS),        // reveal "A", hold
            ("".to_string(), NEXT_PHRASE_MS),  // delete, advance to "BB"
            ("B".to_string(), TYPE_MS),        // reveal "B"
            ("BB".to_string(), HOLD_MS),       // reveal "BB", hold
            ("B".to_string(), DELETE_MS),      // delete one
            ("".to_string(), NEXT_PHRASE_MS),  // delete, wrap to "A"
            ("A".to_string(), HOLD_MS),        // cycle repeats
            ("".to_string(), NEXT_PHRASE_MS),
            ("B".to_string(), TYPE_MS),
        ];
        assert_eq!(trace, expected);
    }

    #[test]
    fn reveals_character_by_character() {
        let mut anim = animator(&["abc"]);
        let trace = run(&mut anim, 3);
        assert_eq!(
            trace,
            vec![
                ("a".to_string(), TYPE_MS),
                ("ab".to_string(), TYPE_MS),
                ("abc".to_string(), HOLD_MS),
            ]
        );
    }

    #[test]
    fn deletes_faster_than_it_types() {
        let mut anim = animator(&["abc"]);
        run(&mut anim, 3); // fully revealed, now deleting
        let trace = run(&mut anim, 2);
        assert_eq!(
            trace,
            vec![("ab".to_string(), DELETE_MS), ("a".to_string(), DELETE_MS)]
        );
    }

    #[test]
    fn handles_multibyte_phrases() {
        let mut anim = animator(&["héé"]);
        let trace = run(&mut anim, 3);
        assert_eq!(trace[0].0, "h");
        assert_eq!(trace[1].0, "hé");
        assert_eq!(trace[2].0, "héé");
    }

    #[test]
    fn empty_list_is_inert() {
        let mut anim = animator(&[]);
        assert_eq!(anim.current(), "");
        assert_eq!(anim.tick(), Duration::from_millis(HOLD_MS));
        assert_eq!(anim.current(), "");
    }

    #[test]
    fn empty_phrase_advances_without_stalling() {
        let mut anim = animator(&["", "x"]);
        // Empty phrase: immediately "fully revealed", then immediately
        // "fully deleted", then on to "x".
        assert_eq!(anim.tick(), Duration::from_millis(HOLD_MS));
        assert_eq!(anim.tick(), Duration::from_millis(NEXT_PHRASE_MS));
        anim.tick();
        assert_eq!(anim.current(), "x");
    }

    #[test]
    fn single_phrase_wraps_to_itself() {
        let mut anim = animator(&["ab"]);
        run(&mut anim, 5); // a, ab(hold), a, ""(gap)
        assert_eq!(anim.current(), "a");
    }

    #[test]
    fn default_phrases_are_nonempty() {
        let phrases = default_phrases();
        assert_eq!(phrases.len(), 3);
        assert!(phrases.iter().all(|p| !p.is_empty()));
    }
}
