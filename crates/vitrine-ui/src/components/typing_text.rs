//! Typing-text effect.
//!
//! Drives a [`TypingAnimator`] in a task scoped to the component: one
//! step, update the display, sleep for the step's delay, repeat forever.
//! Dropping the component drops the task.

use dioxus::prelude::*;
use vitrine_core::TypingAnimator;

/// Properties for the TypingText component
#[derive(Clone, PartialEq, Props)]
pub struct TypingTextProps {
    /// Phrases to cycle through
    pub phrases: Vec<String>,
}

/// Cyclic character-reveal text with a blinking caret
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TypingText { phrases: vitrine_core::typing::default_phrases() }
/// }
/// ```
#[component]
pub fn TypingText(props: TypingTextProps) -> Element {
    let mut display = use_signal(String::new);
    let phrases = props.phrases.clone();

    use_effect(move || {
        let phrases = phrases.clone();
        spawn(async move {
            let mut animator = TypingAnimator::new(phrases);
            loop {
                let delay = animator.tick();
                display.set(animator.current().to_string());
                tokio::time::sleep(delay).await;
            }
        });
    });

    rsx! {
        span { class: "typing-text",
            "{display}"
            span { class: "typing-caret", "aria-hidden": "true" }
        }
    }
}
