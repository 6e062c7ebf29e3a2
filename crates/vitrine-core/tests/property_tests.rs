//! Property-based tests for the pure widget logic.

use proptest::prelude::*;

use vitrine_core::notify::{ToastKind, ToastQueue};
use vitrine_core::typing::{DELETE_MS, HOLD_MS, NEXT_PHRASE_MS, TYPE_MS};
use vitrine_core::validate::{validate_field, FieldError, FieldKind};
use vitrine_core::TypingAnimator;

proptest! {
    #[test]
    fn validators_never_panic(value in ".*", required in any::<bool>()) {
        let _ = validate_field(&value, required, FieldKind::Text);
        let _ = validate_field(&value, required, FieldKind::Email);
        let _ = validate_field(&value, required, FieldKind::Tel);
    }

    #[test]
    fn wellformed_emails_pass(
        local in "[a-z0-9]{1,12}",
        host in "[a-z0-9]{1,12}",
        tld in "[a-z]{2,4}",
    ) {
        let email = format!("{local}@{host}.{tld}");
        prop_assert_eq!(validate_field(&email, true, FieldKind::Email), Ok(()));
    }

    #[test]
    fn emails_without_at_fail(value in "[a-z0-9\\.]{1,20}") {
        prop_assert_eq!(
            validate_field(&value, false, FieldKind::Email),
            Err(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn long_digit_strings_are_valid_phones(digits in "[0-9]{10,20}", plus in any::<bool>()) {
        let value = if plus { format!("+{digits}") } else { digits };
        prop_assert_eq!(validate_field(&value, true, FieldKind::Tel), Ok(()));
    }

    #[test]
    fn phones_with_letters_fail(
        prefix in "[0-9]{0,5}",
        letter in "[a-z]",
        suffix in "[0-9]{0,10}",
    ) {
        let value = format!("{prefix}{letter}{suffix}");
        prop_assert_eq!(
            validate_field(&value, false, FieldKind::Tel),
            Err(FieldError::InvalidPhone)
        );
    }

    #[test]
    fn typing_display_is_always_a_phrase_prefix(
        phrases in prop::collection::vec("[a-zA-Z \u{00e9}\u{0634}]{0,12}", 1..4),
        steps in 1usize..200,
    ) {
        let mut anim = TypingAnimator::new(phrases.clone());
        for _ in 0..steps {
            let delay = anim.tick();
            let shown = anim.current().to_string();
            prop_assert!(
                phrases.iter().any(|p| p.starts_with(shown.as_str())),
                "{shown:?} is not a prefix of any phrase"
            );
            let ms = delay.as_millis() as u64;
            prop_assert!(matches!(ms, TYPE_MS | DELETE_MS | HOLD_MS | NEXT_PHRASE_MS));
        }
    }

    #[test]
    fn toast_queue_never_exceeds_cap(
        cap in 1usize..5,
        ops in prop::collection::vec(any::<Option<u8>>(), 0..40),
    ) {
        let mut queue = ToastQueue::new(cap);
        let mut ids = Vec::new();
        for op in ops {
            match op {
                // Push a new toast.
                None => ids.push(queue.push("msg", ToastKind::Info)),
                // Dismiss one of the known ids (possibly already gone).
                Some(n) => {
                    if !ids.is_empty() {
                        let id = ids[n as usize % ids.len()];
                        queue.dismiss(id);
                    }
                }
            }
            prop_assert!(queue.visible().len() <= cap);
        }
    }
}
