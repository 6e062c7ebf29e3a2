//! Form field validation.
//!
//! Pure predicates over a field's current value and constraints. The rules
//! run in order and the first failing rule wins; an empty optional field
//! always passes.

use std::fmt;

/// Declared type of a form field, deciding which format rule applies.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FieldKind {
    /// Free text, no format rule
    #[default]
    Text,
    /// Must look like `local@domain.tld` when non-empty
    Email,
    /// Must look like a phone number when non-empty
    Tel,
}

/// A single validation failure for one field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldError {
    /// Required field left empty (or whitespace only)
    Required,
    /// Value does not look like an email address
    InvalidEmail,
    /// Value does not look like a phone number
    InvalidPhone,
}

impl FieldError {
    /// User-facing inline message shown under the field.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "This field is required",
            FieldError::InvalidEmail => "Please enter a valid email address",
            FieldError::InvalidPhone => "Please enter a valid phone number",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validate one field value against its constraints.
///
/// Rules, in order, first failure wins:
/// 1. `required` and trimmed value empty -> [`FieldError::Required`]
/// 2. [`FieldKind::Email`] and non-empty value not shaped like
///    `local@domain.tld` -> [`FieldError::InvalidEmail`]
/// 3. [`FieldKind::Tel`] and non-empty value not an optional `+` followed
///    by at least ten digits/spaces/dashes/parentheses ->
///    [`FieldError::InvalidPhone`]
pub fn validate_field(value: &str, required: bool, kind: FieldKind) -> Result<(), FieldError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return if required { Err(FieldError::Required) } else { Ok(()) };
    }

    match kind {
        FieldKind::Text => Ok(()),
        FieldKind::Email if !is_valid_email(trimmed) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(trimmed) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot in the domain
/// with non-empty text on both sides.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Optional leading `+`, then at least ten characters, each a digit, space,
/// dash, or parenthesis.
fn is_valid_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let mut count = 0usize;
    for c in rest.chars() {
        if c.is_ascii_digit() || c.is_ascii_whitespace() || matches!(c, '-' | '(' | ')') {
            count += 1;
        } else {
            return false;
        }
    }
    count >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_and_whitespace() {
        assert_eq!(
            validate_field("", true, FieldKind::Text),
            Err(FieldError::Required)
        );
        assert_eq!(
            validate_field("   \t", true, FieldKind::Email),
            Err(FieldError::Required)
        );
        assert_eq!(validate_field("hi", true, FieldKind::Text), Ok(()));
    }

    #[test]
    fn optional_empty_passes_any_kind() {
        assert_eq!(validate_field("", false, FieldKind::Text), Ok(()));
        assert_eq!(validate_field("", false, FieldKind::Email), Ok(()));
        assert_eq!(validate_field("  ", false, FieldKind::Tel), Ok(()));
    }

    #[test]
    fn email_accepts_simple_addresses() {
        assert_eq!(validate_field("a@b.co", false, FieldKind::Email), Ok(()));
        assert_eq!(
            validate_field("name.last@mail.example.org", true, FieldKind::Email),
            Ok(())
        );
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in ["a@b", "a b@c.com", "@b.co", "a@", "a@@b.co", "a@b.", "a@.co", "plain"] {
            assert_eq!(
                validate_field(bad, false, FieldKind::Email),
                Err(FieldError::InvalidEmail),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn required_wins_over_format() {
        // An empty required email field reports Required, not InvalidEmail.
        assert_eq!(
            validate_field("", true, FieldKind::Email),
            Err(FieldError::Required)
        );
    }

    #[test]
    fn phone_accepts_formatted_numbers() {
        assert_eq!(
            validate_field("+1 555-123-4567", false, FieldKind::Tel),
            Ok(())
        );
        assert_eq!(
            validate_field("(020) 7946 0958", false, FieldKind::Tel),
            Ok(())
        );
        assert_eq!(validate_field("0123456789", false, FieldKind::Tel), Ok(()));
    }

    #[test]
    fn phone_rejects_letters_and_short_numbers() {
        assert_eq!(
            validate_field("abc", false, FieldKind::Tel),
            Err(FieldError::InvalidPhone)
        );
        assert_eq!(
            validate_field("12345", false, FieldKind::Tel),
            Err(FieldError::InvalidPhone)
        );
        // Nine characters is one short of the minimum.
        assert_eq!(
            validate_field("123456789", false, FieldKind::Tel),
            Err(FieldError::InvalidPhone)
        );
    }

    #[test]
    fn phone_plus_only_counts_following_characters() {
        // "+123456789" has nine characters after the plus sign.
        assert_eq!(
            validate_field("+123456789", false, FieldKind::Tel),
            Err(FieldError::InvalidPhone)
        );
        assert_eq!(validate_field("+1234567890", false, FieldKind::Tel), Ok(()));
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(FieldError::Required.message(), "This field is required");
        assert_eq!(
            FieldError::InvalidEmail.message(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::InvalidPhone.message(),
            "Please enter a valid phone number"
        );
    }
}
