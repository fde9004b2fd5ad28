//! Field validators used when an inline edit is committed.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// `\d` would accept any Unicode digit; the phone rule is ASCII only.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

/// Reason a commit was rejected. The message is shown verbatim above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid phone number")]
    InvalidPhone,
}

/// `local@domain.tld` shape: no whitespace and a single `@`.
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Exactly ten digits, no separators.
pub fn validate_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_email() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("Sincere@april.biz"));
        assert!(validate_email("first.last@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email(""));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a@.com"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b@c.com"));
        assert!(!validate_email("a@b.com "));
        assert!(!validate_email("a@b."));
    }

    #[test]
    fn accepts_ten_digit_phone() {
        assert!(validate_phone("1234567890"));
        assert!(validate_phone("0000000000"));
    }

    #[test]
    fn rejects_other_phone_shapes() {
        assert!(!validate_phone("12345"));
        assert!(!validate_phone("12345678901"));
        assert!(!validate_phone("123-456-7890"));
        assert!(!validate_phone(" 1234567890"));
        assert!(!validate_phone("1-770-736-8031 x56442"));
        assert!(!validate_phone("١٢٣٤٥٦٧٨٩٠"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn messages_match_banner_text() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email address"
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Invalid phone number"
        );
    }
}
