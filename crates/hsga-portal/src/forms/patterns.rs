use regex::Regex;
use std::sync::LazyLock;

// ASCII classes on purpose: `\d` in this engine also matches non-Latin digits.
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s.]+$").expect("invalid name pattern"));
static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s\-/]+$").expect("invalid class pattern"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("invalid phone pattern"));
static IDENTITY_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("invalid identity pattern"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));

/// Letters, whitespace and dots only.
pub fn is_name(value: &str) -> bool {
    NAME.is_match(value)
}

/// Letters, digits, whitespace, hyphens and slashes ("10-A", "Inter 1st/MPC").
pub fn is_class_name(value: &str) -> bool {
    CLASS_NAME.is_match(value)
}

/// Ten digit mobile number starting with 6, 7, 8 or 9.
pub fn is_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

/// Twelve digit national identity (Aadhaar) number.
pub fn is_identity_number(value: &str) -> bool {
    IDENTITY_NUMBER.is_match(value)
}

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Keystroke filter for numeric-only inputs; the empty string is allowed so fields can be cleared.
pub fn is_digits(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_digit())
}
