//! Shared field validation rules for signup and address forms.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

// Philippine mobile number, after stripping spaces and dashes: 09XXXXXXXXX or +639XXXXXXXXX.
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+639|09)\d{9}$").expect("Invalid regex"));

// Philippine postal code: exactly 4 digits.
static POSTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("Invalid regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 6
}

/// Drop the spacing and dashes shoppers type into mobile fields.
pub fn normalize_mobile(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Expects an already-normalized number (see [`normalize_mobile`]).
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

pub fn is_valid_postal_code(code: &str) -> bool {
    POSTAL_RE.is_match(code)
}
