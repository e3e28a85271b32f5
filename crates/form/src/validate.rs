//! Email and password validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest password accepted by either form.
pub const MIN_PASSWORD_LEN: usize = 6;

// Something, an @, something, a dot, something. Deliberately loose;
// the only authority on address validity is a delivery attempt, and
// this system never makes one.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Whether the string looks like an email address.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether the password meets the minimum length.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}
