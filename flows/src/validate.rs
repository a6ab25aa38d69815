//! Pure field predicates and their user-facing messages.

use std::sync::LazyLock;

use regex::Regex;

pub const INVALID_EMAIL: &str = "Invalid email address.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

/// Minimum length of a new password, in characters.
pub const MIN_NEW_PASSWORD_LEN: usize = 8;

// ASCII classes only: case-insensitive Unicode matching would let
// characters like U+212A (Kelvin sign) fold onto `k`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap_or_else(|e| panic!("email pattern must compile: {e}"))
});

/// Whether `value` looks like an email address.
///
/// Shape check only: no trimming, no DNS, no normalization. A leading dot or
/// any `..` run is rejected on top of the pattern.
#[must_use]
pub fn is_email_shape(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

#[must_use]
pub fn check_email(value: &str) -> Option<&'static str> {
    (!is_email_shape(value)).then_some(INVALID_EMAIL)
}

#[must_use]
pub fn check_required_password(value: &str) -> Option<&'static str> {
    value.is_empty().then_some(PASSWORD_REQUIRED)
}

#[must_use]
pub fn check_new_password(value: &str) -> Option<&'static str> {
    (value.chars().count() < MIN_NEW_PASSWORD_LEN).then_some(PASSWORD_TOO_SHORT)
}

#[must_use]
pub fn check_confirmation(password: &str, confirm: &str) -> Option<&'static str> {
    (password != confirm).then_some(PASSWORDS_DO_NOT_MATCH)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;
