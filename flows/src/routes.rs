//! Paths of the screens and the static pages they link to.

use url::form_urlencoded;

pub const SIGN_IN: &str = "/";
pub const RESET_REQUEST: &str = "/password-reset-request";
pub const RESET_CONFIRM: &str = "/password-reset-confirm";
/// Linked from the footer; no page is served.
pub const TERMS: &str = "/terms";
/// Linked from the footer; no page is served.
pub const PRIVACY: &str = "/privacy";

/// Query parameter carrying the reset token.
pub const TOKEN_PARAM: &str = "token";

/// Pull the `token` parameter out of a raw query string (with or without the
/// leading `?`). The first occurrence wins.
#[must_use]
pub fn token_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TOKEN_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
