//! Reset-link token check.
//!
//! Placeholder rule: a token is genuine when it carries the configured prefix.
//! Nothing is verified against a server.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

/// Why a token was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenProblem {
    /// No `token` parameter, or an empty one.
    Missing,
    /// A token was present without the expected prefix.
    Rejected,
}

impl TokenProblem {
    /// Banner text shown on the confirmation screen.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Missing => "No password reset token found. Please use the link from your email.",
            Self::Rejected => "Invalid or expired password reset link. Please request a new one.",
        }
    }

    /// Toast title emitted once when the screen mounts.
    #[must_use]
    pub fn toast(self) -> &'static str {
        match self {
            Self::Missing => "No password reset token found.",
            Self::Rejected => "Invalid or expired password reset link.",
        }
    }
}

/// Tri-state validity of the reset token. Set once on mount, never re-checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TokenState {
    #[default]
    Unchecked,
    Valid(String),
    Invalid(TokenProblem),
}

impl TokenState {
    #[must_use]
    pub fn check(raw: Option<&str>, prefix: &str) -> Self {
        match raw {
            None | Some("") => Self::Invalid(TokenProblem::Missing),
            Some(token) if token.starts_with(prefix) => Self::Valid(token.to_owned()),
            Some(_) => Self::Invalid(TokenProblem::Rejected),
        }
    }

    /// `None` until checked, then whether the token was accepted.
    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Unchecked => None,
            Self::Valid(_) => Some(true),
            Self::Invalid(_) => Some(false),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Valid(token) => Some(token),
            _ => None,
        }
    }
}
