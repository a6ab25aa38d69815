//! Error types for submissions.
//!
//! `FlowError` is what an [`AuthService`](crate::service::AuthService) call
//! can come back with; its `Display` text is shown to the user verbatim.
//! `GateError` is why a controller refused to start a submission at all.

use crate::form::FieldErrors;
use crate::notice::Notice;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
    #[error("Failed to reset password. The link might have expired or an unknown error occurred. Please try again.")]
    ResetFailed,
    #[error("Cannot reset password due to an invalid or missing token.")]
    TokenRejected,
}

impl FlowError {
    /// Short toast title paired with the full message.
    #[must_use]
    pub fn toast_title(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Login Failed",
            Self::ResetFailed => "Failed to reset password. Please try again.",
            Self::TokenRejected => "Cannot reset password due to an invalid or missing token.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("reset token is not valid")]
    TokenNotValid,
}

impl GateError {
    /// Toast for refusals the user must be told about. Field failures are
    /// already shown inline and in-flight refusals are silent.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::TokenNotValid => Some(Notice::error(FlowError::TokenRejected.toast_title())),
            Self::Invalid(_) | Self::InFlight => None,
        }
    }
}
