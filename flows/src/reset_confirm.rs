//! Reset-confirmation screen controller.
//!
//! The screen is driven by the token in its URL. [`ResetConfirmController::mount`]
//! checks it once; the form is only reachable when the token is valid, and
//! submission is refused outright otherwise.
//!
//! Flow: `Idle -> Submitting -> {Succeeded, Failed}`. On success the screen
//! navigates to sign-in ([`ResetConfirmController::redirect`]).

use std::fmt;

use crate::error::{FlowError, GateError};
use crate::form::{Field, Form, FormModel};
use crate::notice::{Banner, Notice};
use crate::routes;
use crate::service::AuthService;
use crate::status::SubmitStatus;
use crate::token::TokenState;
use crate::validate;

#[cfg(test)]
#[path = "reset_confirm_test.rs"]
mod reset_confirm_test;

pub const SUCCESS_TOAST: &str = "Password successfully reset. Please log in with your new password.";
pub const ERROR_BANNER_TITLE: &str = "Error";
pub const INVALID_LINK_TITLE: &str = "Invalid Link";
pub const INVALID_LINK_MESSAGE: &str = "This password reset link is invalid or has expired. Please";
pub const INVALID_LINK_ACTION: &str = "request a new one";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct ResetConfirmForm {
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for ResetConfirmForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetConfirmForm")
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

impl Form for ResetConfirmForm {
    const FIELDS: &'static [Field] = &[Field::Password, Field::ConfirmPassword];

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Email => "",
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::Email => {}
        }
    }

    fn check(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Password => validate::check_new_password(&self.password),
            Field::ConfirmPassword => validate::check_confirmation(&self.password, &self.confirm_password),
            Field::Email => None,
        }
    }
}

/// Everything the service needs for one confirmation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetAttempt {
    pub token: String,
    pub form: ResetConfirmForm,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetConfirmController {
    token: TokenState,
    form: FormModel<ResetConfirmForm>,
    status: SubmitStatus,
    error: Option<String>,
}

impl ResetConfirmController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the URL token. Runs once; later calls are ignored and return
    /// `None`. Returns the toast to show when the token is unusable.
    pub fn mount(&mut self, raw_token: Option<&str>, prefix: &str) -> Option<Notice> {
        if self.token != TokenState::Unchecked {
            return None;
        }
        self.token = TokenState::check(raw_token, prefix);
        match &self.token {
            TokenState::Invalid(problem) => {
                tracing::info!(?problem, "reset link refused");
                self.error = Some(problem.message().to_owned());
                Some(Notice::error(problem.toast()))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn token(&self) -> &TokenState {
        &self.token
    }

    /// `None` before mount, then whether the token was accepted.
    #[must_use]
    pub fn token_valid(&self) -> Option<bool> {
        self.token.as_flag()
    }

    #[must_use]
    pub fn form(&self) -> &FormModel<ResetConfirmForm> {
        &self.form
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.is_submitting() || self.token.is_invalid()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { "Setting Password..." } else { "Set New Password" }
    }

    /// Card subtitle.
    #[must_use]
    pub fn description(&self) -> &'static str {
        if self.token.is_invalid() {
            "There's an issue with your reset link."
        } else {
            "Enter your new password below."
        }
    }

    #[must_use]
    pub fn banner(&self) -> Option<Banner> {
        if let Some(message) = &self.error {
            return Some(Banner::error(ERROR_BANNER_TITLE, message.clone()));
        }
        self.token.is_invalid().then(|| {
            Banner::error(INVALID_LINK_TITLE, INVALID_LINK_MESSAGE).with_link(INVALID_LINK_ACTION, routes::RESET_REQUEST)
        })
    }

    /// Where to go after a successful reset.
    #[must_use]
    pub fn redirect(&self) -> Option<&'static str> {
        (self.status == SubmitStatus::Succeeded).then_some(routes::SIGN_IN)
    }

    pub fn input(&mut self, field: Field, value: String) {
        self.form.input(field, value);
    }

    pub fn blur(&mut self, field: Field) {
        self.form.blur(field);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Token guard, then the field gate, then `Submitting`.
    ///
    /// # Errors
    ///
    /// [`GateError::TokenNotValid`] when the token is not valid (the error
    /// banner is set), [`GateError::InFlight`] while pending, or
    /// [`GateError::Invalid`] when a field fails.
    pub fn begin_submit(&mut self) -> Result<ResetAttempt, GateError> {
        let Some(token) = self.token.token().map(str::to_owned) else {
            self.error = Some(FlowError::TokenRejected.to_string());
            return Err(GateError::TokenNotValid);
        };
        if self.is_submitting() {
            return Err(GateError::InFlight);
        }
        let form = self.form.gate().map_err(GateError::Invalid)?;
        self.error = None;
        self.status = SubmitStatus::Submitting;
        Ok(ResetAttempt { token, form })
    }

    /// Apply the service outcome and return the toast to show.
    pub fn finish(&mut self, outcome: Result<(), FlowError>) -> Notice {
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Succeeded;
                self.error = None;
                Notice::success(SUCCESS_TOAST)
            }
            Err(err) => {
                self.status = SubmitStatus::Failed;
                self.error = Some(err.to_string());
                Notice::error(err.toast_title())
            }
        }
    }

    /// # Errors
    ///
    /// Propagates [`begin_submit`](Self::begin_submit) refusals.
    pub async fn submit<S: AuthService>(&mut self, service: &S) -> Result<Notice, GateError> {
        let attempt = self.begin_submit()?;
        let outcome = service.confirm_reset(&attempt.token, &attempt.form.password).await;
        Ok(self.finish(outcome))
    }
}
