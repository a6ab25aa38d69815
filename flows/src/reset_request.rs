//! Reset-request screen controller.
//!
//! Every submission that passes the email check ends in the same generic
//! success message, whatever the backend says. The screen must not reveal
//! whether an address is registered.

use crate::error::{FlowError, GateError};
use crate::form::{Field, Form, FormModel};
use crate::notice::{Banner, Notice};
use crate::service::AuthService;
use crate::status::SubmitStatus;
use crate::validate;

#[cfg(test)]
#[path = "reset_request_test.rs"]
mod reset_request_test;

pub const SENT_TITLE: &str = "Request Sent";
pub const SENT_MESSAGE: &str = "If an account with that email address exists, a password reset link has been sent. Please check your inbox (and spam folder).";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetRequestForm {
    pub email: String,
}

impl Form for ResetRequestForm {
    const FIELDS: &'static [Field] = &[Field::Email];

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password | Field::ConfirmPassword => "",
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        if field == Field::Email {
            self.email = value;
        }
    }

    fn check(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Email => validate::check_email(&self.email),
            Field::Password | Field::ConfirmPassword => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetRequestController {
    form: FormModel<ResetRequestForm>,
    status: SubmitStatus,
    sent: bool,
}

impl ResetRequestController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &FormModel<ResetRequestForm> {
        &self.form
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { "Sending..." } else { "Send Reset Link" }
    }

    /// The "request sent" banner, once a submission has completed.
    #[must_use]
    pub fn banner(&self) -> Option<Banner> {
        self.sent.then(|| Banner::success(SENT_TITLE, SENT_MESSAGE))
    }

    pub fn input(&mut self, field: Field, value: String) {
        self.form.input(field, value);
    }

    pub fn blur(&mut self, field: Field) {
        self.form.blur(field);
    }

    pub fn dismiss_banner(&mut self) {
        self.sent = false;
    }

    /// Run the email gate and enter `Submitting`, clearing any prior banner.
    ///
    /// # Errors
    ///
    /// [`GateError::InFlight`] while pending, [`GateError::Invalid`] on a bad
    /// address.
    pub fn begin_submit(&mut self) -> Result<ResetRequestForm, GateError> {
        if self.is_submitting() {
            return Err(GateError::InFlight);
        }
        let values = self.form.gate().map_err(GateError::Invalid)?;
        self.sent = false;
        self.status = SubmitStatus::Submitting;
        Ok(values)
    }

    /// Record completion. Backend errors are logged and otherwise ignored.
    pub fn finish(&mut self, outcome: Result<(), FlowError>) -> Notice {
        if let Err(err) = outcome {
            tracing::warn!(error = %err, "reset request failed; reporting generic success");
        }
        self.status = SubmitStatus::Succeeded;
        self.sent = true;
        self.form.reset();
        Notice::success(SENT_TITLE).with_description(SENT_MESSAGE)
    }

    /// # Errors
    ///
    /// Propagates [`begin_submit`](Self::begin_submit) refusals.
    pub async fn submit<S: AuthService>(&mut self, service: &S) -> Result<Notice, GateError> {
        let values = self.begin_submit()?;
        let outcome = service.request_reset(&values.email).await;
        Ok(self.finish(outcome))
    }
}
