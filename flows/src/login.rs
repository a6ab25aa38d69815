//! Sign-in screen controller.
//!
//! Flow: `Idle -> Submitting -> {Succeeded, Failed}`, repeatable. The error
//! banner is cleared at the start of every attempt. A successful sign-in has
//! nowhere to go, so the screen stays put and the form is reset.

use std::fmt;

use crate::error::{FlowError, GateError};
use crate::form::{Field, Form, FormModel};
use crate::notice::{Banner, Notice};
use crate::service::AuthService;
use crate::status::SubmitStatus;
use crate::validate;

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

pub const SUCCESS_TITLE: &str = "Login Successful!";
pub const SUCCESS_DESCRIPTION: &str = "You will be redirected shortly.";
pub const ERROR_BANNER_TITLE: &str = "Login Error";

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Form for LoginForm {
    const FIELDS: &'static [Field] = &[Field::Email, Field::Password];

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => "",
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => {}
        }
    }

    fn check(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Email => validate::check_email(&self.email),
            Field::Password => validate::check_required_password(&self.password),
            Field::ConfirmPassword => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginController {
    form: FormModel<LoginForm>,
    status: SubmitStatus,
    error: Option<String>,
}

impl LoginController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &FormModel<LoginForm> {
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

    /// Label of the submit button for the current status.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { "Signing In..." } else { "Sign In" }
    }

    #[must_use]
    pub fn banner(&self) -> Option<Banner> {
        self.error.as_ref().map(|message| Banner::error(ERROR_BANNER_TITLE, message.clone()))
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

    /// Run the validation gate and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// [`GateError::InFlight`] while a previous attempt is pending, or
    /// [`GateError::Invalid`] when a field fails; the status is left alone.
    pub fn begin_submit(&mut self) -> Result<LoginForm, GateError> {
        if self.is_submitting() {
            return Err(GateError::InFlight);
        }
        let values = self.form.gate().map_err(GateError::Invalid)?;
        self.error = None;
        self.status = SubmitStatus::Submitting;
        Ok(values)
    }

    /// Apply the service outcome and return the toast to show.
    pub fn finish(&mut self, outcome: Result<(), FlowError>) -> Notice {
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Succeeded;
                self.form.reset();
                Notice::success(SUCCESS_TITLE).with_description(SUCCESS_DESCRIPTION)
            }
            Err(err) => {
                self.status = SubmitStatus::Failed;
                let message = err.to_string();
                self.error = Some(message.clone());
                Notice::error(err.toast_title()).with_description(message)
            }
        }
    }

    /// Gate, call the service, and apply the outcome in one step.
    ///
    /// # Errors
    ///
    /// Propagates [`begin_submit`](Self::begin_submit) refusals.
    pub async fn submit<S: AuthService>(&mut self, service: &S) -> Result<Notice, GateError> {
        let values = self.begin_submit()?;
        let outcome = service.sign_in(&values.email, &values.password).await;
        Ok(self.finish(outcome))
    }
}
