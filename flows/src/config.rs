//! Tunables for the simulated auth backend.
//!
//! There is no real server behind the screens. These values stand in for one:
//! how long each call "takes", which credential pair is accepted, which reset
//! tokens are considered genuine, and how often a reset succeeds.

use std::time::Duration;

pub const DEFAULT_SIGN_IN_DELAY_MS: u64 = 1000;
pub const DEFAULT_RESET_REQUEST_DELAY_MS: u64 = 1000;
pub const DEFAULT_RESET_CONFIRM_DELAY_MS: u64 = 1500;
pub const DEFAULT_RESET_SUCCESS_RATE: f64 = 0.8;
pub const DEFAULT_ACCEPTED_EMAIL: &str = "user@example.com";
pub const DEFAULT_ACCEPTED_PASSWORD: &str = "password123";
pub const DEFAULT_TOKEN_PREFIX: &str = "valid_token_";

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub sign_in_delay: Duration,
    pub reset_request_delay: Duration,
    pub reset_confirm_delay: Duration,
    pub accepted_email: String,
    pub accepted_password: String,
    pub token_prefix: String,
    reset_success_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sign_in_delay: Duration::from_millis(DEFAULT_SIGN_IN_DELAY_MS),
            reset_request_delay: Duration::from_millis(DEFAULT_RESET_REQUEST_DELAY_MS),
            reset_confirm_delay: Duration::from_millis(DEFAULT_RESET_CONFIRM_DELAY_MS),
            accepted_email: DEFAULT_ACCEPTED_EMAIL.to_owned(),
            accepted_password: DEFAULT_ACCEPTED_PASSWORD.to_owned(),
            token_prefix: DEFAULT_TOKEN_PREFIX.to_owned(),
            reset_success_rate: DEFAULT_RESET_SUCCESS_RATE,
        }
    }
}

impl SimulationConfig {
    /// Probability in `[0, 1]` that a confirmed reset succeeds.
    #[must_use]
    pub fn reset_success_rate(&self) -> f64 {
        self.reset_success_rate
    }

    /// Set the reset success probability. Values outside `[0, 1]` are clamped
    /// and NaN falls back to the default.
    #[must_use]
    pub fn with_reset_success_rate(mut self, rate: f64) -> Self {
        self.reset_success_rate = if rate.is_nan() {
            DEFAULT_RESET_SUCCESS_RATE
        } else {
            rate.clamp(0.0, 1.0)
        };
        self
    }

    #[must_use]
    pub fn with_delays(mut self, sign_in: Duration, reset_request: Duration, reset_confirm: Duration) -> Self {
        self.sign_in_delay = sign_in;
        self.reset_request_delay = reset_request;
        self.reset_confirm_delay = reset_confirm;
        self
    }

    #[must_use]
    pub fn with_accepted_credentials(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.accepted_email = email.into();
        self.accepted_password = password.into();
        self
    }

    #[must_use]
    pub fn with_token_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.token_prefix = prefix.into();
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
