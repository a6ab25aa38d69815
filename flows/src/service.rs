//! The asynchronous auth operations behind the three screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers never wait or roll dice themselves. They call an
//! [`AuthService`], which the app wires to [`SimulatedAuth`] with a browser
//! timer, and which tests wire to [`SimulatedAuth`] with [`NoDelay`] and a
//! [`FixedRoll`] so outcomes are deterministic.
//!
//! TRADE-OFFS
//! ==========
//! The traits return `impl Future` rather than boxed futures. Callers are
//! generic over the service, which keeps the browser build free of `Send`
//! bounds it cannot satisfy.

use std::future::Future;
use std::time::Duration;

use crate::config::SimulationConfig;
use crate::error::FlowError;

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

/// Backend operations used by the auth screens.
pub trait AuthService {
    /// Check a credential pair.
    fn sign_in(&self, email: &str, password: &str) -> impl Future<Output = Result<(), FlowError>>;

    /// Ask for a reset link to be sent to `email`.
    fn request_reset(&self, email: &str) -> impl Future<Output = Result<(), FlowError>>;

    /// Set a new password using the token from a reset link.
    fn confirm_reset(&self, token: &str, password: &str) -> impl Future<Output = Result<(), FlowError>>;
}

/// How a simulated call waits.
pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// How a simulated call draws a randomized outcome.
pub trait Roll {
    /// `true` with the given probability.
    fn succeeds(&self, probability: f64) -> bool;
}

/// Returns immediately regardless of the requested duration.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

/// Uniform draw from `fastrand`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomRoll;

impl Roll for RandomRoll {
    fn succeeds(&self, probability: f64) -> bool {
        fastrand::f64() < probability
    }
}

/// Always the same outcome.
#[derive(Clone, Copy, Debug)]
pub struct FixedRoll(pub bool);

impl Roll for FixedRoll {
    fn succeeds(&self, _probability: f64) -> bool {
        self.0
    }
}

/// Stand-in backend: fixed delays, one accepted credential pair, prefix-based
/// reset tokens, and a randomized reset outcome.
#[derive(Clone, Debug)]
pub struct SimulatedAuth<D = NoDelay, R = RandomRoll> {
    config: SimulationConfig,
    delay: D,
    roll: R,
}

impl<D: Delay, R: Roll> SimulatedAuth<D, R> {
    #[must_use]
    pub fn new(config: SimulationConfig, delay: D, roll: R) -> Self {
        Self { config, delay, roll }
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

impl<D: Delay, R: Roll> AuthService for SimulatedAuth<D, R> {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), FlowError> {
        tracing::debug!(%email, "simulated sign-in");
        self.delay.wait(self.config.sign_in_delay).await;

        if email == self.config.accepted_email && password == self.config.accepted_password {
            tracing::info!("sign-in accepted");
            Ok(())
        } else {
            tracing::info!("sign-in rejected");
            Err(FlowError::InvalidCredentials)
        }
    }

    async fn request_reset(&self, email: &str) -> Result<(), FlowError> {
        tracing::debug!(%email, "simulated reset request");
        self.delay.wait(self.config.reset_request_delay).await;
        Ok(())
    }

    async fn confirm_reset(&self, token: &str, password: &str) -> Result<(), FlowError> {
        if token.is_empty() || !token.starts_with(&self.config.token_prefix) {
            tracing::warn!("reset confirmation with unrecognized token");
            return Err(FlowError::TokenRejected);
        }
        tracing::debug!(password_len = password.chars().count(), "simulated reset confirmation");
        self.delay.wait(self.config.reset_confirm_delay).await;

        if self.roll.succeeds(self.config.reset_success_rate()) {
            tracing::info!("password reset succeeded");
            Ok(())
        } else {
            tracing::info!("password reset failed");
            Err(FlowError::ResetFailed)
        }
    }
}
