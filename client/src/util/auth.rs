//! The auth service the pages submit through.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page resolves the same service from context so the simulated
//! backend can be swapped in one place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use flows::{RandomRoll, SimulatedAuth, SimulationConfig};

use super::delay::TimerDelay;

/// Service type provided through Leptos context by the app root.
pub type AppAuth = SimulatedAuth<TimerDelay, RandomRoll>;

/// Simulated backend with the default delays, credentials and token rule.
pub fn app_auth() -> AppAuth {
    SimulatedAuth::new(SimulationConfig::default(), TimerDelay, RandomRoll)
}
