//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, the clock,
//! toast scheduling) from page and component logic so the non-browser build
//! stays deterministic and testable.

pub mod auth;
pub mod clock;
pub mod delay;
pub mod notify;
