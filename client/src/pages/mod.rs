//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns a controller from `flows` in a signal, binds its fields to
//! inputs, and runs submissions through the `AppAuth` service in context.
//! Rendering details are delegated to `components`.

pub mod login;
pub mod reset_confirm;
pub mod reset_request;
