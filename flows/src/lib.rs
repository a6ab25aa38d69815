//! Form models and controllers for the sign-in and password-reset screens.
//!
//! This crate owns everything about the auth screens that is not rendering:
//! field values, validation rules, submit status, the reset-link token check,
//! and the asynchronous auth operations. The `client` crate binds these types
//! to Leptos signals; tests drive them directly.
//!
//! ARCHITECTURE
//! ============
//! - `form`: generic field bookkeeping (values, touched flags, errors).
//! - `validate`: pure predicates and user-facing field messages.
//! - `login`, `reset_request`, `reset_confirm`: one controller per screen.
//! - `service`: the injectable async operation plus its simulated impl.
//! - `token`, `routes`, `notice`: small shared value types.

pub mod config;
pub mod error;
pub mod form;
pub mod login;
pub mod notice;
pub mod reset_confirm;
pub mod reset_request;
pub mod routes;
pub mod service;
pub mod status;
pub mod token;
pub mod validate;

pub use config::SimulationConfig;
pub use error::{FlowError, GateError};
pub use form::{Field, FieldErrors, Form, FormModel};
pub use login::{LoginController, LoginForm};
pub use notice::{Banner, BannerKind, Notice, NoticeLevel};
pub use reset_confirm::{ResetConfirmController, ResetConfirmForm};
pub use reset_request::{ResetRequestController, ResetRequestForm};
pub use service::{AuthService, Delay, FixedRoll, NoDelay, RandomRoll, Roll, SimulatedAuth};
pub use status::SubmitStatus;
pub use token::{TokenProblem, TokenState};
