//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chrome shared by every auth screen (header, footer,
//! banners, toasts) and the password input. None of them validate or submit;
//! pages own that through their controllers.

pub mod alert;
pub mod auth_footer;
pub mod auth_header;
pub mod auth_shell;
pub mod field_message;
pub mod icons;
pub mod password_field;
pub mod text_field;
pub mod toaster;
