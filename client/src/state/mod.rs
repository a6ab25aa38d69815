//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Per-screen form state lives in the `flows` controllers owned by each page.
//! Only state that outlives a page (the toast list) is kept here and provided
//! through Leptos context.

pub mod toast;
