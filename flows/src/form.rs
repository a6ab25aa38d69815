//! Generic field bookkeeping shared by every screen's form.
//!
//! DESIGN
//! ======
//! A screen's values live in a plain struct implementing [`Form`]. The struct
//! only knows how to read/write its fields and how to check one field.
//! [`FormModel`] wraps it with the interaction state that decides which
//! errors are visible:
//!
//! - an error shows once its field was blurred, or after a submit attempt;
//! - visible errors are recomputed on every change to any field, so
//!   cross-field rules (password confirmation) stay current.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Input fields used across the auth screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Name used for element ids and `name=` attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn set(&mut self, field: Field, message: Option<&'static str>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A screen's field values plus its validation rules.
pub trait Form: Clone + Default {
    /// Fields in display order.
    const FIELDS: &'static [Field];

    fn value(&self, field: Field) -> &str;

    /// Write `value` into `field`. Fields the form does not own are ignored.
    fn set_value(&mut self, field: Field, value: String);

    /// Error for one field, evaluated against the whole form.
    fn check(&self, field: Field) -> Option<&'static str>;

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for &field in Self::FIELDS {
            errors.set(field, self.check(field));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Values plus touched/submitted state for one form instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormModel<F> {
    values: F,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    submitted: bool,
}

impl<F: Form> FormModel<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn values(&self) -> &F {
        &self.values
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.value(field)
    }

    /// Currently visible errors.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Change notification from an input.
    pub fn input(&mut self, field: Field, value: String) {
        self.values.set_value(field, value);
        self.refresh();
    }

    /// Blur notification from an input.
    pub fn blur(&mut self, field: Field) {
        if F::FIELDS.contains(&field) {
            self.touched.insert(field);
        }
        self.refresh();
    }

    /// Submit-time gate: marks the form submitted, surfaces every error, and
    /// hands back a snapshot of the values when all rules pass.
    ///
    /// # Errors
    ///
    /// Returns the full error set when any field fails.
    pub fn gate(&mut self) -> Result<F, FieldErrors> {
        self.submitted = true;
        self.refresh();
        match self.values.validate() {
            Ok(()) => Ok(self.values.clone()),
            Err(errors) => Err(errors),
        }
    }

    /// Back to pristine: empty values, nothing touched, no errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn refresh(&mut self) {
        for &field in F::FIELDS {
            let visible = self.submitted || self.touched.contains(&field);
            let message = if visible { self.values.check(field) } else { None };
            self.errors.set(field, message);
        }
    }
}
