//! Toast notification list.
//!
//! DESIGN
//! ======
//! Toasts are appended in arrival order and the oldest are dropped once more
//! than [`MAX_VISIBLE_TOASTS`] are queued, so the list is always exactly what
//! is on screen. Auto-dismiss timing lives with the component.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use flows::Notice;

/// How long a toast stays up before dismissing itself.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Maximum number of toasts displayed at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a notice and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    /// Toasts currently on screen, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
