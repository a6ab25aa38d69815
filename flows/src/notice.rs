//! User-visible outcome messages: transient toasts and in-card banners.
//!
//! Controllers return these as plain values; the UI decides how long a toast
//! stays up and how a banner is styled.

/// Severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient toast notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, title: title.into(), description: None }
    }

    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, title: title.into(), description: None }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Style of an in-card banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// Dismissable banner rendered inside the form card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub title: &'static str,
    pub message: String,
    /// Optional call to action rendered after the message: `(label, href)`.
    pub link: Option<(&'static str, &'static str)>,
}

impl Banner {
    #[must_use]
    pub fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, title, message: message.into(), link: None }
    }

    #[must_use]
    pub fn success(title: &'static str, message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Success, title, message: message.into(), link: None }
    }

    #[must_use]
    pub fn with_link(mut self, label: &'static str, href: &'static str) -> Self {
        self.link = Some((label, href));
        self
    }
}
