/// Lifecycle of one form's submissions.
///
/// The reset-request screen never fails, so it only ever reaches `Succeeded`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    #[must_use]
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}
