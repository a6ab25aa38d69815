//! Wall-clock helpers for rendering.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year (UTC).
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
