use super::*;
use crate::config::{DEFAULT_TOKEN_PREFIX, SimulationConfig};
use crate::notice::{BannerKind, NoticeLevel};
use crate::service::{FixedRoll, NoDelay, SimulatedAuth};
use crate::token::TokenProblem;
use crate::validate::{PASSWORDS_DO_NOT_MATCH, PASSWORD_TOO_SHORT};

fn service(roll: bool) -> SimulatedAuth<NoDelay, FixedRoll> {
    SimulatedAuth::new(SimulationConfig::default(), NoDelay, FixedRoll(roll))
}

fn mounted(token: Option<&str>) -> ResetConfirmController {
    let mut ctl = ResetConfirmController::new();
    let _ = ctl.mount(token, DEFAULT_TOKEN_PREFIX);
    ctl
}

fn filled(password: &str, confirm: &str) -> ResetConfirmController {
    let mut ctl = mounted(Some("valid_token_abc"));
    ctl.input(Field::Password, password.to_owned());
    ctl.input(Field::ConfirmPassword, confirm.to_owned());
    ctl
}

// =============================================================
// Token handling on mount
// =============================================================

#[test]
fn unmounted_screen_is_unchecked() {
    let ctl = ResetConfirmController::new();
    assert_eq!(ctl.token_valid(), None);
    assert!(ctl.banner().is_none());
    assert!(!ctl.submit_disabled());
}

#[test]
fn missing_token_is_invalid_with_no_token_message() {
    let mut ctl = ResetConfirmController::new();
    let notice = ctl.mount(None, DEFAULT_TOKEN_PREFIX).unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.title, "No password reset token found.");
    assert_eq!(ctl.token_valid(), Some(false));
    assert_eq!(ctl.error(), Some(TokenProblem::Missing.message()));
    assert_eq!(ctl.description(), "There's an issue with your reset link.");
    assert!(ctl.submit_disabled());
}

#[test]
fn missing_token_makes_submit_unreachable() {
    let mut ctl = mounted(None);
    ctl.input(Field::Password, "abcdefgh".to_owned());
    ctl.input(Field::ConfirmPassword, "abcdefgh".to_owned());
    let err = ctl.begin_submit().unwrap_err();
    assert_eq!(err, GateError::TokenNotValid);
    assert_eq!(err.notice().map(|n| n.level), Some(NoticeLevel::Error));
    assert_eq!(ctl.status(), SubmitStatus::Idle);
    assert_eq!(ctl.error(), Some("Cannot reset password due to an invalid or missing token."));
}

#[test]
fn prefixed_token_is_valid() {
    let mut ctl = ResetConfirmController::new();
    assert!(ctl.mount(Some("valid_token_abc"), DEFAULT_TOKEN_PREFIX).is_none());
    assert_eq!(ctl.token_valid(), Some(true));
    assert_eq!(ctl.description(), "Enter your new password below.");
    assert!(ctl.banner().is_none());
}

#[test]
fn garbage_token_is_invalid() {
    let ctl = mounted(Some("garbage"));
    assert_eq!(ctl.token_valid(), Some(false));
    assert_eq!(ctl.error(), Some(TokenProblem::Rejected.message()));
}

#[test]
fn token_is_fixed_after_first_mount() {
    let mut ctl = mounted(Some("garbage"));
    assert!(ctl.mount(Some("valid_token_abc"), DEFAULT_TOKEN_PREFIX).is_none());
    assert_eq!(ctl.token_valid(), Some(false));
}

#[test]
fn invalid_link_banner_shows_when_error_dismissed() {
    let mut ctl = mounted(Some("garbage"));
    ctl.dismiss_error();
    let banner = ctl.banner().unwrap();
    assert_eq!(banner.title, "Invalid Link");
    assert_eq!(banner.link, Some(("request a new one", "/password-reset-request")));
}

// =============================================================
// Validation gate
// =============================================================

#[test]
fn mismatch_is_attached_to_confirm_password() {
    let mut ctl = filled("abcdefgh", "abcdefgX");
    let Err(GateError::Invalid(errors)) = ctl.begin_submit() else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::ConfirmPassword), Some(PASSWORDS_DO_NOT_MATCH));
    assert_eq!(errors.get(Field::Password), None);
}

#[test]
fn short_password_is_rejected() {
    let mut ctl = filled("abc", "abc");
    let Err(GateError::Invalid(errors)) = ctl.begin_submit() else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn equal_long_passwords_pass_gate() {
    let mut ctl = filled("abcdefgh", "abcdefgh");
    let attempt = ctl.begin_submit().unwrap();
    assert_eq!(attempt.token, "valid_token_abc");
    assert_eq!(attempt.form.password, "abcdefgh");
    assert!(ctl.is_submitting());
    assert!(ctl.submit_disabled());
    assert_eq!(ctl.submit_label(), "Setting Password...");
    assert_eq!(ctl.begin_submit(), Err(GateError::InFlight));
}

// =============================================================
// Outcomes
// =============================================================

#[tokio::test]
async fn success_clears_error_and_redirects_to_sign_in() {
    let mut ctl = filled("abcdefgh", "abcdefgh");
    let notice = ctl.submit(&service(true)).await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.title, SUCCESS_TOAST);
    assert_eq!(ctl.status(), SubmitStatus::Succeeded);
    assert_eq!(ctl.error(), None);
    assert_eq!(ctl.redirect(), Some("/"));
}

#[tokio::test]
async fn failure_sets_banner_and_allows_retry() {
    let mut ctl = filled("abcdefgh", "abcdefgh");
    let notice = ctl.submit(&service(false)).await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.title, "Failed to reset password. Please try again.");
    assert_eq!(ctl.status(), SubmitStatus::Failed);
    assert_eq!(ctl.redirect(), None);

    let banner = ctl.banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.title, "Error");
    assert!(banner.message.starts_with("Failed to reset password."));

    let notice = ctl.submit(&service(true)).await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
}
