use super::*;
use crate::config::SimulationConfig;
use crate::notice::{BannerKind, NoticeLevel};
use crate::service::{FixedRoll, NoDelay, SimulatedAuth};
use crate::validate::INVALID_EMAIL;

fn service() -> SimulatedAuth<NoDelay, FixedRoll> {
    SimulatedAuth::new(SimulationConfig::default(), NoDelay, FixedRoll(true))
}

fn filled(email: &str, password: &str) -> LoginController {
    let mut ctl = LoginController::new();
    ctl.input(Field::Email, email.to_owned());
    ctl.input(Field::Password, password.to_owned());
    ctl
}

#[test]
fn non_email_blocks_submission_with_single_format_error() {
    let mut ctl = filled("not-an-email", "password123");
    let err = ctl.begin_submit().unwrap_err();
    let GateError::Invalid(errors) = err else { panic!("expected validation failure") };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
    assert_eq!(ctl.status(), SubmitStatus::Idle);
}

#[test]
fn begin_submit_enters_submitting_and_refuses_second_attempt() {
    let mut ctl = filled("user@example.com", "password123");
    assert!(ctl.begin_submit().is_ok());
    assert!(ctl.is_submitting());
    assert_eq!(ctl.submit_label(), "Signing In...");
    assert_eq!(ctl.begin_submit(), Err(GateError::InFlight));
}

#[tokio::test]
async fn accepted_pair_succeeds_and_resets_form() {
    let mut ctl = filled("user@example.com", "password123");
    let notice = ctl.submit(&service()).await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.title, "Login Successful!");
    assert_eq!(notice.description.as_deref(), Some("You will be redirected shortly."));
    assert_eq!(ctl.status(), SubmitStatus::Succeeded);
    assert_eq!(ctl.form().values(), &LoginForm::default());
    assert_eq!(ctl.error(), None);
    assert_eq!(ctl.submit_label(), "Sign In");
}

#[tokio::test]
async fn other_pair_fails_with_literal_message() {
    let mut ctl = filled("user@example.com", "wrong");
    let notice = ctl.submit(&service()).await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.title, "Login Failed");
    assert_eq!(ctl.status(), SubmitStatus::Failed);
    assert_eq!(ctl.error(), Some("Invalid email or password. Please try again."));

    let banner = ctl.banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.title, "Login Error");
    // Values stay for correction.
    assert_eq!(ctl.form().values().password, "wrong");
}

#[tokio::test]
async fn resubmission_clears_previous_error() {
    let mut ctl = filled("user@example.com", "wrong");
    let _ = ctl.submit(&service()).await;
    assert!(ctl.error().is_some());

    ctl.input(Field::Password, "password123".to_owned());
    ctl.begin_submit().unwrap();
    assert_eq!(ctl.error(), None);
    let notice = ctl.finish(Ok(()));
    assert_eq!(notice.level, NoticeLevel::Success);
}

#[test]
fn dismiss_error_hides_banner() {
    let mut ctl = filled("user@example.com", "wrong");
    ctl.begin_submit().unwrap();
    let _ = ctl.finish(Err(FlowError::InvalidCredentials));
    ctl.dismiss_error();
    assert!(ctl.banner().is_none());
}

#[test]
fn debug_output_redacts_password() {
    let form = LoginForm { email: "a@b.co".to_owned(), password: "hunter22".to_owned() };
    let out = format!("{form:?}");
    assert!(out.contains("a@b.co"));
    assert!(!out.contains("hunter22"));
}
