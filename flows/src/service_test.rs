use std::cell::RefCell;

use super::*;

/// Records requested waits instead of sleeping.
#[derive(Default)]
struct RecordingDelay(RefCell<Vec<Duration>>);

impl Delay for &RecordingDelay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> {
        self.0.borrow_mut().push(duration);
        std::future::ready(())
    }
}

fn service(roll: bool) -> SimulatedAuth<NoDelay, FixedRoll> {
    SimulatedAuth::new(SimulationConfig::default(), NoDelay, FixedRoll(roll))
}

// =============================================================
// sign_in
// =============================================================

#[tokio::test]
async fn sign_in_accepts_the_configured_pair() {
    assert_eq!(service(true).sign_in("user@example.com", "password123").await, Ok(()));
}

#[tokio::test]
async fn sign_in_rejects_any_other_pair() {
    let svc = service(true);
    for (email, password) in [
        ("user@example.com", "password1234"),
        ("User@example.com", "password123"),
        ("other@example.com", "password123"),
        ("user@example.com", ""),
    ] {
        assert_eq!(svc.sign_in(email, password).await, Err(FlowError::InvalidCredentials));
    }
}

#[tokio::test]
async fn sign_in_waits_the_sign_in_delay() {
    let delay = RecordingDelay::default();
    let svc = SimulatedAuth::new(SimulationConfig::default(), &delay, FixedRoll(true));
    let _ = svc.sign_in("a@b.co", "x").await;
    assert_eq!(*delay.0.borrow(), vec![Duration::from_millis(1000)]);
}

// =============================================================
// request_reset
// =============================================================

#[tokio::test]
async fn request_reset_always_succeeds() {
    assert_eq!(service(false).request_reset("nobody@example.com").await, Ok(()));
}

// =============================================================
// confirm_reset
// =============================================================

#[tokio::test]
async fn confirm_reset_follows_the_roll() {
    assert_eq!(service(true).confirm_reset("valid_token_abc", "abcdefgh").await, Ok(()));
    assert_eq!(
        service(false).confirm_reset("valid_token_abc", "abcdefgh").await,
        Err(FlowError::ResetFailed)
    );
}

#[tokio::test]
async fn confirm_reset_refuses_unprefixed_token_without_waiting() {
    let delay = RecordingDelay::default();
    let svc = SimulatedAuth::new(SimulationConfig::default(), &delay, FixedRoll(true));
    assert_eq!(svc.confirm_reset("garbage", "abcdefgh").await, Err(FlowError::TokenRejected));
    assert!(delay.0.borrow().is_empty());
}

#[tokio::test]
async fn confirm_reset_waits_the_longer_delay() {
    let delay = RecordingDelay::default();
    let svc = SimulatedAuth::new(SimulationConfig::default(), &delay, FixedRoll(true));
    let _ = svc.confirm_reset("valid_token_abc", "abcdefgh").await;
    assert_eq!(*delay.0.borrow(), vec![Duration::from_millis(1500)]);
}

// =============================================================
// Roll
// =============================================================

#[test]
fn random_roll_respects_certain_bounds() {
    for _ in 0..64 {
        assert!(RandomRoll.succeeds(1.0));
        assert!(!RandomRoll.succeeds(0.0));
    }
}
