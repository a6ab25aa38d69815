use super::*;

#[test]
fn defaults_match_documented_simulation() {
    let cfg = SimulationConfig::default();
    assert_eq!(cfg.sign_in_delay, Duration::from_millis(1000));
    assert_eq!(cfg.reset_request_delay, Duration::from_millis(1000));
    assert_eq!(cfg.reset_confirm_delay, Duration::from_millis(1500));
    assert_eq!(cfg.accepted_email, "user@example.com");
    assert_eq!(cfg.accepted_password, "password123");
    assert_eq!(cfg.token_prefix, "valid_token_");
    assert!((cfg.reset_success_rate() - 0.8).abs() < f64::EPSILON);
}

#[test]
fn success_rate_is_clamped() {
    assert_eq!(SimulationConfig::default().with_reset_success_rate(1.7).reset_success_rate(), 1.0);
    assert_eq!(SimulationConfig::default().with_reset_success_rate(-0.2).reset_success_rate(), 0.0);
}

#[test]
fn nan_success_rate_falls_back_to_default() {
    let cfg = SimulationConfig::default().with_reset_success_rate(f64::NAN);
    assert!((cfg.reset_success_rate() - DEFAULT_RESET_SUCCESS_RATE).abs() < f64::EPSILON);
}

#[test]
fn builders_override_fields() {
    let cfg = SimulationConfig::default()
        .with_delays(Duration::ZERO, Duration::from_millis(5), Duration::from_millis(7))
        .with_accepted_credentials("a@b.co", "hunter22")
        .with_token_prefix("ok_");
    assert_eq!(cfg.sign_in_delay, Duration::ZERO);
    assert_eq!(cfg.reset_request_delay, Duration::from_millis(5));
    assert_eq!(cfg.reset_confirm_delay, Duration::from_millis(7));
    assert_eq!(cfg.accepted_email, "a@b.co");
    assert_eq!(cfg.accepted_password, "hunter22");
    assert_eq!(cfg.token_prefix, "ok_");
}
