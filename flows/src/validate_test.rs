use super::*;

#[test]
fn email_shape_accepts_common_addresses() {
    for ok in ["user@example.com", "First.Last+tag@sub.example.co", "o'neil@mail.io", "a_b-c@x-y.org", "USER@EXAMPLE.COM"] {
        assert!(is_email_shape(ok), "expected {ok:?} to be accepted");
    }
}

#[test]
fn email_shape_rejects_malformed_values() {
    for bad in [
        "",
        "not-an-email",
        "user@",
        "@example.com",
        "user@example",
        "user@example.c",
        ".user@example.com",
        "us..er@example.com",
        "user@-example.com",
        "user.@example.com",
        "user @example.com",
        " user@example.com",
        "a@b@c.com",
        "user@example.co\u{212A}",
        "\u{17F}user@example.com",
        "üser@example.com",
    ] {
        assert!(!is_email_shape(bad), "expected {bad:?} to be rejected");
    }
}

#[test]
fn check_email_returns_single_message() {
    assert_eq!(check_email("not-an-email"), Some(INVALID_EMAIL));
    assert_eq!(check_email("user@example.com"), None);
}

#[test]
fn required_password_only_rejects_empty() {
    assert_eq!(check_required_password(""), Some(PASSWORD_REQUIRED));
    assert_eq!(check_required_password(" "), None);
}

#[test]
fn new_password_counts_characters_not_bytes() {
    assert_eq!(check_new_password("abcdefg"), Some(PASSWORD_TOO_SHORT));
    assert_eq!(check_new_password("abcdefgh"), None);
    // 7 chars, 14 bytes.
    assert_eq!(check_new_password("ééééééé"), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn confirmation_must_match_exactly() {
    assert_eq!(check_confirmation("abcdefgh", "abcdefgX"), Some(PASSWORDS_DO_NOT_MATCH));
    assert_eq!(check_confirmation("abcdefgh", "abcdefgh"), None);
}
