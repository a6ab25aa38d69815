use super::*;

#[test]
fn token_from_query_reads_first_token() {
    assert_eq!(token_from_query("?token=valid_token_abc"), Some("valid_token_abc".to_owned()));
    assert_eq!(token_from_query("x=1&token=a+b%26c&token=zzz"), Some("a b&c".to_owned()));
}

#[test]
fn token_from_query_missing_is_none() {
    assert_eq!(token_from_query(""), None);
    assert_eq!(token_from_query("?tok=1"), None);
}

#[test]
fn token_from_query_keeps_empty_value() {
    assert_eq!(token_from_query("token="), Some(String::new()));
}
