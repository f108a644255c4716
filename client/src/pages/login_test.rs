use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret123"),
        Ok(("user@example.com".to_owned(), "secret123".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret123"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_login_input("a@b.com", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.com", " pass word "),
        Ok(("a@b.com".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn login_failure_message_matches_invalid_credentials_text() {
    assert_eq!(LOGIN_FAILED_MESSAGE, crate::session::AuthError::InvalidCredentials.to_string());
}
