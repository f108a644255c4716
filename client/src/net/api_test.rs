use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    let api = HttpAuthApi::new("https://api.chaistreet.ai");
    assert_eq!(api.endpoint(LOGIN_PATH), "https://api.chaistreet.ai/auth/login");
    assert_eq!(api.endpoint(CURRENT_USER_PATH), "https://api.chaistreet.ai/me");
    assert_eq!(api.endpoint(DISCORD_OAUTH_URL_PATH), "https://api.chaistreet.ai/discord/oauth/url");
}

#[test]
fn configured_endpoint_has_no_double_slash_after_host() {
    let url = HttpAuthApi::from_config().endpoint(DISCORD_OAUTH_URL_PATH);
    assert!(url.ends_with("/discord/oauth/url"));
    assert!(!url.contains("//discord"));
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn login_401_is_invalid_credentials() {
    assert_eq!(
        error_for_status(CallKind::Login, 401, r#"{"detail":"Invalid credentials"}"#),
        AuthError::InvalidCredentials
    );
}

#[test]
fn authenticated_401_is_unauthorized() {
    assert_eq!(error_for_status(CallKind::Authenticated, 401, ""), AuthError::Unauthorized);
}

#[test]
fn signup_400_carries_backend_detail() {
    assert_eq!(
        error_for_status(CallKind::Signup, 400, r#"{"detail":"Email already registered"}"#),
        AuthError::RequestFailed("Email already registered".to_owned())
    );
}

#[test]
fn signup_422_without_string_detail_falls_back() {
    let body = r#"{"detail":[{"loc":["body","password"],"msg":"ensure this value has at least 8 characters"}]}"#;
    assert_eq!(
        error_for_status(CallKind::Signup, 422, body),
        AuthError::RequestFailed("Signup failed".to_owned())
    );
}

#[test]
fn non_json_body_uses_status_fallback() {
    assert_eq!(
        error_for_status(CallKind::Authenticated, 502, "<html>bad gateway</html>"),
        AuthError::RequestFailed("request failed: 502".to_owned())
    );
}

#[test]
fn login_500_is_request_failed_not_invalid_credentials() {
    assert!(matches!(error_for_status(CallKind::Login, 500, ""), AuthError::RequestFailed(_)));
}
