use super::*;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: String::new(),
        age_group: "20-30".to_owned(),
        trading_expertise: "beginner".to_owned(),
        focus_areas: String::new(),
        tier: None,
        discord_user_id: None,
        discord_username: None,
    }
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&AuthState::settled(None)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState::settled(Some(user()));
    assert!(state.is_authenticated());
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn logout_transition_triggers_redirect() {
    let mut state = AuthState::settled(Some(user()));
    state.user = None;
    assert!(should_redirect_unauth(&state));
}
