use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

const GOOD_PASSWORD: &str = "correct-horse";
const ISSUED_TOKEN: &str = "tok-123";

#[derive(Default)]
struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl MemoryStore {
    fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

struct FakeApi {
    user: User,
    /// Tokens `current_user` accepts.
    valid_tokens: Vec<String>,
    /// When set, `current_user` fails with this instead of checking tokens.
    me_error: Option<AuthError>,
    signup_error: Option<AuthError>,
    discord: Result<String, AuthError>,
    calls: RefCell<Vec<&'static str>>,
    last_login: RefCell<Option<LoginRequest>>,
}

impl FakeApi {
    fn new() -> Self {
        Self {
            user: member(),
            valid_tokens: vec![ISSUED_TOKEN.to_owned()],
            me_error: None,
            signup_error: None,
            discord: Ok("https://discord.com/oauth2/authorize?state=u-1".to_owned()),
            calls: RefCell::new(Vec::new()),
            last_login: RefCell::new(None),
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, body: &LoginRequest) -> Result<TokenResponse, AuthError> {
        self.calls.borrow_mut().push("login");
        *self.last_login.borrow_mut() = Some(body.clone());
        if body.password == GOOD_PASSWORD {
            Ok(TokenResponse { token: ISSUED_TOKEN.to_owned() })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn signup(&self, _body: &SignupRequest) -> Result<TokenResponse, AuthError> {
        self.calls.borrow_mut().push("signup");
        match &self.signup_error {
            Some(e) => Err(e.clone()),
            None => Ok(TokenResponse { token: ISSUED_TOKEN.to_owned() }),
        }
    }

    async fn current_user(&self, token: &str) -> Result<User, AuthError> {
        self.calls.borrow_mut().push("me");
        if let Some(e) = &self.me_error {
            return Err(e.clone());
        }
        if self.valid_tokens.iter().any(|t| t == token) {
            Ok(self.user.clone())
        } else {
            Err(AuthError::Unauthorized)
        }
    }

    async fn discord_oauth_url(&self, _token: &str) -> Result<String, AuthError> {
        self.calls.borrow_mut().push("discord");
        self.discord.clone()
    }
}

fn member() -> User {
    User {
        id: "u-1".to_owned(),
        email: "asha@example.com".to_owned(),
        first_name: "Asha".to_owned(),
        last_name: "Rao".to_owned(),
        age_group: "30-40".to_owned(),
        trading_expertise: "advanced".to_owned(),
        focus_areas: "Swing Trading".to_owned(),
        tier: Some("FREE".to_owned()),
        discord_user_id: None,
        discord_username: None,
    }
}

fn complete_form() -> SignupForm {
    SignupForm {
        first_name: "Asha".to_owned(),
        last_name: "Rao".to_owned(),
        email: "Asha@Example.com".to_owned(),
        password: GOOD_PASSWORD.to_owned(),
        age_group: "30-40".to_owned(),
        trading_expertise: "advanced".to_owned(),
        focus_areas: vec!["Swing Trading".to_owned()],
    }
}

// =============================================================================
// login
// =============================================================================

#[test]
fn login_with_valid_credentials_stores_token_and_loads_user() {
    let session = Session::new(FakeApi::new(), MemoryStore::default());
    let user = block_on(session.login("asha@example.com", GOOD_PASSWORD)).unwrap();
    assert_eq!(user.email, "asha@example.com");
    assert_eq!(session.store.get().as_deref(), Some(ISSUED_TOKEN));
    assert_eq!(session.api.calls(), vec!["login", "me"]);
}

#[test]
fn login_with_invalid_credentials_stores_nothing() {
    let session = Session::new(FakeApi::new(), MemoryStore::default());
    let err = block_on(session.login("asha@example.com", "wrong")).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(session.store.get(), None);
    assert_eq!(session.api.calls(), vec!["login"]);
}

#[test]
fn login_normalizes_email_before_sending() {
    let session = Session::new(FakeApi::new(), MemoryStore::default());
    let _ = block_on(session.login("  Asha@Example.COM ", GOOD_PASSWORD));
    let sent = session.api.last_login.borrow().clone().unwrap();
    assert_eq!(sent.email, "asha@example.com");
}

#[test]
fn login_clears_token_when_user_fetch_fails() {
    let mut api = FakeApi::new();
    api.me_error = Some(AuthError::RequestFailed("boom".to_owned()));
    let session = Session::new(api, MemoryStore::default());
    let err = block_on(session.login("asha@example.com", GOOD_PASSWORD)).unwrap_err();
    assert_eq!(err, AuthError::RequestFailed("boom".to_owned()));
    assert_eq!(session.store.get(), None);
}

// =============================================================================
// signup
// =============================================================================

#[test]
fn signup_missing_age_group_sends_no_request() {
    let session = Session::new(FakeApi::new(), MemoryStore::default());
    let mut form = complete_form();
    form.age_group.clear();
    let err = block_on(session.signup(&form)).unwrap_err();
    assert_eq!(err, AuthError::Validation(signup::MISSING_SELECTION_MESSAGE.to_owned()));
    assert!(session.api.calls().is_empty());
    assert_eq!(session.store.get(), None);
}

#[test]
fn signup_missing_expertise_sends_no_request() {
    let session = Session::new(FakeApi::new(), MemoryStore::default());
    let mut form = complete_form();
    form.trading_expertise = "  ".to_owned();
    assert!(matches!(block_on(session.signup(&form)), Err(AuthError::Validation(_))));
    assert!(session.api.calls().is_empty());
}

#[test]
fn signup_success_stores_token_and_loads_user() {
    let session = Session::new(FakeApi::new(), MemoryStore::default());
    let user = block_on(session.signup(&complete_form())).unwrap();
    assert_eq!(user.map(|u| u.id).as_deref(), Some("u-1"));
    assert_eq!(session.store.get().as_deref(), Some(ISSUED_TOKEN));
    assert_eq!(session.api.calls(), vec!["signup", "me"]);
}

#[test]
fn signup_keeps_issued_token_when_member_fetch_fails() {
    let mut api = FakeApi::new();
    api.me_error = Some(AuthError::RequestFailed("request failed: 500".to_owned()));
    let session = Session::new(api, MemoryStore::default());
    assert_eq!(block_on(session.signup(&complete_form())), Ok(None));
    assert_eq!(session.store.get().as_deref(), Some(ISSUED_TOKEN));
    assert_eq!(session.api.calls(), vec!["signup", "me"]);
}

#[test]
fn signup_token_lets_next_fetch_load_member() {
    let mut api = FakeApi::new();
    api.me_error = Some(AuthError::RequestFailed("request failed: 500".to_owned()));
    let mut session = Session::new(api, MemoryStore::default());
    block_on(session.signup(&complete_form())).unwrap();
    session.api.me_error = None;
    let user = block_on(session.fetch_current_user()).unwrap();
    assert_eq!(user.map(|u| u.id).as_deref(), Some("u-1"));
}

#[test]
fn signup_surfaces_backend_detail() {
    let mut api = FakeApi::new();
    api.signup_error = Some(AuthError::RequestFailed("Email already registered".to_owned()));
    let session = Session::new(api, MemoryStore::default());
    let err = block_on(session.signup(&complete_form())).unwrap_err();
    assert_eq!(err.to_string(), "Email already registered");
    assert_eq!(session.store.get(), None);
}

#[test]
fn signup_maps_other_failures_to_generic_message() {
    let mut api = FakeApi::new();
    api.signup_error = Some(AuthError::Unauthorized);
    let session = Session::new(api, MemoryStore::default());
    let err = block_on(session.signup(&complete_form())).unwrap_err();
    assert_eq!(err, AuthError::RequestFailed(SIGNUP_FAILED_MESSAGE.to_owned()));
}

// =============================================================================
// fetch_current_user
// =============================================================================

#[test]
fn fetch_current_user_without_token_skips_network() {
    let session = Session::new(FakeApi::new(), MemoryStore::default());
    assert_eq!(block_on(session.fetch_current_user()), Ok(None));
    assert!(session.api.calls().is_empty());
}

#[test]
fn fetch_current_user_with_valid_token_returns_user() {
    let session = Session::new(FakeApi::new(), MemoryStore::with_token(ISSUED_TOKEN));
    let user = block_on(session.fetch_current_user()).unwrap();
    assert_eq!(user.map(|u| u.id).as_deref(), Some("u-1"));
}

#[test]
fn fetch_current_user_with_rejected_token_clears_it() {
    let session = Session::new(FakeApi::new(), MemoryStore::with_token("expired"));
    assert_eq!(block_on(session.fetch_current_user()), Ok(None));
    assert_eq!(session.store.get(), None);
}

#[test]
fn fetch_current_user_keeps_token_on_transport_failure() {
    let mut api = FakeApi::new();
    api.me_error = Some(AuthError::RequestFailed("offline".to_owned()));
    let session = Session::new(api, MemoryStore::with_token(ISSUED_TOKEN));
    assert!(block_on(session.fetch_current_user()).is_err());
    assert!(session.store.get().is_some());
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn logout_clears_token_so_next_fetch_is_anonymous() {
    let session = Session::new(FakeApi::new(), MemoryStore::default());
    block_on(session.login("asha@example.com", GOOD_PASSWORD)).unwrap();
    session.logout();
    assert_eq!(session.store.get(), None);
    assert_eq!(block_on(session.fetch_current_user()), Ok(None));
    assert_eq!(session.api.calls(), vec!["login", "me"]);
}

// =============================================================================
// start_discord_link
// =============================================================================

#[test]
fn start_discord_link_returns_oauth_url() {
    let session = Session::new(FakeApi::new(), MemoryStore::with_token(ISSUED_TOKEN));
    let url = block_on(session.start_discord_link()).unwrap();
    assert!(url.starts_with("https://discord.com/oauth2/authorize"));
}

#[test]
fn start_discord_link_without_token_is_unauthorized() {
    let session = Session::new(FakeApi::new(), MemoryStore::default());
    assert_eq!(block_on(session.start_discord_link()), Err(AuthError::Unauthorized));
    assert!(session.api.calls().is_empty());
}

#[test]
fn start_discord_link_propagates_backend_failure() {
    let mut api = FakeApi::new();
    api.discord = Err(AuthError::RequestFailed("discord down".to_owned()));
    let session = Session::new(api, MemoryStore::with_token(ISSUED_TOKEN));
    assert!(matches!(block_on(session.start_discord_link()), Err(AuthError::RequestFailed(_))));
}

// =============================================================================
// SignupForm
// =============================================================================

#[test]
fn toggle_focus_adds_then_removes() {
    let mut form = SignupForm::default();
    form.toggle_focus("Day Trading");
    form.toggle_focus("Swing Trading");
    assert!(form.has_focus("Day Trading"));
    form.toggle_focus("Day Trading");
    assert!(!form.has_focus("Day Trading"));
    assert_eq!(form.focus_areas, vec!["Swing Trading".to_owned()]);
}

#[test]
fn validate_trims_names_and_normalizes_email() {
    let mut form = complete_form();
    form.first_name = "  Asha ".to_owned();
    let req = form.validate().unwrap();
    assert_eq!(req.first_name, "Asha");
    assert_eq!(req.email, "asha@example.com");
    assert_eq!(req.password, GOOD_PASSWORD);
}

#[test]
fn choice_tables_match_backend_values() {
    let ages: Vec<_> = signup::AGE_GROUPS.iter().map(|(v, _)| *v).collect();
    assert_eq!(ages, vec!["20-30", "30-40", "40-50"]);
    let levels: Vec<_> = signup::EXPERTISE_LEVELS.iter().map(|(v, _)| *v).collect();
    assert_eq!(levels, vec!["beginner", "advanced", "expert"]);
    assert_eq!(signup::FOCUS_AREAS.len(), 4);
}
