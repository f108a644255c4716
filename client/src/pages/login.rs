//! Member login page.
//!
//! Any failure (bad credentials, unreachable backend) shows the same inline
//! message and keeps the user on `/login`. Success records the user in the
//! auth context and navigates to `/dashboard`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::starfield::StarField;
use crate::state::auth::AuthState;
use crate::util::starfield::StarfieldConfig;

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials. Please try again.";
pub const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let session = crate::session::Session::browser();
                match session.login(&email_value, &password_value).await {
                    Ok(user) => {
                        crate::util::auth::set_user(auth, user);
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(_) => error.set(LOGIN_FAILED_MESSAGE.to_owned()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, auth, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <StarField config=StarfieldConfig::FORM/>
            <header class="auth-page__header">
                <a class="auth-page__brand" href="/">"Chai Street"</a>
                <a class="auth-page__switch" href="/signup">"Apply for Access"</a>
            </header>
            <main class="auth-page__main">
                <div class="auth-card">
                    <p class="auth-card__eyebrow">"Member Login"</p>
                    <h1 class="auth-card__title">"Welcome back."</h1>
                    <p class="auth-card__lede">"Access your dashboard and portfolio environment."</p>
                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-card__error" role="alert">{move || error.get()}</div>
                    </Show>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__field">
                            <span class="auth-form__label">"Email Address"</span>
                            <input
                                class="auth-form__input"
                                type="email"
                                autocomplete="email"
                                required=true
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__field">
                            <span class="auth-form__label">"Password"</span>
                            <input
                                class="auth-form__input"
                                type="password"
                                autocomplete="current-password"
                                required=true
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="button button--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                    <p class="auth-card__footer">
                        "Not a member yet? " <a href="/signup">"Apply for access"</a>
                    </p>
                </div>
            </main>
        </div>
    }
}
