//! Access-request (signup) page.
//!
//! Missing selections are caught client-side with a blocking alert before any
//! request. Backend failures surface their detail (or "Signup failed") in an
//! alert. Success records the user and navigates to `/dashboard`; when the
//! member could not be loaded right after signup, the dashboard shows its
//! loading state while the stored token is retried.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::starfield::StarField;
use crate::session::signup::{AGE_GROUPS, Choice, EXPERTISE_LEVELS, FOCUS_AREAS};
use crate::session::SignupForm;
use crate::state::auth::AuthState;
use crate::util::browser::alert;
use crate::util::starfield::StarfieldConfig;

fn select_options(placeholder: &'static str, choices: &'static [Choice]) -> impl IntoView {
    view! {
        <option value="">{placeholder}</option>
        {choices
            .iter()
            .map(|&(value, label)| view! { <option value=value>{label}</option> })
            .collect_view()}
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(SignupForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let snapshot = form.get();
        if let Err(e) = snapshot.validate() {
            alert(&e.to_string());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let session = crate::session::Session::browser();
                match session.signup(&snapshot).await {
                    Ok(Some(user)) => {
                        crate::util::auth::set_user(auth, user);
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Ok(None) => {
                        // Account and token exist; the dashboard waits while the member loads again.
                        auth.set(AuthState::default());
                        navigate("/dashboard", NavigateOptions::default());
                        let user = session.fetch_current_user().await.unwrap_or(None);
                        auth.set(AuthState::settled(user));
                    }
                    Err(e) => alert(&e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <StarField config=StarfieldConfig::FORM/>
            <header class="auth-page__header">
                <a class="auth-page__brand" href="/">"Chai Street"</a>
                <a class="auth-page__switch" href="/login">"Member Login"</a>
            </header>
            <main class="auth-page__main">
                <div class="auth-card auth-card--wide">
                    <p class="auth-card__eyebrow">"Access Request"</p>
                    <h1 class="auth-card__title">"Join a disciplined" <br/> "trading environment."</h1>
                    <p class="auth-card__lede">
                        "Chai Street is a private trading community built around risk control, context "
                        "awareness, and long-term capital preservation."
                    </p>
                    <form class="auth-form" on:submit=on_submit>
                        <div class="auth-form__row">
                            <label class="auth-form__field">
                                <span class="auth-form__label">"First Name"</span>
                                <input
                                    class="auth-form__input"
                                    autocomplete="given-name"
                                    required=true
                                    prop:value=move || form.get().first_name
                                    on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                                />
                            </label>
                            <label class="auth-form__field">
                                <span class="auth-form__label">"Last Name"</span>
                                <input
                                    class="auth-form__input"
                                    autocomplete="family-name"
                                    required=true
                                    prop:value=move || form.get().last_name
                                    on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <label class="auth-form__field">
                            <span class="auth-form__label">"Email Address"</span>
                            <input
                                class="auth-form__input"
                                type="email"
                                autocomplete="email"
                                required=true
                                prop:value=move || form.get().email
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__field">
                            <span class="auth-form__label">"Password"</span>
                            <input
                                class="auth-form__input"
                                type="password"
                                autocomplete="new-password"
                                minlength="8"
                                maxlength="64"
                                required=true
                                prop:value=move || form.get().password
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                        </label>
                        <div class="auth-form__row">
                            <label class="auth-form__field">
                                <span class="auth-form__label">"Age Group"</span>
                                <select
                                    class="auth-form__select"
                                    prop:value=move || form.get().age_group
                                    on:change=move |ev| form.update(|f| f.age_group = event_target_value(&ev))
                                >
                                    {select_options("Select age group", &AGE_GROUPS)}
                                </select>
                            </label>
                            <label class="auth-form__field">
                                <span class="auth-form__label">"Trading Expertise"</span>
                                <select
                                    class="auth-form__select"
                                    prop:value=move || form.get().trading_expertise
                                    on:change=move |ev| form.update(|f| f.trading_expertise = event_target_value(&ev))
                                >
                                    {select_options("Select expertise", &EXPERTISE_LEVELS)}
                                </select>
                            </label>
                        </div>
                        <fieldset class="auth-form__field">
                            <legend class="auth-form__label">"Primary Focus"</legend>
                            <div class="focus-chips">
                                {FOCUS_AREAS
                                    .iter()
                                    .map(|&area| {
                                        view! {
                                            <button
                                                type="button"
                                                class="focus-chip"
                                                class:focus-chip--selected=move || form.get().has_focus(area)
                                                aria-pressed=move || form.get().has_focus(area).to_string()
                                                on:click=move |_| form.update(|f| f.toggle_focus(area))
                                            >
                                                {area}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </fieldset>
                        <button class="button button--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Submitting..." } else { "Request Access" }}
                        </button>
                    </form>
                    <p class="auth-card__footer">
                        "Already a member? " <a href="/login">"Sign in"</a>
                    </p>
                </div>
            </main>
        </div>
    }
}
