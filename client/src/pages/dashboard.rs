//! Member dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Until the member links Discord the page shows
//! a connect gate; once linked it shows the connected confirmation instead.
//! The two are mutually exclusive and driven by [`User::discord_status`].

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::starfield::StarField;
use crate::net::types::{DiscordStatus, User};
use crate::session::signup::{AGE_GROUPS, EXPERTISE_LEVELS, choice_label};
use crate::state::auth::AuthState;
use crate::util::auth::{clear_user, install_unauth_redirect};
use crate::util::starfield::StarfieldConfig;

pub const DISCORD_LINK_FAILED_MESSAGE: &str = "Unable to start Discord connection";

/// `(label, value)` rows for the member summary cards.
#[must_use]
pub fn info_cards(user: &User) -> [(&'static str, String); 3] {
    [
        ("Email", user.email.clone()),
        ("Age Group", choice_label(&AGE_GROUPS, &user.age_group).to_owned()),
        ("Expertise", choice_label(&EXPERTISE_LEVELS, &user.trading_expertise).to_owned()),
    ]
}

/// Ask the backend for an OAuth URL and leave the app for it.
fn start_discord_link() {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        match crate::session::Session::browser().start_discord_link().await {
            Ok(url) => crate::util::browser::navigate_external(&url),
            Err(e) => {
                log::warn!("discord link failed: {e}");
                crate::util::browser::alert(DISCORD_LINK_FAILED_MESSAGE);
            }
        }
    });
}

fn discord_panel(status: DiscordStatus) -> AnyView {
    match status {
        DiscordStatus::NotLinked => view! {
            <section class="discord-gate">
                <h2 class="discord-gate__title">"Connect your Discord"</h2>
                <p class="discord-gate__lede">
                    "Community access, trade discussions, and live alerts happen in our private Discord. "
                    "Link your account to unlock them."
                </p>
                <button class="button button--primary" on:click=move |_| start_discord_link()>
                    "Connect Discord"
                </button>
            </section>
        }
        .into_any(),
        DiscordStatus::Linked { username } => view! {
            <section class="discord-linked">
                <span class="discord-linked__dot"></span>
                <p class="discord-linked__text">
                    "Connected to Discord as " <strong>{username}</strong>
                </p>
            </section>
        }
        .into_any(),
    }
}

fn member_view(user: User) -> impl IntoView {
    let cards = info_cards(&user);
    let tags = user.focus_tags();
    let has_tags = !tags.is_empty();
    view! {
        <div class="dashboard__welcome">
            <p class="dashboard__eyebrow">"Member Dashboard"</p>
            <h1 class="dashboard__title">"Welcome back, " {user.display_name()}</h1>
        </div>
        {discord_panel(user.discord_status())}
        <div class="info-grid">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="info-card">
                            <p class="info-card__label">{label}</p>
                            <p class="info-card__value">{value}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        {has_tags
            .then(|| {
                view! {
                    <section class="focus-summary">
                        <p class="focus-summary__label">"Primary Focus"</p>
                        <div class="focus-chips">
                            {tags
                                .into_iter()
                                .map(|tag| view! { <span class="focus-chip focus-chip--selected">{tag}</span> })
                                .collect_view()}
                        </div>
                    </section>
                }
            })}
    }
}

/// Shared member header for protected routes.
pub(crate) fn member_header(auth: RwSignal<AuthState>) -> impl IntoView {
    let on_logout = move |_| {
        crate::session::Session::browser().logout();
        clear_user(auth);
    };
    view! {
        <header class="member-header">
            <a class="member-header__brand" href="/">
                <img class="member-header__logo" src="/cup.png" alt="Chai Street Trading"/>
                <span>"Chai Street"</span>
            </a>
            <nav class="member-header__nav">
                <a href="/dashboard">"Dashboard"</a>
                <a href="/profile">"Profile"</a>
                <button class="button button--ghost" on:click=on_logout>"Log out"</button>
            </nav>
        </header>
    }
}

/// Dashboard page. Redirects to `/login` once auth settles without a user.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="member-page">
            <StarField config=StarfieldConfig::MEMBER/>
            {member_header(auth)}
            <main class="dashboard">
                {move || match auth.get().user {
                    Some(user) => member_view(user).into_any(),
                    None => view! { <p class="dashboard__loading">"Loading dashboard..."</p> }.into_any(),
                }}
            </main>
        </div>
    }
}
