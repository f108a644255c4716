//! Read-only member profile.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::dashboard::member_header;
use crate::components::starfield::StarField;
use crate::net::types::{DiscordStatus, User};
use crate::session::signup::{AGE_GROUPS, EXPERTISE_LEVELS, choice_label};
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::starfield::StarfieldConfig;

/// `(label, value)` rows shown on the profile card.
#[must_use]
pub fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    let discord = match user.discord_status() {
        DiscordStatus::Linked { username } => format!("Connected as {username}"),
        DiscordStatus::NotLinked => "Not connected".to_owned(),
    };
    let focus = user.focus_tags().join(", ");
    vec![
        ("Name", user.full_name()),
        ("Email", user.email.clone()),
        ("Membership Tier", user.tier_label()),
        ("Age Group", choice_label(&AGE_GROUPS, &user.age_group).to_owned()),
        ("Trading Expertise", choice_label(&EXPERTISE_LEVELS, &user.trading_expertise).to_owned()),
        ("Primary Focus", if focus.is_empty() { "None selected".to_owned() } else { focus }),
        ("Discord", discord),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="member-page">
            <StarField config=StarfieldConfig::MEMBER/>
            {member_header(auth)}
            <main class="profile">
                {move || match auth.get().user {
                    Some(user) => view! {
                        <h1 class="profile__title">"Your Profile"</h1>
                        <dl class="profile__card">
                            {profile_rows(&user)
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <dt class="profile__label">{label}</dt>
                                        <dd class="profile__value">{value}</dd>
                                    }
                                })
                                .collect_view()}
                        </dl>
                    }
                    .into_any(),
                    None => view! { <p class="profile__loading">"Loading profile..."</p> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> User {
        User {
            id: "u-2".to_owned(),
            email: "raj@example.com".to_owned(),
            first_name: "Raj".to_owned(),
            last_name: "Mehta".to_owned(),
            age_group: "20-30".to_owned(),
            trading_expertise: "expert".to_owned(),
            focus_areas: String::new(),
            tier: Some("PRO".to_owned()),
            discord_user_id: Some("42".to_owned()),
            discord_username: None,
        }
    }

    fn row<'a>(rows: &'a [(&str, String)], label: &str) -> &'a str {
        rows.iter().find(|(l, _)| *l == label).map(|(_, v)| v.as_str()).unwrap()
    }

    #[test]
    fn rows_cover_tier_and_discord() {
        let rows = profile_rows(&member());
        assert_eq!(row(&rows, "Name"), "Raj Mehta");
        assert_eq!(row(&rows, "Membership Tier"), "PRO");
        assert_eq!(row(&rows, "Trading Expertise"), "Expert");
        assert_eq!(row(&rows, "Discord"), "Connected as Discord user");
    }

    #[test]
    fn empty_focus_reads_none_selected() {
        let rows = profile_rows(&member());
        assert_eq!(row(&rows, "Primary Focus"), "None selected");
    }

    #[test]
    fn unlinked_discord_reads_not_connected() {
        let mut user = member();
        user.discord_user_id = None;
        user.tier = None;
        let rows = profile_rows(&user);
        assert_eq!(row(&rows, "Discord"), "Not connected");
        assert_eq!(row(&rows, "Membership Tier"), "FREE");
    }
}
