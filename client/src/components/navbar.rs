//! Landing-page navigation bar.
//!
//! Section links smooth-scroll within the landing page; account links switch
//! between login/signup and the dashboard based on the auth context.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::browser::scroll_to_anchor;

/// `(label, anchor)` pairs for the landing sections.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Features", "#features"),
    ("About", "#about"),
    ("Community", "#community"),
    ("Contact", "#contact"),
];

fn section_links(ui: RwSignal<UiState>, class: &'static str) -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|&(label, href)| {
            view! {
                <a
                    class=class
                    href=href
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ui.update(UiState::close_nav_menu);
                        scroll_to_anchor(href);
                    }
                >
                    {label}
                </a>
            }
        })
        .collect_view()
}

fn account_links(auth: RwSignal<AuthState>, ui: RwSignal<UiState>) -> impl IntoView {
    let close = move |_| ui.update(UiState::close_nav_menu);
    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <a class="navbar__login" href="/login" on:click=close>"Member Login"</a>
                    <a class="navbar__cta" href="/signup" on:click=close>"Apply for Access"</a>
                }
            }
        >
            <a class="navbar__cta" href="/dashboard" on:click=close>"Dashboard"</a>
        </Show>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <img class="navbar__logo" src="/cup.png" alt="Chai Street Trading"/>
                <span class="navbar__name">"Chai Street"</span>
            </a>
            <div class="navbar__links">{section_links(ui, "navbar__link")}</div>
            <div class="navbar__account">{account_links(auth, ui)}</div>
            <button
                class="navbar__menu-toggle"
                aria-label="Toggle menu"
                aria-expanded=move || ui.get().nav_menu_open.to_string()
                on:click=move |_| ui.update(UiState::toggle_nav_menu)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <Show when=move || ui.get().nav_menu_open>
                <div class="navbar__mobile">
                    {section_links(ui, "navbar__mobile-link")}
                    {account_links(auth, ui)}
                </div>
            </Show>
        </nav>
    }
}
