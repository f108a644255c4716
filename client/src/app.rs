//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::intro_loader::IntroLoader;
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, not_found::NotFoundPage,
    profile::ProfilePage, signup::SignupPage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/cup.png"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Resolve the stored token into a user once, then mark auth as settled.
fn hydrate_current_user(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = match crate::session::Session::browser().fetch_current_user().await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("current user fetch failed: {e}");
                None
            }
        };
        auth.set(AuthState::settled(user));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}

/// Root application component.
///
/// Provides the auth and UI contexts, overlays the intro splash until it
/// completes, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    hydrate_current_user(auth);

    let on_intro_complete = Callback::new(move |()| ui.update(UiState::complete_intro));

    view! {
        <Stylesheet id="leptos" href="/pkg/chai-street.css"/>
        <Title text="Chai Street Trading"/>

        <Show when=move || !ui.get().intro_complete>
            <IntroLoader on_complete=on_intro_complete/>
        </Show>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
