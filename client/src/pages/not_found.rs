//! Fallback for unknown routes.

use leptos::prelude::*;

use crate::components::starfield::StarField;
use crate::util::starfield::StarfieldConfig;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <StarField config=StarfieldConfig::FORM/>
            <p class="not-found__code">"404"</p>
            <h1 class="not-found__title">"This page doesn't exist."</h1>
            <a class="button button--primary" href="/">"Back to Chai Street"</a>
        </div>
    }
}
