//! Scroll-triggered fade-in wrapper.
//!
//! Content starts hidden (`.reveal`) and gains `.reveal--visible` the first
//! time it scrolls into view.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Shrinks the viewport bottom so content reveals slightly after entering.
#[cfg(feature = "hydrate")]
const ROOT_MARGIN: &str = "0px 0px -60px 0px";

pub(crate) fn reveal_style(delay_ms: u32) -> String {
    if delay_ms == 0 { String::new() } else { format!("transition-delay: {delay_ms}ms;") }
}

#[cfg(feature = "hydrate")]
fn observe_once(el: &web_sys::Element, visible: RwSignal<bool>) {
    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let hit = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if hit {
                let _ = visible.try_set(true);
                observer.disconnect();
            }
        },
    );
    let opts = web_sys::IntersectionObserverInit::new();
    opts.set_root_margin(ROOT_MARGIN);
    match web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts) {
        Ok(observer) => {
            observer.observe(el);
            // The observer owns the callback until it disconnects after the first hit.
            cb.forget();
        }
        Err(_) => visible.set(true),
    }
}

#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = node_ref.get() {
            observe_once(&el, visible);
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {class}")
            class:reveal--visible=move || visible.get()
            style=reveal_style(delay_ms)
        >
            {children()}
        </div>
    }
}
