//! Thin wrappers over browser globals used by pages.
//!
//! Every helper no-ops outside the browser so SSR renders stay deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Full-page navigation to an external URL (e.g. the Discord OAuth page).
pub fn navigate_external(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::warn!("navigation to {url} was blocked");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Element id targeted by an in-page anchor such as `#features`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?.trim();
    if id.is_empty() { None } else { Some(id) }
}

/// Smooth-scroll to the section an anchor points at.
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
