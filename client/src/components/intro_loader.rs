//! Intro splash shown once per page load before the routes render.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use crate::components::starfield::StarField;
#[cfg(feature = "hydrate")]
use crate::config::INTRO_DURATION_MS;
use crate::util::starfield::StarfieldConfig;

/// Brand words typed out on the splash; `true` marks the accent color.
pub const BRAND_WORDS: [(&str, bool); 3] = [("CHAI", false), ("STREET", true), ("TRADING", true)];

/// Per-letter stagger for the typewriter effect.
const LETTER_STAGGER_MS: u32 = 90;

/// One typed letter with its global position in the sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Letter {
    pub ch: char,
    pub word: usize,
    pub delay_ms: u32,
    pub accent: bool,
}

/// Letters of [`BRAND_WORDS`] with a stagger that runs across word breaks.
#[must_use]
pub fn typewriter_letters() -> Vec<Letter> {
    let mut out = Vec::new();
    let mut delay_ms = 0;
    for (word, (text, accent)) in BRAND_WORDS.iter().enumerate() {
        for ch in text.chars() {
            out.push(Letter { ch, word, delay_ms, accent: *accent });
            delay_ms += LETTER_STAGGER_MS;
        }
    }
    out
}

/// Splash screen. Calls `on_complete` once after `INTRO_DURATION_MS`.
#[component]
pub fn IntroLoader(on_complete: Callback<()>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_for_timer = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(INTRO_DURATION_MS).await;
            if alive_for_timer.load(Ordering::Relaxed) {
                on_complete.run(());
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_complete;
    }

    let words = BRAND_WORDS.len();
    let letters = typewriter_letters();

    view! {
        <div class="intro" role="status" aria-label="Loading Chai Street Trading">
            <StarField config=StarfieldConfig::INTRO contained=true/>
            <div class="intro__glow"></div>
            <img class="intro__logo" src="/cup.png" alt="Chai Street Trading"/>
            <div class="intro__words">
                {(0..words)
                    .map(|w| {
                        let word_letters = letters
                            .iter()
                            .filter(|l| l.word == w)
                            .cloned()
                            .collect::<Vec<_>>();
                        view! {
                            <span class="intro__word">
                                {word_letters
                                    .into_iter()
                                    .map(|l| {
                                        view! {
                                            <span
                                                class="intro__letter"
                                                class:intro__letter--accent=l.accent
                                                style=format!("animation-delay: {}ms;", l.delay_ms)
                                            >
                                                {l.ch.to_string()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="intro__tagline">"Private Trading Community"</p>
            <div class="intro__progress">
                <div class="intro__progress-bar"></div>
            </div>
        </div>
    }
}
