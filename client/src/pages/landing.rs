//! Public landing page.
//!
//! Sections, top to bottom: hero, stats strip, feature cards (`#features`),
//! philosophy with community status (`#about`), trading pathways
//! (`#community`), call to action, footer (`#contact`). Copy lives in the
//! static tables below so the view code stays layout-only.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::reveal::Reveal;
use crate::components::starfield::StarField;
use crate::util::starfield::StarfieldConfig;

pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Pathway {
    pub title: &'static str,
    pub level: &'static str,
    pub points: [&'static str; 4],
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        title: "Long Term Trading",
        desc: "Strategic position building with a focus on macro trends, fundamental analysis, and patient capital allocation.",
    },
    Feature {
        title: "Swing Trading",
        desc: "Capitalize on medium-term price movements using technical setups, volume analysis, and key level identification.",
    },
    Feature {
        title: "Day Trading",
        desc: "Intraday opportunities with strict risk parameters, real-time analysis, and disciplined entry/exit protocols.",
    },
    Feature {
        title: "Portfolio Management",
        desc: "Holistic portfolio construction, risk diversification, drawdown control, and long-term wealth preservation.",
    },
    Feature {
        title: "Private Community",
        desc: "Members-only Discord environment with real-time trade alerts, live discussions, and mentorship from experienced traders.",
    },
    Feature {
        title: "Risk Management",
        desc: "Advanced risk frameworks, position sizing algorithms, and stop-loss discipline built into every strategy.",
    },
];

pub const STATS: [(&str, &str); 4] =
    [("500+", "Active Members"), ("3+", "Years Active"), ("6", "Trading Styles"), ("24/7", "Community")];

/// Community status bars, as percentages.
pub const COMMUNITY_BARS: [(&str, u8); 3] =
    [("Risk Management", 95), ("Technical Analysis", 88), ("Market Context", 92)];

pub static PATHWAYS: [Pathway; 4] = [
    Pathway {
        title: "Long-Term Investing",
        level: "For Novice Investors",
        points: ["Regime awareness framework", "Risk alignment models", "Capital growth structure", "Community access"],
    },
    Pathway {
        title: "Swing Trading",
        level: "Intermediate",
        points: ["Volatility-based setups", "Multi-day execution models", "Structure-based entries", "Real-time discussions"],
    },
    Pathway {
        title: "Day Trading & Futures",
        level: "Advanced",
        points: [
            "Liquidity-based execution",
            "Acceptance & structure models",
            "Intraday risk control",
            "High-conviction trade reviews",
        ],
    },
    Pathway {
        title: "Private 1-on-1 Coaching",
        level: "Selective",
        points: ["Portfolio strategy review", "Psychology alignment", "Personal risk framework", "Tailored mentorship"],
    },
];

/// Stagger between sibling cards.
const CARD_STAGGER_MS: u32 = 80;

/// CSS-safe modifier derived from a title, e.g. `"Day Trading & Futures"` ->
/// `"day-trading-futures"`.
#[must_use]
pub fn slug(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[must_use]
pub fn bar_style(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}

fn stagger(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(0).saturating_mul(CARD_STAGGER_MS)
}

fn hero() -> impl IntoView {
    view! {
        <section class="hero">
            <span class="hero__badge">"Private · Members Only · USA"</span>
            <h1 class="hero__title">
                <span class="hero__line">"Trade with "</span>
                <span class="hero__accent hero__accent--indigo">"Precision."</span>
                <br/>
                <span class="hero__accent hero__accent--gold">"Discipline."</span>
            </h1>
            <p class="hero__lede">
                "Chai Street Trading is a private community built around risk control, market context, "
                "and long-term capital preservation, engineered for serious traders."
            </p>
            <div class="hero__actions">
                <a class="button button--primary" href="/signup">"Apply for Access"</a>
                <a class="button button--ghost" href="/login">"Member Login"</a>
            </div>
        </section>
    }
}

fn stats() -> impl IntoView {
    view! {
        <section class="stats">
            {STATS
                .iter()
                .enumerate()
                .map(|(i, &(value, label))| {
                    view! {
                        <Reveal delay_ms=stagger(i) class="stat">
                            <p class="stat__value">{value}</p>
                            <p class="stat__label">{label}</p>
                        </Reveal>
                    }
                })
                .collect_view()}
        </section>
    }
}

fn features() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <Reveal class="section__header">
                <span class="section__eyebrow">"What We Offer"</span>
                <h2 class="section__title">"Built for " <span class="accent">"Every Trader"</span></h2>
                <p class="section__lede">
                    "Whether you trade daily or build long-term positions, our community gives you the "
                    "structure to do it with discipline."
                </p>
            </Reveal>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(i, feature)| {
                        view! {
                            <Reveal delay_ms=stagger(i) class="feature-card">
                                <div class=format!("feature-card__icon feature-card__icon--{}", slug(feature.title))></div>
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__desc">{feature.desc}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn philosophy() -> impl IntoView {
    view! {
        <section id="about" class="section section--split">
            <Reveal class="philosophy">
                <span class="section__eyebrow">"Our Philosophy"</span>
                <h2 class="section__title">
                    "Markets reward " <span class="accent">"understanding,"</span> " not urgency."
                </h2>
                <p class="section__lede">
                    "Chai Street is not a signal service, not a prediction engine, and not a hype-driven "
                    "community. We help traders understand market structure, so decisions are grounded "
                    "in context, not emotion."
                </p>
                <a class="button button--primary" href="/signup">"Join the Community"</a>
            </Reveal>
            <Reveal delay_ms=CARD_STAGGER_MS class="status-card">
                <div class="status-card__header">
                    <p class="status-card__eyebrow">"Community Status"</p>
                    <p class="status-card__value">"Active & Growing"</p>
                </div>
                {COMMUNITY_BARS
                    .iter()
                    .map(|&(label, percent)| {
                        view! {
                            <div class="status-bar">
                                <div class="status-bar__labels">
                                    <span>{label}</span>
                                    <span class="status-bar__value">{format!("{percent}%")}</span>
                                </div>
                                <div class="status-bar__track">
                                    <div class="status-bar__fill" style=bar_style(percent)></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </Reveal>
        </section>
    }
}

fn pathways() -> impl IntoView {
    view! {
        <section id="community" class="section">
            <Reveal class="section__header">
                <span class="section__eyebrow">"Trading Pathways"</span>
                <h2 class="section__title">
                    "Choose your path. " <span class="accent">"Build with discipline."</span>
                </h2>
            </Reveal>
            <div class="pathway-grid">
                {PATHWAYS
                    .iter()
                    .enumerate()
                    .map(|(i, pathway)| {
                        view! {
                            <Reveal delay_ms=stagger(i) class="pathway-card">
                                <h3 class="pathway-card__title">{pathway.title}</h3>
                                <p class="pathway-card__level">{pathway.level}</p>
                                <ul class="pathway-card__points">
                                    {pathway.points.iter().map(|&point| view! { <li>{point}</li> }).collect_view()}
                                </ul>
                                <a class="pathway-card__cta" href="/signup">"Apply Now →"</a>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn call_to_action() -> impl IntoView {
    view! {
        <section class="section">
            <Reveal class="cta">
                <h2 class="cta__title">"Start Trading " <span class="accent">"with Structure."</span></h2>
                <p class="cta__lede">
                    "Join a community of serious traders focused on risk control, discipline, and long-term growth."
                </p>
                <div class="cta__actions">
                    <a class="button button--primary" href="/signup">"Apply for Access"</a>
                    <a class="button button--ghost" href="/login">"Sign In"</a>
                </div>
            </Reveal>
        </section>
    }
}

fn footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="footer__brand">
                <img class="footer__logo" src="/cup.png" alt="Chai Street Trading"/>
                <p>"Chai Street Trading"</p>
            </div>
            <p class="footer__note">
                "Educational community. Nothing here is financial advice. Trading involves risk of loss."
            </p>
        </footer>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <StarField config=StarfieldConfig::LANDING/>
            <Navbar/>
            <main class="landing__main">
                {hero()}
                {stats()}
                {features()}
                {philosophy()}
                {pathways()}
                {call_to_action()}
            </main>
            {footer()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_punctuation_and_case() {
        assert_eq!(slug("Day Trading & Futures"), "day-trading-futures");
        assert_eq!(slug("Private 1-on-1 Coaching"), "private-1-on-1-coaching");
    }

    #[test]
    fn bar_style_caps_at_full_width() {
        assert_eq!(bar_style(95), "width: 95%;");
        assert_eq!(bar_style(250), "width: 100%;");
    }

    #[test]
    fn feature_slugs_are_unique() {
        let mut slugs: Vec<_> = FEATURES.iter().map(|f| slug(f.title)).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), FEATURES.len());
    }

    #[test]
    fn every_pathway_lists_four_points() {
        assert!(PATHWAYS.iter().all(|p| p.points.iter().all(|point| !point.is_empty())));
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger(0), 0);
        assert_eq!(stagger(3), 3 * CARD_STAGGER_MS);
    }
}
