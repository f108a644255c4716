//! Star model for the decorative canvas background.
//!
//! Pure math only: the `StarField` component owns the canvas, the
//! `requestAnimationFrame` loop and resize handling, and asks this module
//! where each star is and how bright it is on every frame.

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const WHITE: &str = "255,255,255";
const SKY: &str = "125,211,252";

/// How stars animate between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarMotion {
    /// Fixed position, brightness oscillates.
    Twinkle,
    /// Constant brightness, slow downward fall that wraps to the top.
    Drift,
}

/// `[min, min + span)` sampling range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub span: f64,
}

impl Range {
    const fn new(min: f64, span: f64) -> Self {
        Self { min, span }
    }

    fn sample(self, rng: &mut SmallRng) -> f64 {
        self.min + rng.random::<f64>() * self.span
    }
}

/// Per-page starfield tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub radius: Range,
    pub alpha: Range,
    /// Twinkle phase advance per frame, in radians.
    pub twinkle_speed: Range,
    /// Drift distance per frame, in CSS pixels.
    pub drift_speed: Range,
    /// Fraction of stars drawn in the sky-blue tint.
    pub tint_share: f64,
    pub motion: StarMotion,
}

impl StarfieldConfig {
    pub const LANDING: Self = Self {
        count: 220,
        radius: Range::new(0.15, 1.4),
        alpha: Range::new(0.1, 0.5),
        twinkle_speed: Range::new(0.003, 0.012),
        drift_speed: Range::new(0.0, 0.0),
        tint_share: 0.12,
        motion: StarMotion::Twinkle,
    };

    /// Login and signup.
    pub const FORM: Self = Self {
        count: 180,
        radius: Range::new(0.15, 1.3),
        alpha: Range::new(0.08, 0.5),
        twinkle_speed: Range::new(0.003, 0.012),
        drift_speed: Range::new(0.0, 0.0),
        tint_share: 0.12,
        motion: StarMotion::Twinkle,
    };

    /// Dashboard and profile: fewer, dimmer, untinted.
    pub const MEMBER: Self = Self {
        count: 160,
        radius: Range::new(0.15, 1.2),
        alpha: Range::new(0.08, 0.45),
        twinkle_speed: Range::new(0.003, 0.01),
        drift_speed: Range::new(0.0, 0.0),
        tint_share: 0.0,
        motion: StarMotion::Twinkle,
    };

    pub const INTRO: Self = Self {
        count: 220,
        radius: Range::new(0.2, 1.3),
        alpha: Range::new(0.1, 0.5),
        twinkle_speed: Range::new(0.0, 0.0),
        drift_speed: Range::new(0.02, 0.05),
        tint_share: 0.0,
        motion: StarMotion::Drift,
    };
}

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
    pub phase: f64,
    pub phase_speed: f64,
    pub drift: f64,
    pub tinted: bool,
}

impl Star {
    /// Brightness for the current frame, clamped to `[0, 1]`.
    #[must_use]
    pub fn opacity(&self, motion: StarMotion) -> f64 {
        let a = match motion {
            StarMotion::Twinkle => self.alpha * (0.4 + 0.6 * self.phase.sin()),
            StarMotion::Drift => self.alpha,
        };
        a.clamp(0.0, 1.0)
    }

    /// CSS fill for the current frame.
    #[must_use]
    pub fn fill_style(&self, motion: StarMotion) -> String {
        let rgb = if self.tinted { SKY } else { WHITE };
        format!("rgba({rgb},{:.3})", self.opacity(motion))
    }
}

/// A field of stars over a `width` x `height` viewport.
pub struct Starfield {
    config: StarfieldConfig,
    stars: Vec<Star>,
    width: f64,
    height: f64,
    rng: SmallRng,
}

impl Starfield {
    #[must_use]
    pub fn new(config: StarfieldConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let width = width.max(0.0);
        let height = height.max(0.0);
        let stars = (0..config.count)
            .map(|_| Star {
                x: rng.random::<f64>() * width,
                y: rng.random::<f64>() * height,
                radius: config.radius.sample(&mut rng),
                alpha: config.alpha.sample(&mut rng),
                phase: rng.random::<f64>() * TAU,
                phase_speed: config.twinkle_speed.sample(&mut rng),
                drift: config.drift_speed.sample(&mut rng),
                tinted: rng.random::<f64>() < config.tint_share,
            })
            .collect();
        Self { config, stars, width, height, rng }
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[must_use]
    pub fn motion(&self) -> StarMotion {
        self.config.motion
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Track a new viewport size. Existing stars keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Advance every star by one frame.
    pub fn step(&mut self) {
        match self.config.motion {
            StarMotion::Twinkle => {
                for star in &mut self.stars {
                    star.phase = (star.phase + star.phase_speed) % TAU;
                }
            }
            StarMotion::Drift => {
                for star in &mut self.stars {
                    star.y += star.drift;
                    if star.y > self.height {
                        star.y = 0.0;
                        star.x = self.rng.random::<f64>() * self.width;
                    }
                }
            }
        }
    }
}
