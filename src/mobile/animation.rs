// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-based tweens for the mobile screens.
//!
//! Everything here is a pure function of elapsed milliseconds, so a host
//! renderer can sample as often as it likes.

use serde::Serialize;

pub const SECTION_DURATION_MS: u64 = 800;

pub const SPLASH_RISE_MS: u64 = 1500;
pub const SPLASH_HOLD_MS: u64 = 700;
pub const SPLASH_FADE_MS: u64 = 1000;
pub const SPLASH_TOTAL_MS: u64 = SPLASH_RISE_MS + SPLASH_HOLD_MS + SPLASH_FADE_MS;

pub const BOOT_FADE_MS: u64 = 1000;

/// Home sections and their start delays, in render order.
pub const HOME_SECTION_DELAYS: [(&str, u64); 5] = [
    ("hero", 250),
    ("carousel", 300),
    ("features", 350),
    ("faq", 380),
    ("footer", 420),
];

pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}

pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// One value moving from `from` to `to` over `duration_ms`, starting after
/// `delay_ms`.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub easing: fn(f64) -> f64,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            delay_ms: 0,
            duration_ms,
            easing: ease_out_quad,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn eased(mut self, easing: fn(f64) -> f64) -> Self {
        self.easing = easing;
        self
    }

    pub fn end_ms(&self) -> u64 {
        self.delay_ms + self.duration_ms
    }

    /// Value at `elapsed_ms`; holds `from` before the delay and `to` after
    /// the end.
    pub fn sample(&self, elapsed_ms: u64) -> f64 {
        if elapsed_ms <= self.delay_ms {
            return self.from;
        }
        if self.duration_ms == 0 || elapsed_ms >= self.end_ms() {
            return self.to;
        }
        let t = (elapsed_ms - self.delay_ms) as f64 / self.duration_ms as f64;
        self.from + (self.to - self.from) * (self.easing)(t)
    }
}

/// Opacity plus transform for one animated view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SectionAnimation {
    pub key: &'static str,
    opacity: Tween,
    translate_y: Tween,
    scale: Tween,
}

impl SectionAnimation {
    fn new(key: &'static str, delay_ms: u64) -> Self {
        Self {
            key,
            opacity: Tween::new(0.0, 1.0, SECTION_DURATION_MS).delayed(delay_ms),
            translate_y: Tween::new(30.0, 0.0, SECTION_DURATION_MS).delayed(delay_ms),
            scale: Tween::new(0.95, 1.0, SECTION_DURATION_MS).delayed(delay_ms),
        }
    }

    pub fn sample(&self, elapsed_ms: u64) -> Frame {
        Frame {
            opacity: self.opacity.sample(elapsed_ms),
            translate_y: self.translate_y.sample(elapsed_ms),
            scale: self.scale.sample(elapsed_ms),
        }
    }

    pub fn end_ms(&self) -> u64 {
        self.opacity.end_ms()
    }
}

/// Staggered entrance of the home screen sections. All sections start
/// together and run in parallel.
#[derive(Debug, Clone)]
pub struct HomeTimeline {
    sections: Vec<SectionAnimation>,
}

impl Default for HomeTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeTimeline {
    pub fn new() -> Self {
        Self {
            sections: HOME_SECTION_DELAYS
                .iter()
                .map(|(key, delay)| SectionAnimation::new(*key, *delay))
                .collect(),
        }
    }

    pub fn sections(&self) -> &[SectionAnimation] {
        &self.sections
    }

    pub fn sample(&self, elapsed_ms: u64) -> Vec<(&'static str, Frame)> {
        self.sections
            .iter()
            .map(|s| (s.key, s.sample(elapsed_ms)))
            .collect()
    }

    pub fn total_ms(&self) -> u64 {
        self.sections.iter().map(|s| s.end_ms()).max().unwrap_or(0)
    }
}

/// Splash overlay values at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplashFrame {
    pub overlay_opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub letter_spacing: f64,
}

/// Brand rise, hold, then fade out of the splash overlay.
#[derive(Debug, Clone, Copy)]
pub struct SplashTimeline {
    translate_y: Tween,
    scale: Tween,
    letter_spacing: Tween,
    fade: Tween,
}

impl Default for SplashTimeline {
    fn default() -> Self {
        Self {
            translate_y: Tween::new(100.0, -50.0, SPLASH_RISE_MS),
            scale: Tween::new(0.9, 1.0, SPLASH_RISE_MS),
            letter_spacing: Tween::new(0.0, 2.0, SPLASH_RISE_MS),
            fade: Tween::new(1.0, 0.0, SPLASH_FADE_MS)
                .delayed(SPLASH_RISE_MS + SPLASH_HOLD_MS)
                .eased(ease_in_out_quad),
        }
    }
}

impl SplashTimeline {
    pub fn sample(&self, elapsed_ms: u64) -> SplashFrame {
        SplashFrame {
            overlay_opacity: self.fade.sample(elapsed_ms),
            translate_y: self.translate_y.sample(elapsed_ms),
            scale: self.scale.sample(elapsed_ms),
            letter_spacing: self.letter_spacing.sample(elapsed_ms),
        }
    }

    pub fn total_ms(&self) -> u64 {
        self.fade.end_ms()
    }

    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.total_ms()
    }
}

/// Root view fade-in after boot.
pub fn boot_fade() -> Tween {
    Tween::new(0.0, 1.0, BOOT_FADE_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_out_quad(2.0), 1.0);
    }

    #[test]
    fn test_tween_holds_outside_window() {
        let t = Tween::new(30.0, 0.0, 800).delayed(250);
        assert_eq!(t.sample(0), 30.0);
        assert_eq!(t.sample(250), 30.0);
        assert_eq!(t.sample(1050), 0.0);
        assert_eq!(t.sample(5000), 0.0);
        let mid = t.sample(650);
        assert!(mid > 0.0 && mid < 30.0);
    }

    #[test]
    fn test_boot_fade() {
        let fade = boot_fade();
        assert_eq!(fade.sample(0), 0.0);
        assert_eq!(fade.end_ms(), BOOT_FADE_MS);
        assert_eq!(fade.sample(BOOT_FADE_MS), 1.0);
    }

    #[test]
    fn test_home_sections_staggered() {
        let timeline = HomeTimeline::new();
        let keys: Vec<_> = timeline.sections().iter().map(|s| s.key).collect();
        assert_eq!(keys, ["hero", "carousel", "features", "faq", "footer"]);
        assert_eq!(timeline.total_ms(), 420 + SECTION_DURATION_MS);

        let frames = timeline.sample(300);
        assert!(frames[0].1.opacity > 0.0);
        assert_eq!(frames[1].1.opacity, 0.0);
        assert_eq!(frames[4].1.translate_y, 30.0);
        assert_eq!(frames[4].1.scale, 0.95);
    }

    #[test]
    fn test_splash_total_and_fade() {
        let splash = SplashTimeline::default();
        assert_eq!(splash.total_ms(), 3200);
        assert_eq!(SPLASH_TOTAL_MS, 3200);

        let risen = splash.sample(SPLASH_RISE_MS);
        assert_eq!(risen.translate_y, -50.0);
        assert_eq!(risen.letter_spacing, 2.0);
        assert_eq!(risen.overlay_opacity, 1.0);

        assert_eq!(splash.sample(2200).overlay_opacity, 1.0);
        assert_eq!(splash.sample(3200).overlay_opacity, 0.0);
        assert!(!splash.is_finished(3199));
        assert!(splash.is_finished(3200));
    }
}
