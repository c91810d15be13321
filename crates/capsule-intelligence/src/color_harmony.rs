// ABOUTME: Color harmony computation over the hue wheel for outfit scoring
// ABOUTME: Classifies pairwise color relationships and combines them into a 0-100 score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Color Harmony
//!
//! Scores how well a set of garment colors work together. Colors are parsed
//! from hex into HSL, classified as neutral or chromatic, and every pair is
//! assigned a hue-wheel relationship (monochrome, analogous, complementary,
//! triadic, split-complementary, or clash). Pair scores are averaged into an
//! outfit-level harmony score.
//!
//! Neutrals (low saturation, or near-black/near-white) pair well with
//! anything, so an all-neutral wardrobe still scores high.

use capsule_core::models::{Color, Garment, Rgb};

/// Hue tolerance for a monochrome relationship (degrees)
const MONOCHROME_TOLERANCE_DEG: f64 = 15.0;

/// Maximum hue separation for an analogous relationship (degrees)
const ANALOGOUS_MAX_DEG: f64 = 40.0;

/// Hue tolerance around 120 degrees for a triadic relationship
const TRIADIC_TOLERANCE_DEG: f64 = 12.0;

/// Hue tolerance around 150 degrees for a split-complementary relationship
const SPLIT_COMPLEMENTARY_TOLERANCE_DEG: f64 = 12.0;

/// Hue tolerance around 180 degrees for a complementary relationship
const COMPLEMENTARY_TOLERANCE_DEG: f64 = 18.0;

/// Saturation below which a color reads as neutral
const NEUTRAL_SATURATION_MAX: f64 = 0.18;

/// Lightness below which a color reads as near-black (neutral)
const NEAR_BLACK_LIGHTNESS: f64 = 0.12;

/// Lightness above which a color reads as near-white (neutral)
const NEAR_WHITE_LIGHTNESS: f64 = 0.92;

/// Saturation above which a color counts as saturated for clash detection
const CLASH_SATURATION_MIN: f64 = 0.45;

/// HSL representation of a parsed color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees (0-360)
    pub h: f64,
    /// Saturation (0-1)
    pub s: f64,
    /// Lightness (0-1)
    pub l: f64,
}

impl Hsl {
    /// Convert RGB channels to HSL
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = f64::midpoint(max, min);

        if delta.abs() < f64::EPSILON {
            return Self { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if (max - r).abs() < f64::EPSILON {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if (max - g).abs() < f64::EPSILON {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self {
            h: h.rem_euclid(360.0),
            s,
            l,
        }
    }
}

/// A garment color parsed and classified for harmony scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorProfile {
    /// HSL components
    pub hsl: Hsl,
    /// True when the color reads as neutral
    pub neutral: bool,
}

impl ColorProfile {
    /// Parse and classify a color; `None` when the hex value is malformed
    #[must_use]
    pub fn from_color(color: &Color) -> Option<Self> {
        let hsl = Hsl::from_rgb(color.rgb()?);
        let neutral = hsl.s < NEUTRAL_SATURATION_MAX
            || hsl.l < NEAR_BLACK_LIGHTNESS
            || hsl.l > NEAR_WHITE_LIGHTNESS;
        Some(Self { hsl, neutral })
    }

    /// True when the color is saturated enough to clash
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        !self.neutral && self.hsl.s >= CLASH_SATURATION_MIN
    }
}

/// Hue-wheel relationship between two colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRelation {
    /// At least one color is neutral
    Neutral,
    /// Same hue, varying lightness or saturation
    Monochrome,
    /// Hues within the analogous range
    Analogous,
    /// Hues roughly 120 degrees apart
    Triadic,
    /// Hues roughly 150 degrees apart
    SplitComplementary,
    /// Hues roughly opposite on the wheel
    Complementary,
    /// Saturated hues at an awkward separation
    Clash,
    /// None of the above; a workable but unremarkable pairing
    Unrelated,
}

impl PairRelation {
    /// Classify the relationship between two color profiles
    #[must_use]
    pub fn classify(a: &ColorProfile, b: &ColorProfile) -> Self {
        if a.neutral || b.neutral {
            return Self::Neutral;
        }

        let delta = hue_delta(a.hsl.h, b.hsl.h);

        if delta <= MONOCHROME_TOLERANCE_DEG {
            Self::Monochrome
        } else if delta <= ANALOGOUS_MAX_DEG {
            Self::Analogous
        } else if (delta - 120.0).abs() <= TRIADIC_TOLERANCE_DEG {
            Self::Triadic
        } else if (delta - 150.0).abs() <= SPLIT_COMPLEMENTARY_TOLERANCE_DEG {
            Self::SplitComplementary
        } else if (180.0 - delta) <= COMPLEMENTARY_TOLERANCE_DEG {
            Self::Complementary
        } else if a.is_saturated() && b.is_saturated() {
            Self::Clash
        } else {
            Self::Unrelated
        }
    }

    /// Base score for a pair with this relationship (0-100)
    #[must_use]
    pub const fn base_score(&self) -> f64 {
        match self {
            Self::Monochrome => 90.0,
            Self::Complementary => 88.0,
            Self::Neutral => 85.0,
            Self::Analogous => 82.0,
            Self::Triadic => 78.0,
            Self::SplitComplementary => 75.0,
            Self::Unrelated => 55.0,
            Self::Clash => 25.0,
        }
    }

    /// Short description used in score reasons
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral pairing",
            Self::Monochrome => "monochrome palette",
            Self::Analogous => "analogous colors",
            Self::Triadic => "triadic accent",
            Self::SplitComplementary => "split-complementary accent",
            Self::Complementary => "complementary contrast",
            Self::Clash => "clashing colors",
            Self::Unrelated => "loosely related colors",
        }
    }
}

/// Shortest angular distance between two hues (0-180 degrees)
#[must_use]
pub fn hue_delta(a: f64, b: f64) -> f64 {
    let delta = (a - b).rem_euclid(360.0);
    delta.min(360.0 - delta)
}

/// Score a single color pair (0-100)
#[must_use]
pub fn pair_score(a: &ColorProfile, b: &ColorProfile) -> f64 {
    let relation = PairRelation::classify(a, b);
    match relation {
        // Two identical saturated hues with no lightness contrast read flat
        PairRelation::Monochrome => {
            if (a.hsl.l - b.hsl.l).abs() < 0.08 {
                relation.base_score() - 15.0
            } else {
                relation.base_score()
            }
        }
        other => other.base_score(),
    }
}

/// Collect color profiles for every valid garment color in the outfit
#[must_use]
pub fn outfit_color_profiles(garments: &[&Garment]) -> Vec<ColorProfile> {
    garments
        .iter()
        .flat_map(|garment| garment.colors())
        .filter_map(ColorProfile::from_color)
        .collect()
}

/// Outfit-level harmony score: mean of all pairwise scores (0-100)
///
/// A single-color outfit scores a safe-but-flat 75. Outfits with no parseable
/// colors score 0.
#[must_use]
pub fn harmony_score(profiles: &[ColorProfile]) -> f64 {
    match profiles.len() {
        0 => 0.0,
        1 => 75.0,
        _ => {
            let mut sum = 0.0;
            let mut pairs = 0_u32;
            for (i, a) in profiles.iter().enumerate() {
                for b in profiles.iter().skip(i + 1) {
                    sum += pair_score(a, b);
                    pairs += 1;
                }
            }
            sum / f64::from(pairs)
        }
    }
}

/// The dominant (most common) pair relation across an outfit's colors
///
/// Used for human-readable score reasons; `None` for outfits with fewer than
/// two colors.
#[must_use]
pub fn dominant_relation(profiles: &[ColorProfile]) -> Option<PairRelation> {
    let mut counts: Vec<(PairRelation, usize)> = Vec::new();
    for (i, a) in profiles.iter().enumerate() {
        for b in profiles.iter().skip(i + 1) {
            let relation = PairRelation::classify(a, b);
            match counts.iter_mut().find(|(r, _)| *r == relation) {
                Some((_, count)) => *count += 1,
                None => counts.push((relation, 1)),
            }
        }
    }
    counts
        .into_iter()
        .max_by_key(|&(_, count)| count)
        .map(|(relation, _)| relation)
}

/// Share of an outfit's colors that are chromatic (non-neutral)
#[must_use]
pub fn colorful_share(profiles: &[ColorProfile]) -> f64 {
    if profiles.is_empty() {
        return 0.0;
    }
    let colorful = profiles.iter().filter(|p| !p.neutral).count();
    colorful as f64 / profiles.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(hex: &str) -> ColorProfile {
        ColorProfile::from_color(&Color::new("test", hex)).expect("valid hex")
    }

    #[test]
    fn hsl_conversion_matches_known_values() {
        let red = Hsl::from_rgb(Rgb::new(255, 0, 0));
        assert!(red.h.abs() < 1e-9);
        assert!((red.s - 1.0).abs() < 1e-9);
        assert!((red.l - 0.5).abs() < 1e-9);

        let grey = Hsl::from_rgb(Rgb::new(128, 128, 128));
        assert!(grey.s.abs() < 1e-9);
    }

    #[test]
    fn hue_delta_wraps_around_the_wheel() {
        assert!((hue_delta(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((hue_delta(0.0, 180.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn neutrals_are_classified_as_neutral() {
        assert!(profile("#000000").neutral);
        assert!(profile("#ffffff").neutral);
        assert!(profile("#808080").neutral);
        assert!(!profile("#ff0000").neutral);
    }

    #[test]
    fn complementary_hues_are_detected() {
        // Red vs cyan-ish green, ~180 degrees apart
        let a = profile("#ff0000");
        let b = profile("#00ffff");
        assert_eq!(PairRelation::classify(&a, &b), PairRelation::Complementary);
    }

    #[test]
    fn clash_requires_saturation() {
        // Orange vs green, ~90 degrees apart, both saturated
        let a = profile("#ff8000");
        let b = profile("#00c000");
        assert_eq!(PairRelation::classify(&a, &b), PairRelation::Clash);
    }

    #[test]
    fn all_neutral_outfit_scores_high() {
        let profiles = vec![profile("#111111"), profile("#f5f5f5"), profile("#888888")];
        assert!(harmony_score(&profiles) >= 80.0);
    }

    #[test]
    fn clashing_outfit_scores_below_neutral_outfit() {
        let clashing = vec![profile("#ff8000"), profile("#00c000")];
        let neutral = vec![profile("#111111"), profile("#f5f5f5")];
        assert!(harmony_score(&clashing) < harmony_score(&neutral));
    }

    #[test]
    fn flat_monochrome_is_penalized() {
        let a = profile("#ff0000");
        let b = profile("#fe0101");
        assert!(pair_score(&a, &b) < PairRelation::Monochrome.base_score());
    }
}
