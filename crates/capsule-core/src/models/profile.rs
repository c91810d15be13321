// ABOUTME: User style profile and stylist filter models for biasing outfit generation
// ABOUTME: Weighted style preferences, disliked colors, and tunable 0-1 filter sliders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::garment::StyleTag;
use crate::constants::garment_ranges::{MAX_FORMALITY, MIN_FORMALITY};

/// Per-user style preferences driving the style-matching score
///
/// Style preference weights are relative: a wardrobe-wide preference of
/// `{classic: 1.0, minimalist: 0.5}` scores classic garments twice as high as
/// minimalist ones and everything else at a configured baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Owning user
    pub user_id: Uuid,
    /// Relative weights for preferred styles (missing tags score baseline)
    pub style_preferences: HashMap<StyleTag, f64>,
    /// Color names the user never wants recommended (case-insensitive)
    pub disliked_colors: Vec<String>,
    /// Default formality level when a request doesn't specify one (1-5)
    pub default_formality: u8,
}

impl StyleProfile {
    /// A neutral profile for a user with no stored preferences
    #[must_use]
    pub fn default_for(user_id: Uuid) -> Self {
        Self {
            user_id,
            style_preferences: HashMap::new(),
            disliked_colors: Vec::new(),
            default_formality: 2,
        }
    }

    /// Preference weight for a style tag (1.0 when the user has no stated
    /// preferences at all, baseline 0.3 for unlisted tags otherwise)
    #[must_use]
    pub fn preference_weight(&self, tag: StyleTag) -> f64 {
        if self.style_preferences.is_empty() {
            return 1.0;
        }
        self.style_preferences.get(&tag).copied().unwrap_or(0.3)
    }

    /// True when the given color name is on the user's disliked list
    #[must_use]
    pub fn dislikes_color(&self, color_name: &str) -> bool {
        self.disliked_colors
            .iter()
            .any(|disliked| disliked.eq_ignore_ascii_case(color_name))
    }

    /// Clamp stored attributes into their valid ranges
    pub fn normalize(&mut self) {
        self.default_formality = self.default_formality.clamp(MIN_FORMALITY, MAX_FORMALITY);
        for weight in self.style_preferences.values_mut() {
            *weight = weight.clamp(0.0, 1.0);
        }
    }
}

/// User-tunable sliders biasing candidate generation
///
/// Each filter is a 0-1 value with 0.5 as the neutral midpoint. Filters bias
/// scoring and enumeration; they never hard-exclude garments on their own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StylistFilters {
    /// 0 = dress down, 1 = dress up within the occasion's band
    pub formality: f64,
    /// 0 = muted and safe, 1 = saturated colors and statement patterns
    pub boldness: f64,
    /// 0 = minimal pieces, 1 = favor layered outfits
    pub layering: f64,
    /// 0 = neutral palette, 1 = favor colorful combinations
    pub colorfulness: f64,
}

impl StylistFilters {
    /// Filters clamped into the 0-1 range
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            formality: self.formality.clamp(0.0, 1.0),
            boldness: self.boldness.clamp(0.0, 1.0),
            layering: self.layering.clamp(0.0, 1.0),
            colorfulness: self.colorfulness.clamp(0.0, 1.0),
        }
    }

    /// Signed deviation of a filter from its neutral midpoint (-0.5 to 0.5)
    #[must_use]
    pub fn bias(value: f64) -> f64 {
        value.clamp(0.0, 1.0) - 0.5
    }
}

impl Default for StylistFilters {
    fn default() -> Self {
        Self {
            formality: 0.5,
            boldness: 0.5,
            layering: 0.5,
            colorfulness: 0.5,
        }
    }
}
