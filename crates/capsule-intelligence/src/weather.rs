// ABOUTME: Caller-provided weather conditions mapped to outfit warmth targets
// ABOUTME: Temperature bands, outerwear requirements, and warmth fit scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Weather Suitability
//!
//! Translates weather conditions supplied by the caller into generation
//! inputs: a temperature band, a target range for total outfit warmth, and
//! whether outerwear is required. Fetching weather from any external API is
//! out of scope; conditions arrive with the generation request.

use serde::{Deserialize, Serialize};

use crate::config::WeatherConfig;

/// Weather conditions at generation time, supplied by the caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherConditions {
    /// Air temperature in Celsius
    pub temperature_celsius: f64,
    /// True when rain or snow is expected
    pub precipitation: bool,
    /// Wind speed in meters per second
    pub wind_speed_mps: f64,
}

impl WeatherConditions {
    /// Clear, calm conditions at the given temperature
    #[must_use]
    pub const fn clear(temperature_celsius: f64) -> Self {
        Self {
            temperature_celsius,
            precipitation: false,
            wind_speed_mps: 0.0,
        }
    }

    /// Temperature band for these conditions
    #[must_use]
    pub fn band(&self, config: &WeatherConfig) -> TemperatureBand {
        TemperatureBand::from_celsius(self.temperature_celsius, config)
    }

    /// True when these conditions call for an outer layer
    #[must_use]
    pub fn requires_outerwear(&self, config: &WeatherConfig) -> bool {
        self.precipitation
            || self.wind_speed_mps >= config.conditions.strong_wind_mps
            || self.band(config) == TemperatureBand::Cold
    }

    /// Target range for total outfit warmth under these conditions
    #[must_use]
    pub fn warmth_target(&self, config: &WeatherConfig) -> (u32, u32) {
        self.band(config).warmth_target(config)
    }
}

/// Coarse temperature classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    /// Below the cold threshold
    Cold,
    /// Between cold and mild thresholds
    Mild,
    /// Between mild and warm thresholds
    Warm,
    /// Above the warm threshold
    Hot,
}

impl TemperatureBand {
    /// Classify a temperature in Celsius
    #[must_use]
    pub fn from_celsius(celsius: f64, config: &WeatherConfig) -> Self {
        if celsius < config.temperature.cold_below_celsius {
            Self::Cold
        } else if celsius < config.temperature.mild_below_celsius {
            Self::Mild
        } else if celsius < config.temperature.warm_below_celsius {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    /// Target range for total outfit warmth in this band
    #[must_use]
    pub const fn warmth_target(&self, config: &WeatherConfig) -> (u32, u32) {
        match self {
            Self::Cold => config.warmth_targets.cold,
            Self::Mild => config.warmth_targets.mild,
            Self::Warm => config.warmth_targets.warm,
            Self::Hot => config.warmth_targets.hot,
        }
    }
}

/// How well a total outfit warmth fits a target range (0-1)
///
/// Scores 1.0 inside the range and falls off linearly outside, reaching 0 at
/// six warmth points past either bound.
#[must_use]
pub fn warmth_fit(total_warmth: u32, target: (u32, u32)) -> f64 {
    const FALLOFF: f64 = 6.0;
    let (lo, hi) = target;
    let warmth = f64::from(total_warmth);
    let distance = if warmth < f64::from(lo) {
        f64::from(lo) - warmth
    } else if warmth > f64::from(hi) {
        warmth - f64::from(hi)
    } else {
        return 1.0;
    };
    (1.0 - distance / FALLOFF).max(0.0)
}
