// ABOUTME: Outfit candidate generation with hard constraints, budgets, and progress reporting
// ABOUTME: Enumerates slot combinations, scores them in parallel, dedups against session history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Outfit Generation
//!
//! The candidate generation pipeline: filter the wardrobe by hard
//! constraints, enumerate slot combinations (Top+Bottom or Dress cores with
//! optional outerwear, shoes, and accessories), score candidates in parallel,
//! drop session repeats and low scorers, and rank the survivors.
//!
//! Hard constraints (occasion formality band, weather warmth bounds,
//! disliked colors) exclude garments outright; stylist filters only bias
//! scores. Generation reports incremental progress through a
//! [`ProgressReporter`] so a UI can stay responsive.

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use capsule_core::constants::limits::MAX_WARDROBE_SIZE;
use capsule_core::errors::{AppError, AppResult};
use capsule_core::models::{
    Garment, Occasion, Outfit, OutfitItem, OutfitSlot, Season, ScoredOutfit, StyleProfile,
    StylistFilters,
};

use crate::config::{GeneratorLimits, IntelligenceConfig, WeatherConfig};
use crate::scoring::{OutfitScorer, ScoringContext};
use crate::session::{HistorySource, SharedSessionHistory};
use crate::weather::WeatherConditions;

/// Accessory options considered per core combination
const ACCESSORY_OPTIONS_PER_CORE: usize = 3;

/// Progress percent reached when filtering completes
const FILTERING_DONE_PERCENT: f64 = 10.0;

/// Progress percent reached when enumeration completes
const ENUMERATING_DONE_PERCENT: f64 = 30.0;

/// Progress percent reached when scoring completes
const SCORING_DONE_PERCENT: f64 = 90.0;

/// Progress percent reached when ranking completes
const RANKING_DONE_PERCENT: f64 = 97.0;

/// A request for outfit recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Occasion the outfits are for
    pub occasion: Occasion,
    /// Target season; defaults to the current calendar season
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    /// Weather conditions, when the caller knows them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherConditions>,
    /// Stylist filter sliders
    #[serde(default)]
    pub filters: StylistFilters,
    /// Explicit formality band override (inclusive, 1-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality_range: Option<(u8, u8)>,
    /// Minimum total score for returned outfits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Maximum outfits to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
    /// Whether to consider accessories and bags
    #[serde(default = "default_include_accessories")]
    pub include_accessories: bool,
}

const fn default_include_accessories() -> bool {
    true
}

impl GenerationRequest {
    /// A request for the given occasion with every other field defaulted
    #[must_use]
    pub fn for_occasion(occasion: Occasion) -> Self {
        Self {
            occasion,
            season: None,
            weather: None,
            filters: StylistFilters::default(),
            formality_range: None,
            min_score: None,
            max_results: None,
            include_accessories: true,
        }
    }
}

/// Phases of a generation run, in order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    /// Applying hard constraints to the wardrobe
    Filtering,
    /// Enumerating candidate combinations
    Enumerating,
    /// Scoring candidates
    Scoring,
    /// Ranking and truncating results
    Ranking,
    /// Generation finished
    Complete,
}

/// One progress event from a generation run
///
/// `percent` is monotonically non-decreasing across the events of a single
/// run and reaches 100 exactly once, on the final `Complete` event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationProgress {
    /// Current phase
    pub phase: GenerationPhase,
    /// Units of work finished in this phase
    pub completed: usize,
    /// Total units of work in this phase
    pub total: usize,
    /// Overall progress (0-100)
    pub percent: f64,
}

/// Receives progress events during generation
pub trait ProgressReporter: Send + Sync {
    /// Called after each unit of progress
    fn report(&self, progress: &GenerationProgress);
}

/// Reporter that discards all events
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _progress: &GenerationProgress) {}
}

/// Trait for generating outfit recommendations
#[async_trait]
pub trait OutfitGeneratorTrait {
    /// Generate scored outfit recommendations for a user's wardrobe
    async fn generate(
        &self,
        user_id: Uuid,
        wardrobe: &[Garment],
        profile: &StyleProfile,
        request: &GenerationRequest,
        progress: &dyn ProgressReporter,
    ) -> AppResult<Vec<ScoredOutfit>>;
}

/// Outfit generator implementation with configurable budgets
pub struct OutfitGenerator {
    limits: GeneratorLimits,
    weather_config: WeatherConfig,
    scorer: OutfitScorer,
    session: SharedSessionHistory,
}

impl OutfitGenerator {
    /// Create a generator from the process-wide configuration
    #[must_use]
    pub fn new(session: SharedSessionHistory) -> Self {
        let global = IntelligenceConfig::global();
        Self {
            limits: global.generator.limits.clone(),
            weather_config: global.weather.clone(),
            scorer: OutfitScorer::new(),
            session,
        }
    }

    /// Create a generator with explicit limits and scorer
    #[must_use]
    pub const fn with_components(
        limits: GeneratorLimits,
        weather_config: WeatherConfig,
        scorer: OutfitScorer,
        session: SharedSessionHistory,
    ) -> Self {
        Self {
            limits,
            weather_config,
            scorer,
            session,
        }
    }

    /// Run the full generation pipeline on the calling thread
    ///
    /// This is the synchronous core behind [`OutfitGeneratorTrait::generate`].
    /// Callers on an async runtime should run it under a blocking task; the
    /// scoring phase keeps every rayon worker busy.
    ///
    /// # Errors
    ///
    /// Returns an error when the wardrobe exceeds the size limit or the
    /// request carries an invalid formality range.
    pub fn generate_blocking(
        &self,
        user_id: Uuid,
        wardrobe: &[Garment],
        profile: &StyleProfile,
        request: &GenerationRequest,
        progress: &dyn ProgressReporter,
    ) -> AppResult<Vec<ScoredOutfit>> {
        if wardrobe.len() > MAX_WARDROBE_SIZE {
            return Err(AppError::out_of_range(format!(
                "wardrobe of {} garments exceeds the {MAX_WARDROBE_SIZE} limit",
                wardrobe.len()
            )));
        }

        let formality_range = Self::effective_formality_range(request)?;
        let season = request
            .season
            .unwrap_or_else(|| Season::from_month(Utc::now().month()));
        let filters = request.filters.clamped();
        let min_score = request.min_score.unwrap_or(self.limits.default_min_score);
        let max_results = request
            .max_results
            .unwrap_or(self.limits.default_max_results)
            .min(self.limits.max_results_cap);

        // Phase 1: hard constraints
        let eligible = self.filter_wardrobe(wardrobe, profile, request, formality_range);
        progress.report(&GenerationProgress {
            phase: GenerationPhase::Filtering,
            completed: eligible.len(),
            total: wardrobe.len(),
            percent: FILTERING_DONE_PERCENT,
        });

        // Phase 2: enumeration
        let slots = self.group_by_slot(&eligible, request, season);
        let mut candidates = self.enumerate_candidates(&slots, request);

        // Session dedup happens before scoring so repeats cost nothing
        candidates.retain(|outfit| !self.session.contains(user_id, &outfit.fingerprint()));
        progress.report(&GenerationProgress {
            phase: GenerationPhase::Enumerating,
            completed: candidates.len(),
            total: self.limits.max_candidates,
            percent: ENUMERATING_DONE_PERCENT,
        });

        // Phase 3: parallel scoring, batched for progress
        let ctx = ScoringContext {
            profile,
            filters,
            season,
            occasion: request.occasion,
            weather: request.weather,
            formality_range,
        };

        let total_candidates = candidates.len();
        let batch_size = self.limits.scoring_batch_size.max(1);
        let mut scored: Vec<ScoredOutfit> = Vec::with_capacity(total_candidates);
        let mut done = 0_usize;
        for batch in candidates.chunks(batch_size) {
            let mut batch_scored: Vec<ScoredOutfit> = batch
                .par_iter()
                .map(|outfit| self.scorer.score(outfit.clone(), &ctx))
                .collect();
            scored.append(&mut batch_scored);
            done += batch.len();
            let fraction = done as f64 / total_candidates as f64;
            progress.report(&GenerationProgress {
                phase: GenerationPhase::Scoring,
                completed: done,
                total: total_candidates,
                percent: (SCORING_DONE_PERCENT - ENUMERATING_DONE_PERCENT)
                    .mul_add(fraction, ENUMERATING_DONE_PERCENT),
            });
        }
        if total_candidates == 0 {
            progress.report(&GenerationProgress {
                phase: GenerationPhase::Scoring,
                completed: 0,
                total: 0,
                percent: SCORING_DONE_PERCENT,
            });
        }

        // Phase 4: rank, apply budgets, remember what we surfaced
        scored.retain(|candidate| candidate.breakdown.total >= min_score);
        scored.sort_by(|a, b| {
            b.breakdown
                .total
                .partial_cmp(&a.breakdown.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.outfit.fingerprint().cmp(&b.outfit.fingerprint()))
        });
        scored.truncate(max_results);

        for candidate in &scored {
            self.session.record(
                user_id,
                &candidate.outfit.fingerprint(),
                HistorySource::Recommended,
            );
        }

        progress.report(&GenerationProgress {
            phase: GenerationPhase::Ranking,
            completed: scored.len(),
            total: max_results,
            percent: RANKING_DONE_PERCENT,
        });
        progress.report(&GenerationProgress {
            phase: GenerationPhase::Complete,
            completed: scored.len(),
            total: scored.len(),
            percent: 100.0,
        });

        Ok(scored)
    }

    /// Effective formality band for a request
    fn effective_formality_range(request: &GenerationRequest) -> AppResult<(u8, u8)> {
        match request.formality_range {
            None => Ok(request.occasion.formality_band()),
            Some((lo, hi)) => {
                if lo > hi || lo < 1 || hi > 5 {
                    return Err(AppError::invalid_input(format!(
                        "formality range {lo}-{hi} is not a valid 1-5 band"
                    )));
                }
                Ok((lo, hi))
            }
        }
    }

    /// Apply hard constraints to the wardrobe
    fn filter_wardrobe<'a>(
        &self,
        wardrobe: &'a [Garment],
        profile: &StyleProfile,
        request: &GenerationRequest,
        formality_range: (u8, u8),
    ) -> Vec<&'a Garment> {
        let (lo, hi) = formality_range;
        let warmth_ceiling = request
            .weather
            .map(|conditions| conditions.warmth_target(&self.weather_config).1);

        wardrobe
            .iter()
            .filter(|garment| {
                if !garment.suits_occasion(request.occasion) {
                    return false;
                }
                if garment.formality() < lo || garment.formality() > hi {
                    return false;
                }
                if garment
                    .colors()
                    .iter()
                    .any(|color| profile.dislikes_color(&color.name))
                {
                    return false;
                }
                // No single garment may exceed the whole outfit's warmth
                // budget for the reported weather
                if let Some(ceiling) = warmth_ceiling {
                    if u32::from(garment.warmth()) > ceiling {
                        return false;
                    }
                }
                true
            })
            .collect()
    }

    /// Group eligible garments by slot, rank by a cheap prior, and cap
    fn group_by_slot<'a>(
        &self,
        eligible: &[&'a Garment],
        request: &GenerationRequest,
        season: Season,
    ) -> HashMap<OutfitSlot, Vec<&'a Garment>> {
        let mut slots: HashMap<OutfitSlot, Vec<&'a Garment>> = HashMap::new();
        for &garment in eligible {
            slots.entry(garment.slot()).or_default().push(garment);
        }

        for garments in slots.values_mut() {
            garments.sort_by(|a, b| {
                let prior = |g: &&Garment| {
                    let occasion_fit = i32::from(g.occasions().contains(&request.occasion));
                    let season_fit = i32::from(g.suits_season(season));
                    (occasion_fit, season_fit)
                };
                prior(b)
                    .cmp(&prior(a))
                    // Under-worn garments first, for rotation variety
                    .then_with(|| a.times_worn().cmp(&b.times_worn()))
                    .then_with(|| a.id().cmp(&b.id()))
            });
            garments.truncate(self.limits.per_slot_cap);
        }
        slots
    }

    /// Enumerate candidate outfits from the slot groups, capped by budget
    fn enumerate_candidates(
        &self,
        slots: &HashMap<OutfitSlot, Vec<&Garment>>,
        request: &GenerationRequest,
    ) -> Vec<Outfit> {
        let empty = Vec::new();
        let tops = slots.get(&OutfitSlot::Top).unwrap_or(&empty);
        let bottoms = slots.get(&OutfitSlot::Bottom).unwrap_or(&empty);
        let dresses = slots.get(&OutfitSlot::Dress).unwrap_or(&empty);
        let shoes = slots.get(&OutfitSlot::Shoes).unwrap_or(&empty);
        let outerwear = slots.get(&OutfitSlot::Outerwear).unwrap_or(&empty);
        let accessories = slots.get(&OutfitSlot::Accessory).unwrap_or(&empty);

        // Core combinations: every dress, and every top x bottom pair
        let mut cores: Vec<Vec<(OutfitSlot, &Garment)>> = Vec::new();
        for &dress in dresses {
            cores.push(vec![(OutfitSlot::Dress, dress)]);
        }
        for &top in tops {
            for &bottom in bottoms {
                cores.push(vec![(OutfitSlot::Top, top), (OutfitSlot::Bottom, bottom)]);
            }
        }

        let outerwear_required = request
            .weather
            .is_some_and(|conditions| conditions.requires_outerwear(&self.weather_config));

        let accessory_options: Vec<&Garment> = if request.include_accessories {
            accessories
                .iter()
                .copied()
                .take(ACCESSORY_OPTIONS_PER_CORE)
                .collect()
        } else {
            Vec::new()
        };

        let mut candidates = Vec::new();
        let mut truncated = false;

        'cores: for core in &cores {
            // Footwear variants: each shoe option, or the bare core when the
            // wardrobe has no eligible shoes
            let shod: Vec<Vec<(OutfitSlot, &Garment)>> = if shoes.is_empty() {
                vec![core.clone()]
            } else {
                shoes
                    .iter()
                    .map(|&shoe| {
                        let mut with_shoes = core.clone();
                        with_shoes.push((OutfitSlot::Shoes, shoe));
                        with_shoes
                    })
                    .collect()
            };

            for base in shod {
                // Outer layer variants: when the weather demands outerwear,
                // only layered candidates survive
                let mut layered: Vec<Vec<(OutfitSlot, &Garment)>> = Vec::new();
                if !outerwear_required || outerwear.is_empty() {
                    layered.push(base.clone());
                }
                for &outer in outerwear {
                    let mut with_outer = base.clone();
                    with_outer.push((OutfitSlot::Outerwear, outer));
                    layered.push(with_outer);
                }

                for variant in layered {
                    // Accessory variants: bare, plus each top-ranked accessory
                    let mut accessorized: Vec<Vec<(OutfitSlot, &Garment)>> =
                        vec![variant.clone()];
                    for &accessory in &accessory_options {
                        let mut with_accessory = variant.clone();
                        with_accessory.push((OutfitSlot::Accessory, accessory));
                        accessorized.push(with_accessory);
                    }

                    for items in accessorized {
                        if candidates.len() >= self.limits.max_candidates {
                            truncated = true;
                            break 'cores;
                        }
                        candidates.push(Outfit::new(
                            items
                                .into_iter()
                                .map(|(slot, garment)| OutfitItem {
                                    slot,
                                    garment: garment.clone(),
                                })
                                .collect(),
                        ));
                    }
                }
            }
        }

        if truncated {
            debug!(
                max_candidates = self.limits.max_candidates,
                cores = cores.len(),
                "candidate enumeration hit the budget; remaining combinations skipped"
            );
        }

        candidates
    }
}

#[async_trait]
impl OutfitGeneratorTrait for OutfitGenerator {
    async fn generate(
        &self,
        user_id: Uuid,
        wardrobe: &[Garment],
        profile: &StyleProfile,
        request: &GenerationRequest,
        progress: &dyn ProgressReporter,
    ) -> AppResult<Vec<ScoredOutfit>> {
        self.generate_blocking(user_id, wardrobe, profile, request, progress)
    }
}
