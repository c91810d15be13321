// ABOUTME: Outfit service orchestrating wardrobe storage and the recommendation engine
// ABOUTME: Generation with progress, outfit saving and rejection, wear tracking, insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! # Outfit Service
//!
//! The orchestration layer between the REST API and the engine: loads the
//! wardrobe and style profile, runs generation on a blocking thread (the
//! scoring phase saturates rayon workers), feeds rejections back into the
//! session history, and wraps saved-outfit and wear-record persistence.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use capsule_core::errors::{AppError, AppResult};
use capsule_core::models::{
    Outfit, SavedOutfit, ScoreBreakdown, ScoredOutfit, StyleProfile, WearRecord,
};
use capsule_intelligence::generator::{
    GenerationRequest, NoopProgress, OutfitGenerator, ProgressReporter,
};
use capsule_intelligence::insights::{WardrobeInsights, WardrobeRecommendation};
use capsule_intelligence::session::{HistorySource, SharedSessionHistory};

use crate::database::Database;
use crate::models::Occasion;

/// Service for outfit generation and outfit lifecycle operations
pub struct OutfitService {
    database: Database,
    generator: Arc<OutfitGenerator>,
    session: SharedSessionHistory,
    insights: WardrobeInsights,
}

impl OutfitService {
    /// Create a service over a database with a fresh session history
    #[must_use]
    pub fn new(database: Database, session: SharedSessionHistory) -> Self {
        Self {
            database,
            generator: Arc::new(OutfitGenerator::new(Arc::clone(&session))),
            session,
            insights: WardrobeInsights::new(),
        }
    }

    /// Generate recommendations without progress reporting
    ///
    /// # Errors
    ///
    /// Returns an error when storage fails or the request is invalid.
    pub async fn generate(
        &self,
        user_id: Uuid,
        request: GenerationRequest,
    ) -> AppResult<Vec<ScoredOutfit>> {
        self.generate_with_progress(user_id, request, Arc::new(NoopProgress))
            .await
    }

    /// Generate recommendations, forwarding progress to the given reporter
    ///
    /// Generation runs on a blocking thread so the scoring phase never
    /// starves the async runtime.
    ///
    /// # Errors
    ///
    /// Returns an error when storage fails or the request is invalid.
    pub async fn generate_with_progress(
        &self,
        user_id: Uuid,
        request: GenerationRequest,
        reporter: Arc<dyn ProgressReporter>,
    ) -> AppResult<Vec<ScoredOutfit>> {
        let wardrobe = self.database.list_garments(user_id).await?;
        let profile = self.load_profile(user_id).await?;

        debug!(
            %user_id,
            wardrobe_size = wardrobe.len(),
            occasion = %request.occasion,
            "starting outfit generation"
        );

        let generator = Arc::clone(&self.generator);
        let outfits = tokio::task::spawn_blocking(move || {
            generator.generate_blocking(user_id, &wardrobe, &profile, &request, reporter.as_ref())
        })
        .await
        .map_err(|err| AppError::internal(format!("generation task failed: {err}")))??;

        info!(%user_id, results = outfits.len(), "outfit generation finished");
        Ok(outfits)
    }

    /// Save an outfit the user wants to keep
    ///
    /// # Errors
    ///
    /// Returns an error when the garment list is empty or storage fails.
    pub async fn save_outfit(
        &self,
        user_id: Uuid,
        name: Option<String>,
        garment_ids: Vec<Uuid>,
        breakdown: Option<ScoreBreakdown>,
    ) -> AppResult<SavedOutfit> {
        if garment_ids.is_empty() {
            return Err(AppError::invalid_input(
                "a saved outfit needs at least one garment",
            ));
        }
        // Every referenced garment must exist in this user's wardrobe
        for garment_id in &garment_ids {
            self.database.get_garment(user_id, *garment_id).await?;
        }

        let outfit = SavedOutfit {
            id: Uuid::new_v4(),
            user_id,
            name,
            garment_ids,
            breakdown,
            times_worn: 0,
            last_worn: None,
            saved_at: Utc::now(),
        };
        self.database.insert_saved_outfit(&outfit).await?;
        Ok(outfit)
    }

    /// List a user's saved outfits
    ///
    /// # Errors
    ///
    /// Returns an error when storage fails.
    pub async fn list_saved_outfits(&self, user_id: Uuid) -> AppResult<Vec<SavedOutfit>> {
        Ok(self.database.list_saved_outfits(user_id).await?)
    }

    /// Record that the user rejected a combination
    ///
    /// The combination's fingerprint enters the session history so it won't
    /// be recommended again this session.
    ///
    /// # Errors
    ///
    /// Returns an error when the garment list is empty.
    pub fn reject_outfit(&self, user_id: Uuid, garment_ids: &[Uuid]) -> AppResult<()> {
        if garment_ids.is_empty() {
            return Err(AppError::invalid_input(
                "a rejection needs at least one garment",
            ));
        }
        let fingerprint = Outfit::fingerprint_of(garment_ids);
        self.session
            .record(user_id, &fingerprint, HistorySource::Rejected);
        debug!(%user_id, fingerprint, "outfit rejected for this session");
        Ok(())
    }

    /// Record an outfit being worn, bumping wear counters transactionally
    ///
    /// # Errors
    ///
    /// Returns an error when the outfit doesn't exist or storage fails.
    pub async fn record_worn(
        &self,
        user_id: Uuid,
        outfit_id: Uuid,
        occasion: Option<Occasion>,
    ) -> AppResult<WearRecord> {
        let record = WearRecord {
            id: Uuid::new_v4(),
            user_id,
            outfit_id,
            occasion,
            worn_at: Utc::now(),
        };
        self.database.record_wear(&record).await?;
        Ok(record)
    }

    /// Analyze the user's wardrobe and return prioritized recommendations
    ///
    /// # Errors
    ///
    /// Returns an error when storage fails.
    pub async fn wardrobe_insights(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<WardrobeRecommendation>> {
        let wardrobe = self.database.list_garments(user_id).await?;
        let profile = self.load_profile(user_id).await?;
        self.insights.analyze(&wardrobe, &profile)
    }

    /// Stored profile, or a neutral default for unknown users
    async fn load_profile(&self, user_id: Uuid) -> AppResult<StyleProfile> {
        Ok(self
            .database
            .get_profile(user_id)
            .await?
            .unwrap_or_else(|| StyleProfile::default_for(user_id)))
    }
}
