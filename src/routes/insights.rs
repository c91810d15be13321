// ABOUTME: Wardrobe insights route handler
// ABOUTME: Returns prioritized wardrobe recommendations from the insights engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Wardrobe insights route under `/api/users/{user_id}/insights`

use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

use capsule_core::errors::AppResult;
use capsule_intelligence::insights::WardrobeRecommendation;

use crate::services::ServerResources;

/// Analyze the user's wardrobe and return prioritized recommendations
pub async fn get(
    State(resources): State<Arc<ServerResources>>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<WardrobeRecommendation>>> {
    let recommendations = resources.outfit_service.wardrobe_insights(user_id).await?;
    Ok(Json(recommendations))
}
