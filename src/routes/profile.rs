// ABOUTME: Style profile route handlers for reading and replacing user preferences
// ABOUTME: Unknown users read back a neutral default profile rather than a 404
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Style profile routes under `/api/users/{user_id}/profile`

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use capsule_core::errors::AppResult;
use capsule_core::models::{StyleProfile, StyleTag};

use crate::services::ServerResources;

/// Fetch the user's style profile (neutral default when none is stored)
pub async fn get(
    State(resources): State<Arc<ServerResources>>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<StyleProfile>> {
    let profile = resources
        .database
        .get_profile(user_id)
        .await?
        .unwrap_or_else(|| StyleProfile::default_for(user_id));
    Ok(Json(profile))
}

/// Style profile fields accepted on replace
#[derive(Debug, Deserialize)]
pub struct ProfilePayload {
    /// Relative weights for preferred styles
    #[serde(default)]
    pub style_preferences: HashMap<StyleTag, f64>,
    /// Color names the user never wants recommended
    #[serde(default)]
    pub disliked_colors: Vec<String>,
    /// Default formality level 1-5
    #[serde(default)]
    pub default_formality: Option<u8>,
}

/// Replace the user's style profile
pub async fn put(
    State(resources): State<Arc<ServerResources>>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<ProfilePayload>,
) -> AppResult<Json<StyleProfile>> {
    let mut profile = StyleProfile {
        user_id,
        style_preferences: payload.style_preferences,
        disliked_colors: payload.disliked_colors,
        default_formality: payload.default_formality.unwrap_or(2),
    };
    profile.normalize();

    resources.database.upsert_profile(&profile).await?;
    Ok(Json(profile))
}
