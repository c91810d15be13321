// ABOUTME: Wardrobe garment CRUD route handlers
// ABOUTME: Validates color hex values at the API boundary before touching storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Wardrobe routes: garment CRUD under `/api/users/{user_id}/garments`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use capsule_core::errors::{AppError, AppResult};
use capsule_core::models::{
    Color, Garment, GarmentBuilder, GarmentCategory, Occasion, Season, StyleTag,
};

use crate::services::ServerResources;

/// Color fields accepted by the API
#[derive(Debug, Clone, Deserialize)]
pub struct ColorPayload {
    /// Display name
    pub name: String,
    /// Hex value (`#rrggbb`, leading `#` optional)
    pub hex: String,
}

impl ColorPayload {
    /// Validate and convert into a domain color
    fn into_color(self) -> AppResult<Color> {
        let color = Color::new(self.name, self.hex);
        if color.is_valid_hex() {
            Ok(color)
        } else {
            Err(AppError::invalid_format(format!(
                "'{}' is not a valid #rrggbb hex color",
                color.hex
            )))
        }
    }
}

/// Garment fields accepted on create and update
#[derive(Debug, Clone, Deserialize)]
pub struct GarmentPayload {
    /// Display name
    pub name: String,
    /// Garment category
    pub category: GarmentCategory,
    /// Primary color
    pub primary_color: ColorPayload,
    /// Optional secondary color
    #[serde(default)]
    pub secondary_color: Option<ColorPayload>,
    /// Style tags
    #[serde(default)]
    pub style_tags: Vec<StyleTag>,
    /// Seasons (empty = all-season)
    #[serde(default)]
    pub seasons: Vec<Season>,
    /// Occasions (empty = any occasion)
    #[serde(default)]
    pub occasions: Vec<Occasion>,
    /// Formality level 1-5
    #[serde(default)]
    pub formality: Option<u8>,
    /// Warmth rating 0-10
    #[serde(default)]
    pub warmth: Option<u8>,
    /// Visible pattern or print
    #[serde(default)]
    pub patterned: bool,
    /// Works as a layering piece
    #[serde(default)]
    pub layerable: bool,
}

impl GarmentPayload {
    /// Build a garment from this payload
    fn into_builder(self) -> AppResult<GarmentBuilder> {
        let primary = self.primary_color.into_color()?;
        let mut builder = GarmentBuilder::new(self.name, self.category, primary)
            .style_tags(self.style_tags)
            .seasons(self.seasons)
            .occasions(self.occasions)
            .patterned(self.patterned)
            .layerable(self.layerable);

        if let Some(secondary) = self.secondary_color {
            builder = builder.secondary_color(secondary.into_color()?);
        }
        if let Some(formality) = self.formality {
            builder = builder.formality(formality);
        }
        if let Some(warmth) = self.warmth {
            builder = builder.warmth(warmth);
        }
        Ok(builder)
    }
}

/// List a user's wardrobe
pub async fn list(
    State(resources): State<Arc<ServerResources>>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<Garment>>> {
    let garments = resources.database.list_garments(user_id).await?;
    Ok(Json(garments))
}

/// Add a garment to the wardrobe
pub async fn create(
    State(resources): State<Arc<ServerResources>>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<GarmentPayload>,
) -> AppResult<(StatusCode, Json<Garment>)> {
    let garment = payload.into_builder()?.build();
    resources.database.upsert_garment(user_id, &garment).await?;
    Ok((StatusCode::CREATED, Json(garment)))
}

/// Fetch one garment
pub async fn get_one(
    State(resources): State<Arc<ServerResources>>,
    Path((user_id, garment_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Garment>> {
    let garment = resources.database.get_garment(user_id, garment_id).await?;
    Ok(Json(garment))
}

/// Replace a garment's attributes, preserving its identity and wear history
pub async fn update(
    State(resources): State<Arc<ServerResources>>,
    Path((user_id, garment_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<GarmentPayload>,
) -> AppResult<Json<Garment>> {
    let existing = resources.database.get_garment(user_id, garment_id).await?;

    let mut builder = payload
        .into_builder()?
        .id(existing.id())
        .times_worn(existing.times_worn())
        .created_at(existing.created_at());
    if let Some(last_worn) = existing.last_worn() {
        builder = builder.last_worn(last_worn);
    }
    let garment = builder.build();

    resources.database.upsert_garment(user_id, &garment).await?;
    Ok(Json(garment))
}

/// Remove a garment from the wardrobe
pub async fn remove(
    State(resources): State<Arc<ServerResources>>,
    Path((user_id, garment_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    resources
        .database
        .delete_garment(user_id, garment_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
