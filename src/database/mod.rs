// ABOUTME: Sqlite persistence for garments, style profiles, saved outfits, and wear records
// ABOUTME: Schema bootstrap on open; enum and list columns stored as JSON text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! # Database Layer
//!
//! Sqlite persistence via `sqlx` with runtime queries. The schema is
//! bootstrapped on open, so a fresh database file works immediately.
//! Identifiers are stored as TEXT, timestamps as RFC 3339 TEXT (through the
//! sqlx chrono integration), and enum/list attributes as JSON text decoded
//! back into domain types on read.

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

use capsule_core::errors::database::{DatabaseError, DatabaseResult};
use capsule_core::models::{
    Color, Garment, GarmentBuilder, GarmentCategory, Occasion, SavedOutfit, ScoreBreakdown,
    Season, StyleProfile, StyleTag, WearRecord,
};

/// Schema statements executed on open, oldest first
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS garments (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        primary_color_name TEXT NOT NULL,
        primary_color_hex TEXT NOT NULL,
        secondary_color_name TEXT,
        secondary_color_hex TEXT,
        style_tags TEXT NOT NULL,
        seasons TEXT NOT NULL,
        occasions TEXT NOT NULL,
        formality INTEGER NOT NULL,
        warmth INTEGER NOT NULL,
        patterned INTEGER NOT NULL,
        layerable INTEGER NOT NULL,
        times_worn INTEGER NOT NULL,
        last_worn TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_garments_user ON garments(user_id)",
    "CREATE TABLE IF NOT EXISTS style_profiles (
        user_id TEXT PRIMARY KEY,
        style_preferences TEXT NOT NULL,
        disliked_colors TEXT NOT NULL,
        default_formality INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS saved_outfits (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        name TEXT,
        garment_ids TEXT NOT NULL,
        breakdown TEXT,
        times_worn INTEGER NOT NULL,
        last_worn TEXT,
        saved_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_saved_outfits_user ON saved_outfits(user_id)",
    "CREATE TABLE IF NOT EXISTS wear_records (
        id TEXT PRIMARY KEY,
        user_id TEXT NOT NULL,
        outfit_id TEXT NOT NULL,
        occasion TEXT,
        worn_at TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_wear_records_user ON wear_records(user_id)",
];

/// Sqlite-backed wardrobe store
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) and migrate a database
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is invalid, the file cannot be created,
    /// or migration fails.
    pub async fn new(url: &str) -> DatabaseResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        // A shared in-memory database only exists per-connection
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.migrate().await?;
        info!(url, "database ready");
        Ok(database)
    }

    /// Run schema bootstrap statements
    async fn migrate(&self) -> DatabaseResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|err| DatabaseError::Migration(err.to_string()))?;
        }
        Ok(())
    }

    /// Access the underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Human-readable backend description for startup logging
    #[must_use]
    pub const fn backend_info() -> &'static str {
        "sqlite"
    }

    // ========================================================================
    // Garments
    // ========================================================================

    /// Insert or replace a garment
    pub async fn upsert_garment(&self, user_id: Uuid, garment: &Garment) -> DatabaseResult<()> {
        let style_tags = serde_json::to_string(garment.style_tags())
            .map_err(|err| corrupt("garment", &err))?;
        let seasons =
            serde_json::to_string(garment.seasons()).map_err(|err| corrupt("garment", &err))?;
        let occasions =
            serde_json::to_string(garment.occasions()).map_err(|err| corrupt("garment", &err))?;
        let category =
            serde_json::to_string(&garment.category()).map_err(|err| corrupt("garment", &err))?;

        sqlx::query(
            "INSERT INTO garments (
                id, user_id, name, category,
                primary_color_name, primary_color_hex,
                secondary_color_name, secondary_color_hex,
                style_tags, seasons, occasions,
                formality, warmth, patterned, layerable,
                times_worn, last_worn, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                category = excluded.category,
                primary_color_name = excluded.primary_color_name,
                primary_color_hex = excluded.primary_color_hex,
                secondary_color_name = excluded.secondary_color_name,
                secondary_color_hex = excluded.secondary_color_hex,
                style_tags = excluded.style_tags,
                seasons = excluded.seasons,
                occasions = excluded.occasions,
                formality = excluded.formality,
                warmth = excluded.warmth,
                patterned = excluded.patterned,
                layerable = excluded.layerable,
                times_worn = excluded.times_worn,
                last_worn = excluded.last_worn",
        )
        .bind(garment.id().to_string())
        .bind(user_id.to_string())
        .bind(garment.name())
        .bind(category)
        .bind(&garment.primary_color().name)
        .bind(&garment.primary_color().hex)
        .bind(garment.secondary_color().map(|c| c.name.clone()))
        .bind(garment.secondary_color().map(|c| c.hex.clone()))
        .bind(style_tags)
        .bind(seasons)
        .bind(occasions)
        .bind(i64::from(garment.formality()))
        .bind(i64::from(garment.warmth()))
        .bind(i64::from(garment.is_patterned()))
        .bind(i64::from(garment.is_layerable()))
        .bind(i64::from(garment.times_worn()))
        .bind(garment.last_worn())
        .bind(garment.created_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Load one garment scoped to a user
    pub async fn get_garment(&self, user_id: Uuid, id: Uuid) -> DatabaseResult<Garment> {
        let row = sqlx::query("SELECT * FROM garments WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map_or_else(
            || Err(DatabaseError::not_found("garment")),
            |row| garment_from_row(&row),
        )
    }

    /// Load a user's entire wardrobe, newest first
    pub async fn list_garments(&self, user_id: Uuid) -> DatabaseResult<Vec<Garment>> {
        let rows =
            sqlx::query("SELECT * FROM garments WHERE user_id = ? ORDER BY created_at DESC")
                .bind(user_id.to_string())
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(garment_from_row).collect()
    }

    /// Delete one garment scoped to a user
    pub async fn delete_garment(&self, user_id: Uuid, id: Uuid) -> DatabaseResult<()> {
        let result = sqlx::query("DELETE FROM garments WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("garment"));
        }
        Ok(())
    }

    // ========================================================================
    // Style profiles
    // ========================================================================

    /// Load a user's style profile, if stored
    pub async fn get_profile(&self, user_id: Uuid) -> DatabaseResult<Option<StyleProfile>> {
        let row = sqlx::query("SELECT * FROM style_profiles WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| -> DatabaseResult<StyleProfile> {
            let preferences_json: String = row.try_get("style_preferences")?;
            let disliked_json: String = row.try_get("disliked_colors")?;
            let default_formality: i64 = row.try_get("default_formality")?;

            let style_preferences: std::collections::HashMap<StyleTag, f64> =
                serde_json::from_str(&preferences_json)
                    .map_err(|err| corrupt("style profile", &err))?;
            let disliked_colors: Vec<String> = serde_json::from_str(&disliked_json)
                .map_err(|err| corrupt("style profile", &err))?;

            let mut profile = StyleProfile {
                user_id,
                style_preferences,
                disliked_colors,
                default_formality: u8::try_from(default_formality).unwrap_or(2),
            };
            profile.normalize();
            Ok(profile)
        })
        .transpose()
    }

    /// Insert or replace a user's style profile
    pub async fn upsert_profile(&self, profile: &StyleProfile) -> DatabaseResult<()> {
        let preferences = serde_json::to_string(&profile.style_preferences)
            .map_err(|err| corrupt("style profile", &err))?;
        let disliked = serde_json::to_string(&profile.disliked_colors)
            .map_err(|err| corrupt("style profile", &err))?;

        sqlx::query(
            "INSERT INTO style_profiles (user_id, style_preferences, disliked_colors, default_formality)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(user_id) DO UPDATE SET
                style_preferences = excluded.style_preferences,
                disliked_colors = excluded.disliked_colors,
                default_formality = excluded.default_formality",
        )
        .bind(profile.user_id.to_string())
        .bind(preferences)
        .bind(disliked)
        .bind(i64::from(profile.default_formality))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ========================================================================
    // Saved outfits and wear records
    // ========================================================================

    /// Insert a saved outfit
    pub async fn insert_saved_outfit(&self, outfit: &SavedOutfit) -> DatabaseResult<()> {
        let garment_ids = serde_json::to_string(&outfit.garment_ids)
            .map_err(|err| corrupt("saved outfit", &err))?;
        let breakdown = outfit
            .breakdown
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|err| corrupt("saved outfit", &err))?;

        sqlx::query(
            "INSERT INTO saved_outfits (id, user_id, name, garment_ids, breakdown, times_worn, last_worn, saved_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(outfit.id.to_string())
        .bind(outfit.user_id.to_string())
        .bind(outfit.name.clone())
        .bind(garment_ids)
        .bind(breakdown)
        .bind(i64::from(outfit.times_worn))
        .bind(outfit.last_worn)
        .bind(outfit.saved_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Load a user's saved outfits, newest first
    pub async fn list_saved_outfits(&self, user_id: Uuid) -> DatabaseResult<Vec<SavedOutfit>> {
        let rows =
            sqlx::query("SELECT * FROM saved_outfits WHERE user_id = ? ORDER BY saved_at DESC")
                .bind(user_id.to_string())
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(saved_outfit_from_row).collect()
    }

    /// Load one saved outfit scoped to a user
    pub async fn get_saved_outfit(&self, user_id: Uuid, id: Uuid) -> DatabaseResult<SavedOutfit> {
        let row = sqlx::query("SELECT * FROM saved_outfits WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map_or_else(
            || Err(DatabaseError::not_found("saved outfit")),
            |row| saved_outfit_from_row(&row),
        )
    }

    /// Record an outfit being worn
    ///
    /// The wear record, the outfit's wear counters, and every member
    /// garment's wear counters commit in one transaction.
    pub async fn record_wear(&self, record: &WearRecord) -> DatabaseResult<()> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("SELECT garment_ids FROM saved_outfits WHERE id = ? AND user_id = ?")
            .bind(record.outfit_id.to_string())
            .bind(record.user_id.to_string())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DatabaseError::not_found("saved outfit"))?;

        let garment_ids_json: String = row.try_get("garment_ids")?;
        let garment_ids: Vec<Uuid> = serde_json::from_str(&garment_ids_json)
            .map_err(|err| corrupt("saved outfit", &err))?;

        let occasion = record
            .occasion
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|err| corrupt("wear record", &err))?;

        sqlx::query(
            "INSERT INTO wear_records (id, user_id, outfit_id, occasion, worn_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.id.to_string())
        .bind(record.user_id.to_string())
        .bind(record.outfit_id.to_string())
        .bind(occasion)
        .bind(record.worn_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE saved_outfits SET times_worn = times_worn + 1, last_worn = ? WHERE id = ?",
        )
        .bind(record.worn_at)
        .bind(record.outfit_id.to_string())
        .execute(&mut *tx)
        .await?;

        for garment_id in garment_ids {
            sqlx::query(
                "UPDATE garments SET times_worn = times_worn + 1, last_worn = ? WHERE id = ?",
            )
            .bind(record.worn_at)
            .bind(garment_id.to_string())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Wrap a decode failure as a corrupt-row error
fn corrupt(entity: &'static str, err: &dyn std::fmt::Display) -> DatabaseError {
    DatabaseError::CorruptRow {
        entity,
        reason: err.to_string(),
    }
}

/// Decode a garment from a database row
fn garment_from_row(row: &sqlx::sqlite::SqliteRow) -> DatabaseResult<Garment> {
    let id: String = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let category_json: String = row.try_get("category")?;
    let primary_name: String = row.try_get("primary_color_name")?;
    let primary_hex: String = row.try_get("primary_color_hex")?;
    let secondary_name: Option<String> = row.try_get("secondary_color_name")?;
    let secondary_hex: Option<String> = row.try_get("secondary_color_hex")?;
    let style_tags_json: String = row.try_get("style_tags")?;
    let seasons_json: String = row.try_get("seasons")?;
    let occasions_json: String = row.try_get("occasions")?;
    let formality: i64 = row.try_get("formality")?;
    let warmth: i64 = row.try_get("warmth")?;
    let patterned: i64 = row.try_get("patterned")?;
    let layerable: i64 = row.try_get("layerable")?;
    let times_worn: i64 = row.try_get("times_worn")?;
    let last_worn: Option<DateTime<Utc>> = row.try_get("last_worn")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    let id = Uuid::parse_str(&id).map_err(|err| corrupt("garment", &err))?;
    let category: GarmentCategory =
        serde_json::from_str(&category_json).map_err(|err| corrupt("garment", &err))?;
    let style_tags: Vec<StyleTag> =
        serde_json::from_str(&style_tags_json).map_err(|err| corrupt("garment", &err))?;
    let seasons: Vec<Season> =
        serde_json::from_str(&seasons_json).map_err(|err| corrupt("garment", &err))?;
    let occasions: Vec<Occasion> =
        serde_json::from_str(&occasions_json).map_err(|err| corrupt("garment", &err))?;

    let mut builder = GarmentBuilder::new(name, category, Color::new(primary_name, primary_hex))
        .id(id)
        .style_tags(style_tags)
        .seasons(seasons)
        .occasions(occasions)
        .formality(u8::try_from(formality).unwrap_or(u8::MAX))
        .warmth(u8::try_from(warmth).unwrap_or(u8::MAX))
        .patterned(patterned != 0)
        .layerable(layerable != 0)
        .times_worn(u32::try_from(times_worn).unwrap_or(0))
        .created_at(created_at);

    if let (Some(name), Some(hex)) = (secondary_name, secondary_hex) {
        builder = builder.secondary_color(Color::new(name, hex));
    }
    if let Some(last_worn) = last_worn {
        builder = builder.last_worn(last_worn);
    }

    Ok(builder.build())
}

/// Decode a saved outfit from a database row
fn saved_outfit_from_row(row: &sqlx::sqlite::SqliteRow) -> DatabaseResult<SavedOutfit> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let name: Option<String> = row.try_get("name")?;
    let garment_ids_json: String = row.try_get("garment_ids")?;
    let breakdown_json: Option<String> = row.try_get("breakdown")?;
    let times_worn: i64 = row.try_get("times_worn")?;
    let last_worn: Option<DateTime<Utc>> = row.try_get("last_worn")?;
    let saved_at: DateTime<Utc> = row.try_get("saved_at")?;

    let garment_ids: Vec<Uuid> = serde_json::from_str(&garment_ids_json)
        .map_err(|err| corrupt("saved outfit", &err))?;
    let breakdown: Option<ScoreBreakdown> = breakdown_json
        .map(|json| serde_json::from_str(&json))
        .transpose()
        .map_err(|err| corrupt("saved outfit", &err))?;

    Ok(SavedOutfit {
        id: Uuid::parse_str(&id).map_err(|err| corrupt("saved outfit", &err))?,
        user_id: Uuid::parse_str(&user_id).map_err(|err| corrupt("saved outfit", &err))?,
        name,
        garment_ids,
        breakdown,
        times_worn: u32::try_from(times_worn).unwrap_or(0),
        last_worn,
        saved_at,
    })
}
