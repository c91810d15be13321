// ABOUTME: Integration tests for the sqlite database layer
// ABOUTME: Round-trips garments, profiles, saved outfits, and the wear transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use uuid::Uuid;

use capsule_server::database::Database;
use capsule_server::models::{
    Color, GarmentBuilder, GarmentCategory, Occasion, SavedOutfit, Season, StyleProfile,
    StyleTag, WearRecord,
};
use capsule_server::test_utils::casual_wardrobe;

async fn test_database() -> (Database, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("capsule-test.db");
    let database = Database::new(&format!("sqlite:{}", path.display()))
        .await
        .expect("open database");
    (database, dir)
}

#[tokio::test]
async fn garment_crud_round_trips() {
    let (database, _dir) = test_database().await;
    let user_id = Uuid::new_v4();

    let garment = GarmentBuilder::new(
        "Silk blouse",
        GarmentCategory::Top,
        Color::new("ivory", "#f5efe0"),
    )
    .secondary_color(Color::new("gold", "#c9a227"))
    .style_tags(vec![StyleTag::Romantic, StyleTag::Classic])
    .seasons(vec![Season::Spring, Season::Summer])
    .occasions(vec![Occasion::Date, Occasion::Party])
    .formality(4)
    .warmth(2)
    .patterned(true)
    .build();

    database
        .upsert_garment(user_id, &garment)
        .await
        .expect("insert");

    let loaded = database
        .get_garment(user_id, garment.id())
        .await
        .expect("load");
    assert_eq!(loaded.id(), garment.id());
    assert_eq!(loaded.name(), garment.name());
    assert_eq!(loaded.category(), garment.category());
    assert_eq!(loaded.primary_color(), garment.primary_color());
    assert_eq!(loaded.secondary_color(), garment.secondary_color());
    assert_eq!(loaded.style_tags(), garment.style_tags());
    assert_eq!(loaded.seasons(), garment.seasons());
    assert_eq!(loaded.occasions(), garment.occasions());
    assert_eq!(loaded.formality(), garment.formality());
    assert_eq!(loaded.warmth(), garment.warmth());
    assert!(loaded.is_patterned());

    let listed = database.list_garments(user_id).await.expect("list");
    assert_eq!(listed.len(), 1);

    // Scoped to the owner: another user sees nothing
    assert!(database
        .get_garment(Uuid::new_v4(), garment.id())
        .await
        .is_err());

    database
        .delete_garment(user_id, garment.id())
        .await
        .expect("delete");
    assert!(database.get_garment(user_id, garment.id()).await.is_err());
    assert!(database
        .delete_garment(user_id, garment.id())
        .await
        .is_err());
}

#[tokio::test]
async fn upsert_replaces_existing_garment() {
    let (database, _dir) = test_database().await;
    let user_id = Uuid::new_v4();

    let original = GarmentBuilder::new(
        "Jacket",
        GarmentCategory::Outerwear,
        Color::new("green", "#3f6b3f"),
    )
    .build();
    database
        .upsert_garment(user_id, &original)
        .await
        .expect("insert");

    let renamed = GarmentBuilder::new(
        "Field jacket",
        GarmentCategory::Outerwear,
        Color::new("olive", "#6b7a3f"),
    )
    .id(original.id())
    .created_at(original.created_at())
    .build();
    database
        .upsert_garment(user_id, &renamed)
        .await
        .expect("upsert");

    let loaded = database
        .get_garment(user_id, original.id())
        .await
        .expect("load");
    assert_eq!(loaded.name(), "Field jacket");
    assert_eq!(database.list_garments(user_id).await.expect("list").len(), 1);
}

#[tokio::test]
async fn style_profile_round_trips() {
    let (database, _dir) = test_database().await;
    let user_id = Uuid::new_v4();

    assert!(database.get_profile(user_id).await.expect("get").is_none());

    let mut profile = StyleProfile::default_for(user_id);
    profile.style_preferences.insert(StyleTag::Minimalist, 0.9);
    profile.disliked_colors.push("orange".into());
    profile.default_formality = 3;

    database.upsert_profile(&profile).await.expect("upsert");
    let loaded = database
        .get_profile(user_id)
        .await
        .expect("get")
        .expect("stored");
    assert_eq!(loaded.disliked_colors, vec!["orange".to_owned()]);
    assert_eq!(loaded.default_formality, 3);
    assert!(
        (loaded.preference_weight(StyleTag::Minimalist) - 0.9).abs() < f64::EPSILON
    );
}

#[tokio::test]
async fn wear_recording_bumps_counters_transactionally() {
    let (database, _dir) = test_database().await;
    let user_id = Uuid::new_v4();

    let wardrobe = casual_wardrobe();
    for garment in &wardrobe {
        database
            .upsert_garment(user_id, garment)
            .await
            .expect("insert");
    }

    let garment_ids: Vec<Uuid> = wardrobe.iter().take(3).map(|g| g.id()).collect();
    let outfit = SavedOutfit {
        id: Uuid::new_v4(),
        user_id,
        name: Some("Errand uniform".into()),
        garment_ids: garment_ids.clone(),
        breakdown: None,
        times_worn: 0,
        last_worn: None,
        saved_at: Utc::now(),
    };
    database
        .insert_saved_outfit(&outfit)
        .await
        .expect("save outfit");

    let record = WearRecord {
        id: Uuid::new_v4(),
        user_id,
        outfit_id: outfit.id,
        occasion: Some(Occasion::Casual),
        worn_at: Utc::now(),
    };
    database.record_wear(&record).await.expect("record wear");

    let outfits = database.list_saved_outfits(user_id).await.expect("list");
    assert_eq!(outfits.len(), 1);
    assert_eq!(outfits[0].times_worn, 1);
    assert!(outfits[0].last_worn.is_some());

    for garment_id in &garment_ids {
        let garment = database
            .get_garment(user_id, *garment_id)
            .await
            .expect("load");
        assert_eq!(garment.times_worn(), 1);
        assert!(garment.last_worn().is_some());
    }

    // Wearing an unknown outfit fails and changes nothing
    let bogus = WearRecord {
        id: Uuid::new_v4(),
        user_id,
        outfit_id: Uuid::new_v4(),
        occasion: None,
        worn_at: Utc::now(),
    };
    assert!(database.record_wear(&bogus).await.is_err());
}

#[tokio::test]
async fn saved_outfit_round_trips_breakdown() {
    let (database, _dir) = test_database().await;
    let user_id = Uuid::new_v4();

    let wardrobe = casual_wardrobe();
    for garment in wardrobe.iter().take(2) {
        database
            .upsert_garment(user_id, garment)
            .await
            .expect("insert");
    }

    let outfit = SavedOutfit {
        id: Uuid::new_v4(),
        user_id,
        name: None,
        garment_ids: wardrobe.iter().take(2).map(|g| g.id()).collect(),
        breakdown: Some(capsule_server::models::ScoreBreakdown {
            color_harmony: 82.0,
            style_matching: 70.0,
            season_suitability: 90.0,
            occasion_suitability: 88.0,
            total: 81.5,
        }),
        times_worn: 0,
        last_worn: None,
        saved_at: Utc::now(),
    };
    database
        .insert_saved_outfit(&outfit)
        .await
        .expect("save outfit");

    let loaded = database
        .get_saved_outfit(user_id, outfit.id)
        .await
        .expect("load");
    let breakdown = loaded.breakdown.expect("breakdown stored");
    assert!((breakdown.total - 81.5).abs() < f64::EPSILON);
}
