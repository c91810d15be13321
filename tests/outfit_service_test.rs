// ABOUTME: Integration tests for OutfitService orchestration over sqlite storage
// ABOUTME: Generation from stored wardrobes, saving, rejection feedback, and wear tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use uuid::Uuid;

use capsule_server::database::Database;
use capsule_server::intelligence::generator::GenerationRequest;
use capsule_server::intelligence::session::create_shared_session_history;
use capsule_server::models::{Occasion, Season};
use capsule_server::services::OutfitService;
use capsule_server::test_utils::casual_wardrobe;

async fn service_with_wardrobe(user_id: Uuid) -> (OutfitService, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("capsule-service-test.db");
    let database = Database::new(&format!("sqlite:{}", path.display()))
        .await
        .expect("open database");

    for garment in casual_wardrobe() {
        database
            .upsert_garment(user_id, &garment)
            .await
            .expect("insert garment");
    }

    let service = OutfitService::new(database, create_shared_session_history());
    (service, dir)
}

fn casual_request() -> GenerationRequest {
    let mut request = GenerationRequest::for_occasion(Occasion::Casual);
    request.season = Some(Season::Summer);
    request.min_score = Some(0.0);
    request
}

#[tokio::test]
async fn generates_from_stored_wardrobe() {
    let user_id = Uuid::new_v4();
    let (service, _dir) = service_with_wardrobe(user_id).await;

    let outfits = service
        .generate(user_id, casual_request())
        .await
        .expect("generation succeeds");
    assert!(!outfits.is_empty());
}

#[tokio::test]
async fn unknown_user_gets_empty_results_not_an_error() {
    let user_id = Uuid::new_v4();
    let (service, _dir) = service_with_wardrobe(user_id).await;

    let outfits = service
        .generate(Uuid::new_v4(), casual_request())
        .await
        .expect("generation succeeds");
    assert!(outfits.is_empty());
}

#[tokio::test]
async fn rejected_combination_is_not_recommended_again() {
    let user_id = Uuid::new_v4();
    let (service, _dir) = service_with_wardrobe(user_id).await;

    let first = service
        .generate(user_id, casual_request())
        .await
        .expect("first run");
    let top_pick = &first[0];
    let rejected_fingerprint = top_pick.outfit.fingerprint();
    let garment_ids: Vec<Uuid> = top_pick.outfit.garments().map(|g| g.id()).collect();

    // First run already recorded its outputs; rejection keeps the pick
    // blocked for the rest of the session regardless
    service
        .reject_outfit(user_id, &garment_ids)
        .expect("reject succeeds");

    let second = service
        .generate(user_id, casual_request())
        .await
        .expect("second run");
    for outfit in &second {
        assert_ne!(outfit.outfit.fingerprint(), rejected_fingerprint);
    }
}

#[tokio::test]
async fn save_and_wear_lifecycle() {
    let user_id = Uuid::new_v4();
    let (service, _dir) = service_with_wardrobe(user_id).await;

    let generated = service
        .generate(user_id, casual_request())
        .await
        .expect("generation succeeds");
    let pick = &generated[0];
    let garment_ids: Vec<Uuid> = pick.outfit.garments().map(|g| g.id()).collect();

    let saved = service
        .save_outfit(
            user_id,
            Some("Saturday look".into()),
            garment_ids,
            Some(pick.breakdown),
        )
        .await
        .expect("save succeeds");
    assert_eq!(saved.times_worn, 0);

    let record = service
        .record_worn(user_id, saved.id, Some(Occasion::Casual))
        .await
        .expect("worn succeeds");
    assert_eq!(record.outfit_id, saved.id);

    let listed = service
        .list_saved_outfits(user_id)
        .await
        .expect("list succeeds");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].times_worn, 1);
}

#[tokio::test]
async fn saving_with_unknown_garment_fails() {
    let user_id = Uuid::new_v4();
    let (service, _dir) = service_with_wardrobe(user_id).await;

    let result = service
        .save_outfit(user_id, None, vec![Uuid::new_v4()], None)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn empty_wardrobe_insights_bootstrap() {
    let user_id = Uuid::new_v4();
    let (service, _dir) = service_with_wardrobe(user_id).await;

    // The stocked user gets analysis; a fresh user gets the bootstrap hint
    let stocked = service
        .wardrobe_insights(user_id)
        .await
        .expect("insights succeed");
    assert!(stocked.len() <= 8);

    let fresh = service
        .wardrobe_insights(Uuid::new_v4())
        .await
        .expect("insights succeed");
    assert_eq!(fresh.len(), 1);
    assert!(fresh[0].title.contains("basics"));
}
