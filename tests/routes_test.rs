// ABOUTME: Integration tests for the REST API routes via tower oneshot
// ABOUTME: Health checks, garment CRUD, validation errors, and generation end-to-end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;
use uuid::Uuid;

use capsule_server::config::environment::{
    DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig,
};
use capsule_server::database::Database;
use capsule_server::routes;
use capsule_server::services::ServerResources;

async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("capsule-routes-test.db");
    let config = ServerConfig {
        http_port: 0,
        environment: Environment::Testing,
        log_level: LogLevel::Info,
        database: DatabaseConfig {
            url: DatabaseUrl::SQLite { path: path.clone() },
        },
    };

    let database = Database::new(&config.database.url.to_connection_string())
        .await
        .expect("open database");
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    (routes::router(resources), dir)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn garment_payload(name: &str) -> Value {
    json!({
        "name": name,
        "category": "top",
        "primary_color": {"name": "white", "hex": "#fafafa"},
        "style_tags": ["casual"],
        "seasons": ["summer"],
        "occasions": ["casual"],
        "formality": 1,
        "warmth": 2
    })
}

#[tokio::test]
async fn health_and_ready_respond() {
    let (app, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");

    let response = app
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn garment_crud_over_http() {
    let (app, _dir) = test_app().await;
    let user_id = Uuid::new_v4();
    let base = format!("/api/users/{user_id}/garments");

    // Create
    let response = app
        .clone()
        .oneshot(json_request("POST", &base, garment_payload("White tee")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let garment_id = created["id"].as_str().unwrap().to_owned();

    // List
    let response = app
        .clone()
        .oneshot(Request::get(base.as_str()).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Update
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("{base}/{garment_id}"),
            garment_payload("Cream tee"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Cream tee");
    assert_eq!(updated["id"].as_str().unwrap(), garment_id);

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::delete(format!("{base}/{garment_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone
    let response = app
        .oneshot(
            Request::get(format!("{base}/{garment_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_hex_is_rejected_with_invalid_format() {
    let (app, _dir) = test_app().await;
    let user_id = Uuid::new_v4();

    let mut payload = garment_payload("Bad color");
    payload["primary_color"]["hex"] = json!("#zzzzzz");

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/users/{user_id}/garments"),
            payload,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn profile_round_trips_over_http() {
    let (app, _dir) = test_app().await;
    let user_id = Uuid::new_v4();
    let uri = format!("/api/users/{user_id}/profile");

    // Default profile for unknown user
    let response = app
        .clone()
        .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &uri,
            json!({
                "style_preferences": {"classic": 1.0, "edgy": 0.2},
                "disliked_colors": ["mustard"],
                "default_formality": 3
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["disliked_colors"][0], "mustard");
    assert_eq!(body["default_formality"], 3);
}

#[tokio::test]
async fn generation_end_to_end_over_http() {
    let (app, _dir) = test_app().await;
    let user_id = Uuid::new_v4();

    // Seed a minimal wardrobe
    for (name, category, hex) in [
        ("Tee", "top", "#fafafa"),
        ("Jeans", "bottom", "#1f2a44"),
        ("Sneakers", "shoes", "#16161a"),
    ] {
        let payload = json!({
            "name": name,
            "category": category,
            "primary_color": {"name": "color", "hex": hex},
            "occasions": ["casual"],
            "seasons": ["summer"],
            "formality": 1,
            "warmth": 2
        });
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/users/{user_id}/garments"),
                payload,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/users/{user_id}/outfits/generate"),
            json!({
                "occasion": "casual",
                "season": "summer",
                "min_score": 0.0,
                "max_results": 5
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let count = body["count"].as_u64().unwrap();
    assert!(count >= 1);
    assert_eq!(body["outfits"].as_array().unwrap().len() as u64, count);
    // Breakdown dimensions are present on every outfit
    let breakdown = &body["outfits"][0]["breakdown"];
    for dimension in [
        "color_harmony",
        "style_matching",
        "season_suitability",
        "occasion_suitability",
        "total",
    ] {
        assert!(breakdown[dimension].is_number(), "missing {dimension}");
    }
}
