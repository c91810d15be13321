// ABOUTME: REST API router assembly for the Capsule server
// ABOUTME: Nests wardrobe, profile, outfit, and insights routes under /api/users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! # API Routes
//!
//! Route handlers are grouped by resource; this module assembles them into
//! the server's router with tracing and CORS middleware.
//!
//! All user-scoped routes live under `/api/users/{user_id}`. Authentication
//! is out of scope for this service; callers scope requests by user id.

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::ServerResources;

/// Health and readiness endpoints
pub mod health;

/// Wardrobe garment CRUD
pub mod wardrobe;

/// Style profile endpoints
pub mod profile;

/// Outfit generation, saving, rejection, and wear tracking
pub mod outfits;

/// Wardrobe insights endpoint
pub mod insights;

/// Assemble the complete application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let user_routes = Router::new()
        .route("/garments", get(wardrobe::list).post(wardrobe::create))
        .route(
            "/garments/:garment_id",
            get(wardrobe::get_one)
                .put(wardrobe::update)
                .delete(wardrobe::remove),
        )
        .route("/profile", get(profile::get).put(profile::put))
        .route("/outfits", get(outfits::list_saved).post(outfits::save))
        .route("/outfits/generate", post(outfits::generate))
        .route("/outfits/generate/stream", get(outfits::generate_stream))
        .route("/outfits/reject", post(outfits::reject))
        .route("/outfits/:outfit_id/worn", post(outfits::worn))
        .route("/insights", get(insights::get));

    Router::new()
        .merge(health::routes())
        .nest("/api/users/:user_id", user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(resources)
}
