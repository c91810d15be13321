// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides health and readiness endpoints for monitoring infrastructure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Health check routes for service monitoring

use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

use crate::services::ServerResources;

/// Create the health check routes
pub fn routes() -> Router<Arc<ServerResources>> {
    async fn health_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
}
