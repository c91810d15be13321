// ABOUTME: Server assembly and lifecycle for the Capsule REST API
// ABOUTME: Binds the listener, serves the router, and handles graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Server assembly
//!
//! `CapsuleServer` owns the shared [`ServerResources`] and runs the axum
//! router until the process receives a shutdown signal.

use std::sync::Arc;
use tracing::info;

use capsule_core::errors::{AppError, AppResult};

use crate::routes;
use crate::services::ServerResources;

/// The Capsule HTTP server
pub struct CapsuleServer {
    resources: Arc<ServerResources>,
}

impl CapsuleServer {
    /// Create a server around shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Serve the API on the given port until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error when the listener cannot bind or the server fails.
    pub async fn run(self, port: u16) -> AppResult<()> {
        let router = routes::router(Arc::clone(&self.resources));
        let addr = format!("0.0.0.0:{port}");

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|err| AppError::internal(format!("failed to bind {addr}: {err}")))?;
        info!(%addr, "listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|err| AppError::internal(format!("server error: {err}")))
    }
}

/// Resolve when the process receives SIGINT
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install shutdown signal handler");
        return;
    }
    info!("shutdown signal received");
}
