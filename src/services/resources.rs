// ABOUTME: Shared server state bundling database, services, and configuration
// ABOUTME: One Arc<ServerResources> is cloned into every route handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

use std::sync::Arc;

use capsule_intelligence::session::{create_shared_session_history, SharedSessionHistory};

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::services::OutfitService;

/// Everything route handlers need, shared behind one `Arc`
pub struct ServerResources {
    /// Wardrobe persistence
    pub database: Database,
    /// Outfit generation and lifecycle
    pub outfit_service: OutfitService,
    /// Session history shared with the generator
    pub session: SharedSessionHistory,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources around an open database
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let session = create_shared_session_history();
        let outfit_service = OutfitService::new(database.clone(), Arc::clone(&session));
        Self {
            database,
            outfit_service,
            session,
            config,
        }
    }
}
