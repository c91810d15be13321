// ABOUTME: Service layer module wiring storage and the recommendation engine together
// ABOUTME: Re-exports OutfitService and the shared ServerResources state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Service layer
//!
//! Services orchestrate the database and the intelligence engine on behalf
//! of the route handlers. `ServerResources` bundles everything a handler
//! needs into one shared state value.

/// Outfit generation, saving, rejection, and wear tracking
pub mod outfit_service;

/// Shared server state for route handlers
pub mod resources;

pub use outfit_service::OutfitService;
pub use resources::ServerResources;
