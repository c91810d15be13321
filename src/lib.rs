// ABOUTME: Main library entry point for the Capsule wardrobe platform
// ABOUTME: REST API over a sqlite wardrobe store and the outfit recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

#![deny(unsafe_code)]

//! # Capsule Server
//!
//! Backend service for the Capsule wardrobe management and outfit
//! recommendation application. The server stores wardrobes in sqlite,
//! runs the `capsule-intelligence` recommendation engine over them, and
//! exposes both over a REST API with streaming generation progress.
//!
//! ## Features
//!
//! - **Wardrobe management**: garment CRUD with colors, styles, seasons,
//!   occasions, formality and warmth attributes
//! - **Outfit generation**: scored outfit recommendations with hard
//!   constraints, stylist filters, and session-level deduplication
//! - **Streaming progress**: Server-Sent Events for responsive clients
//! - **Wardrobe insights**: gap analysis with prioritized recommendations
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Database**: sqlite persistence for garments, profiles, and outfits
//! - **Services**: `OutfitService` orchestrating the engine and storage
//! - **Routes**: axum handlers for the REST API
//! - **Config**: environment-based configuration management
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use capsule_server::config::environment::ServerConfig;
//! use capsule_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Capsule server configured with port: HTTP={}", config.http_port);
//!
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Sqlite persistence for wardrobes, profiles, and outfits
pub mod database;

/// Outfit recommendation engine re-exports
pub mod intelligence;

/// Logging configuration and structured logging setup
pub mod logging;

/// REST API route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Service layer orchestrating the engine and storage
pub mod services;

/// Sample wardrobe fixtures shared by tests and benchmarks
pub mod test_utils;

// Re-export foundation types so callers use one import path
pub use capsule_core::constants;
pub use capsule_core::errors;
pub use capsule_core::models;
