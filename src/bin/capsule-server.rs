// ABOUTME: Server binary for the Capsule wardrobe platform
// ABOUTME: Loads environment configuration, opens the database, and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! # Capsule Server Binary
//!
//! Starts the wardrobe management and outfit recommendation API.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use capsule_server::config::environment::ServerConfig;
use capsule_server::database::Database;
use capsule_server::logging;
use capsule_server::server::CapsuleServer;
use capsule_server::services::ServerResources;

#[derive(Parser)]
#[command(name = "capsule-server")]
#[command(about = "Capsule - wardrobe management and outfit recommendation API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Capsule server");
    info!("{}", config.summary());

    // Open the database (created on first run)
    let database = Database::new(&config.database.url.to_connection_string()).await?;
    info!("Database initialized: {}", Database::backend_info());

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    let server = CapsuleServer::new(resources);

    display_available_endpoints(http_port);
    info!("Ready to serve wardrobes!");

    if let Err(e) = server.run(http_port).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Display the available API endpoints
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("Wardrobe:");
    info!("   List Garments:     GET    http://{host}:{port}/api/users/{{user_id}}/garments");
    info!("   Add Garment:       POST   http://{host}:{port}/api/users/{{user_id}}/garments");
    info!("   Get Garment:       GET    http://{host}:{port}/api/users/{{user_id}}/garments/{{id}}");
    info!("   Update Garment:    PUT    http://{host}:{port}/api/users/{{user_id}}/garments/{{id}}");
    info!("   Delete Garment:    DELETE http://{host}:{port}/api/users/{{user_id}}/garments/{{id}}");
    info!("Style Profile:");
    info!("   Get Profile:       GET  http://{host}:{port}/api/users/{{user_id}}/profile");
    info!("   Update Profile:    PUT  http://{host}:{port}/api/users/{{user_id}}/profile");
    info!("Outfits:");
    info!("   Generate:          POST http://{host}:{port}/api/users/{{user_id}}/outfits/generate");
    info!("   Generate (SSE):    GET  http://{host}:{port}/api/users/{{user_id}}/outfits/generate/stream");
    info!("   List Saved:        GET  http://{host}:{port}/api/users/{{user_id}}/outfits");
    info!("   Save Outfit:       POST http://{host}:{port}/api/users/{{user_id}}/outfits");
    info!("   Reject Outfit:     POST http://{host}:{port}/api/users/{{user_id}}/outfits/reject");
    info!("   Record Worn:       POST http://{host}:{port}/api/users/{{user_id}}/outfits/{{id}}/worn");
    info!("Insights:");
    info!("   Wardrobe Insights: GET  http://{host}:{port}/api/users/{{user_id}}/insights");
    info!("=== End of Endpoint List ===");
}
