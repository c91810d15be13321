// ABOUTME: Outfit route handlers for generation, SSE progress streaming, and lifecycle
// ABOUTME: Bridges engine progress callbacks onto a channel consumed as Server-Sent Events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Outfit routes under `/api/users/{user_id}/outfits`
//!
//! `POST /generate` runs a generation and returns the scored outfits.
//! `GET /generate/stream` does the same but streams `progress` events as
//! Server-Sent Events while the engine works, ending with a single `result`
//! (or `error`) event.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tokio_stream::{Stream, StreamExt};
use tracing::warn;
use uuid::Uuid;

use capsule_core::errors::AppResult;
use capsule_core::models::{
    Occasion, SavedOutfit, ScoreBreakdown, ScoredOutfit, Season, StylistFilters, WearRecord,
};
use capsule_intelligence::generator::{GenerationProgress, GenerationRequest, ProgressReporter};
use capsule_intelligence::weather::WeatherConditions;

use crate::services::ServerResources;

/// Response for a completed generation run
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Scored outfits, best first
    pub outfits: Vec<ScoredOutfit>,
    /// Number of outfits returned
    pub count: usize,
}

/// Generate outfit recommendations
pub async fn generate(
    State(resources): State<Arc<ServerResources>>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<GenerationRequest>,
) -> AppResult<Json<GenerateResponse>> {
    let outfits = resources.outfit_service.generate(user_id, request).await?;
    let count = outfits.len();
    Ok(Json(GenerateResponse { outfits, count }))
}

/// Flat query parameters for the SSE generation endpoint
///
/// `EventSource` clients can only issue GET requests, so the generation
/// request arrives as query parameters instead of a JSON body.
#[derive(Debug, Deserialize)]
pub struct StreamParams {
    /// Occasion the outfits are for
    pub occasion: Occasion,
    /// Target season
    pub season: Option<Season>,
    /// Air temperature in Celsius (presence enables weather constraints)
    pub temperature_celsius: Option<f64>,
    /// Rain or snow expected
    pub precipitation: Option<bool>,
    /// Wind speed in m/s
    pub wind_speed_mps: Option<f64>,
    /// Formality slider 0-1
    pub formality: Option<f64>,
    /// Boldness slider 0-1
    pub boldness: Option<f64>,
    /// Layering slider 0-1
    pub layering: Option<f64>,
    /// Colorfulness slider 0-1
    pub colorfulness: Option<f64>,
    /// Explicit formality band lower bound
    pub min_formality: Option<u8>,
    /// Explicit formality band upper bound
    pub max_formality: Option<u8>,
    /// Minimum total score
    pub min_score: Option<f64>,
    /// Maximum outfits to return
    pub max_results: Option<usize>,
    /// Consider accessories and bags
    pub include_accessories: Option<bool>,
}

impl StreamParams {
    /// Convert flat query parameters into a generation request
    fn into_request(self) -> GenerationRequest {
        let defaults = StylistFilters::default();
        let weather = self.temperature_celsius.map(|temperature_celsius| {
            WeatherConditions {
                temperature_celsius,
                precipitation: self.precipitation.unwrap_or(false),
                wind_speed_mps: self.wind_speed_mps.unwrap_or(0.0),
            }
        });
        let formality_range = match (self.min_formality, self.max_formality) {
            (Some(lo), Some(hi)) => Some((lo, hi)),
            _ => None,
        };

        GenerationRequest {
            occasion: self.occasion,
            season: self.season,
            weather,
            filters: StylistFilters {
                formality: self.formality.unwrap_or(defaults.formality),
                boldness: self.boldness.unwrap_or(defaults.boldness),
                layering: self.layering.unwrap_or(defaults.layering),
                colorfulness: self.colorfulness.unwrap_or(defaults.colorfulness),
            },
            formality_range,
            min_score: self.min_score,
            max_results: self.max_results,
            include_accessories: self.include_accessories.unwrap_or(true),
        }
    }
}

/// Messages bridged from the generation task to the SSE stream
enum StreamMessage {
    Progress(GenerationProgress),
    Result(Vec<ScoredOutfit>),
    Error(String),
}

/// Forwards engine progress events onto the SSE channel
struct ChannelReporter(mpsc::UnboundedSender<StreamMessage>);

impl ProgressReporter for ChannelReporter {
    fn report(&self, progress: &GenerationProgress) {
        // A disconnected client just stops listening; drop the event
        let _ = self.0.send(StreamMessage::Progress(*progress));
    }
}

impl StreamMessage {
    /// Convert into an SSE event
    fn into_event(self) -> Event {
        let fallback = |err: axum::Error| {
            warn!(error = %err, "failed to serialize SSE payload");
            Event::default().event("error").data("serialization failed")
        };
        match self {
            Self::Progress(progress) => Event::default()
                .event("progress")
                .json_data(progress)
                .unwrap_or_else(fallback),
            Self::Result(outfits) => Event::default()
                .event("result")
                .json_data(GenerateResponse {
                    count: outfits.len(),
                    outfits,
                })
                .unwrap_or_else(fallback),
            Self::Error(message) => Event::default().event("error").data(message),
        }
    }
}

/// Generate outfit recommendations, streaming progress as SSE
pub async fn generate_stream(
    State(resources): State<Arc<ServerResources>>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<StreamParams>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let request = params.into_request();
    let (tx, rx) = mpsc::unbounded_channel::<StreamMessage>();

    let reporter: Arc<dyn ProgressReporter> = Arc::new(ChannelReporter(tx.clone()));

    tokio::spawn(async move {
        let outcome = resources
            .outfit_service
            .generate_with_progress(user_id, request, reporter)
            .await;
        let message = match outcome {
            Ok(outfits) => StreamMessage::Result(outfits),
            Err(err) => StreamMessage::Error(err.to_string()),
        };
        let _ = tx.send(message);
    });

    let stream = UnboundedReceiverStream::new(rx).map(|message| Ok(message.into_event()));
    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Fields accepted when saving an outfit
#[derive(Debug, Deserialize)]
pub struct SaveOutfitPayload {
    /// Optional user-assigned name
    #[serde(default)]
    pub name: Option<String>,
    /// Garments making up the outfit
    pub garment_ids: Vec<Uuid>,
    /// Score breakdown, when saving a generated recommendation
    #[serde(default)]
    pub breakdown: Option<ScoreBreakdown>,
}

/// Save an outfit
pub async fn save(
    State(resources): State<Arc<ServerResources>>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<SaveOutfitPayload>,
) -> AppResult<(StatusCode, Json<SavedOutfit>)> {
    let outfit = resources
        .outfit_service
        .save_outfit(user_id, payload.name, payload.garment_ids, payload.breakdown)
        .await?;
    Ok((StatusCode::CREATED, Json(outfit)))
}

/// List saved outfits
pub async fn list_saved(
    State(resources): State<Arc<ServerResources>>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<SavedOutfit>>> {
    let outfits = resources.outfit_service.list_saved_outfits(user_id).await?;
    Ok(Json(outfits))
}

/// Fields accepted when rejecting a combination
#[derive(Debug, Deserialize)]
pub struct RejectPayload {
    /// Garments making up the rejected combination
    pub garment_ids: Vec<Uuid>,
}

/// Reject a combination for the rest of the session
pub async fn reject(
    State(resources): State<Arc<ServerResources>>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<RejectPayload>,
) -> AppResult<StatusCode> {
    resources
        .outfit_service
        .reject_outfit(user_id, &payload.garment_ids)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fields accepted when recording a wear
#[derive(Debug, Default, Deserialize)]
pub struct WornPayload {
    /// Occasion the outfit was worn for
    #[serde(default)]
    pub occasion: Option<Occasion>,
}

/// Record that a saved outfit was worn
pub async fn worn(
    State(resources): State<Arc<ServerResources>>,
    Path((user_id, outfit_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<WornPayload>,
) -> AppResult<Json<WearRecord>> {
    let record = resources
        .outfit_service
        .record_worn(user_id, outfit_id, payload.occasion)
        .await?;
    Ok(Json(record))
}
