// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for the map frontend.

use crate::error::{AppError, Result};
use crate::models::district::to_feature_collection;
use crate::models::{IntersectionStats, Trip};
use crate::services::{analysis, PipelineParams};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use validator::Validate;

/// API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/districts", get(get_districts))
        .route("/api/exclusion", get(get_exclusion))
        .route("/api/trips", get(get_trips))
        .route("/api/params", get(get_params).put(put_params))
        .route("/api/intersect", post(post_intersect))
        .route("/api/stats", get(get_stats))
}

// ─── Geometry ────────────────────────────────────────────────

/// The derived (buffered, possibly exclusion-adjusted) districts.
///
/// 404 while the raw districts have not loaded; an empty collection when
/// exclusion removed everything. The two states are deliberately distinct.
async fn get_districts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<geojson::FeatureCollection>> {
    let pipeline = state.pipeline.read().await;
    let derived = pipeline
        .derived()
        .ok_or_else(|| AppError::NotFound("district data not loaded".to_string()))?;
    Ok(Json(to_feature_collection(derived)))
}

/// The exclusion borough polygons, for highlight rendering.
async fn get_exclusion(State(state): State<Arc<AppState>>) -> Json<geojson::FeatureCollection> {
    let pipeline = state.pipeline.read().await;
    Json(to_feature_collection(pipeline.exclusions()))
}

/// The loaded taxi trips.
async fn get_trips(State(state): State<Arc<AppState>>) -> Json<Vec<Trip>> {
    let trips = state.trips.read().await;
    Json(trips.clone())
}

// ─── Parameters ──────────────────────────────────────────────

/// Pipeline parameter update.
#[derive(Debug, Deserialize, Validate)]
pub struct ParamsRequest {
    /// Buffer distance in meters (slider range 0-300)
    #[validate(range(min = 0, max = 300))]
    pub buffer_distance_m: u32,
    pub exclusion_enabled: bool,
}

/// Applied parameters plus the resulting derived set size.
#[derive(Debug, Serialize)]
pub struct ParamsResponse {
    pub buffer_distance_m: u32,
    pub exclusion_enabled: bool,
    /// Features in the derived set; null until districts load
    pub derived_count: Option<usize>,
}

/// Current parameters.
async fn get_params(State(state): State<Arc<AppState>>) -> Json<ParamsResponse> {
    let pipeline = state.pipeline.read().await;
    let params = pipeline.params();
    Json(ParamsResponse {
        buffer_distance_m: params.buffer_distance_m,
        exclusion_enabled: params.exclusion_enabled,
        derived_count: pipeline.derived().map(<[_]>::len),
    })
}

/// Apply new parameters and synchronously recompute the derived set.
async fn put_params(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ParamsRequest>,
) -> Result<Json<ParamsResponse>> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut pipeline = state.pipeline.write().await;
    pipeline.set_params(PipelineParams {
        buffer_distance_m: request.buffer_distance_m,
        exclusion_enabled: request.exclusion_enabled,
    });

    let params = pipeline.params();
    Ok(Json(ParamsResponse {
        buffer_distance_m: params.buffer_distance_m,
        exclusion_enabled: params.exclusion_enabled,
        derived_count: pipeline.derived().map(<[_]>::len),
    }))
}

// ─── Analysis ────────────────────────────────────────────────

/// Run the batch intersection analysis.
///
/// 409 while the derived set or the trips are unavailable (the frontend
/// disables its trigger in that state); prior stats are left untouched. The
/// busy flag is raised and the handler yields once before the heavy pass so
/// the computing state is observable first.
async fn post_intersect(State(state): State<Arc<AppState>>) -> Result<Json<IntersectionStats>> {
    // Immutable snapshots for the duration of the pass
    let districts = {
        let pipeline = state.pipeline.read().await;
        pipeline
            .derived()
            .ok_or_else(|| AppError::NotReady("district data not loaded".to_string()))?
            .to_vec()
    };
    let trips = state.trips.read().await.clone();
    if trips.is_empty() {
        return Err(AppError::NotReady("trip data not loaded".to_string()));
    }

    state.computing.store(true, Ordering::SeqCst);
    tracing::info!(
        trips = trips.len(),
        districts = districts.len(),
        "Intersection analysis started"
    );
    tokio::task::yield_now().await;

    let result = tokio::task::spawn_blocking(move || analysis::analyze(&trips, &districts)).await;
    state.computing.store(false, Ordering::SeqCst);

    let stats = result
        .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?
        .ok_or_else(|| AppError::NotReady("trip data not loaded".to_string()))?;

    tracing::info!(
        total = stats.total_trips,
        pickup_in_bid = stats.pickup_in_bid,
        dropoff_in_bid = stats.dropoff_in_bid,
        elapsed_ms = stats.elapsed_ms,
        "Intersection analysis finished"
    );

    state.pipeline.write().await.set_stats(stats.clone());
    Ok(Json(stats))
}

/// Last computed stats, if any.
///
/// The stats describe the derived set that was current when the analysis
/// ran; they are not invalidated by later parameter changes.
async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<IntersectionStats>> {
    let pipeline = state.pipeline.read().await;
    let stats = pipeline
        .stats()
        .cloned()
        .ok_or_else(|| AppError::NotFound("no analysis has run yet".to_string()))?;
    Ok(Json(stats))
}
