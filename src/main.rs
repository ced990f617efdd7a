// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! BID-Tracker API Server
//!
//! Serves buffered and exclusion-adjusted Business Improvement District
//! polygons, raw taxi trips, and batch intersection statistics to the map
//! frontend.

use bid_tracker::{config::Config, services, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env();
    tracing::info!(port = config.port, "Starting BID-Tracker API");

    let state = Arc::new(AppState::new(config.clone()));

    // The three sources load concurrently in the background; each failure is
    // isolated and the server serves whatever data has arrived.
    tokio::spawn(load_trips_task(state.clone()));
    tokio::spawn(load_districts_task(state.clone()));
    tokio::spawn(load_exclusions_task(state.clone()));

    let app = bid_tracker::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn load_trips_task(state: Arc<AppState>) {
    match services::trips::load_trips(&state.config).await {
        Ok(trips) => *state.trips.write().await = trips,
        Err(error) => tracing::error!(%error, "Error loading taxi trips"),
    }
}

async fn load_districts_task(state: Arc<AppState>) {
    match services::regions::load_districts(&state.config).await {
        Ok(districts) => state.pipeline.write().await.set_districts(districts),
        Err(error) => tracing::error!(%error, "Error loading BID districts"),
    }
}

async fn load_exclusions_task(state: Arc<AppState>) {
    match services::regions::load_exclusion_regions(&state.config).await {
        Ok(regions) => state.pipeline.write().await.set_exclusions(regions),
        Err(error) => tracing::error!(%error, "Error loading exclusion regions"),
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bid_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
