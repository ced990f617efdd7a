// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! BID-Tracker: correlate taxi trips with Business Improvement Districts
//!
//! This crate provides the backend API for buffering BID boundary polygons,
//! optionally subtracting an excluded borough's area, and computing how many
//! taxi trip endpoints fall inside the adjusted districts.

pub mod config;
pub mod error;
pub mod geometry;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::atomic::AtomicBool;

use config::Config;
use models::Trip;
use services::Pipeline;
use tokio::sync::RwLock;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Pipeline inputs, derived district set and last stats.
    pub pipeline: RwLock<Pipeline>,
    /// Loaded taxi trips (empty until the trip source finishes loading).
    pub trips: RwLock<Vec<Trip>>,
    /// Set while a batch analysis is running (busy indicator).
    pub computing: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pipeline: RwLock::new(Pipeline::new()),
            trips: RwLock::new(Vec::new()),
            computing: AtomicBool::new(false),
        }
    }
}
