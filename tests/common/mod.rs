// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use bid_tracker::config::Config;
use bid_tracker::models::{District, RegionGeometry, Trip};
use bid_tracker::routes::create_router;
use bid_tracker::AppState;
use geo::{LineString, Polygon};
use std::sync::Arc;

/// Create a test app with no data loaded.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default()));
    (create_router(state.clone()), state)
}

/// An axis-aligned square district in degree units.
#[allow(dead_code)]
pub fn square_district(name: &str, min: f64, max: f64) -> District {
    District {
        name: name.to_string(),
        properties: None,
        geometry: RegionGeometry::Polygon(Polygon::new(
            LineString::from(vec![
                (min, min),
                (max, min),
                (max, max),
                (min, max),
                (min, min),
            ]),
            vec![],
        )),
    }
}

/// The unit square [[0,0],[1,0],[1,1],[0,1],[0,0]].
#[allow(dead_code)]
pub fn unit_square_district(name: &str) -> District {
    square_district(name, 0.0, 1.0)
}

/// Pickup inside the unit square, dropoff far outside.
#[allow(dead_code)]
pub fn sample_trip() -> Trip {
    Trip::new([0.5, 0.5], [5.0, 5.0])
}
