// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Batch trip-vs-district intersection analysis.

use std::time::Instant;

use crate::models::{District, IntersectionStats, Trip};

/// Run the batch membership pass.
///
/// Pickup and dropoff are tested independently for every trip,
/// short-circuiting across districts on the first containing feature.
/// Returns `None` without producing stats when there are no trips. An empty
/// district slice is a valid input and yields zero counts; the distinction
/// between "no districts loaded yet" and "everything was excluded" is the
/// caller's to enforce.
pub fn analyze(trips: &[Trip], districts: &[District]) -> Option<IntersectionStats> {
    if trips.is_empty() {
        return None;
    }

    let started = Instant::now();
    let mut pickup_in_bid = 0u64;
    let mut dropoff_in_bid = 0u64;

    for trip in trips {
        if districts
            .iter()
            .any(|d| d.geometry.contains_point(&trip.pickup))
        {
            pickup_in_bid += 1;
        }
        if districts
            .iter()
            .any(|d| d.geometry.contains_point(&trip.dropoff))
        {
            dropoff_in_bid += 1;
        }
    }

    Some(IntersectionStats {
        total_trips: trips.len() as u64,
        pickup_in_bid,
        dropoff_in_bid,
        elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        computed_at: chrono::Utc::now().to_rfc3339(),
    })
}
