// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Region subtraction (set difference) for the exclusion pass.

use geo::{Area, BooleanOps};

use crate::geometry::GeometryError;
use crate::models::RegionGeometry;

/// Remainders with total area below this are considered empty.
const AREA_EPSILON: f64 = 1e-12;

/// Outcome of subtracting a region from a target.
#[derive(Debug, Clone)]
pub enum DifferenceOutcome {
    /// What is left of the target outside the region.
    Remainder(RegionGeometry),
    /// The region fully covered the target.
    Empty,
}

/// Compute the set difference `target - region`.
///
/// Full containment yields `Empty`, which callers treat as "remove the
/// feature" rather than as an error. Non-finite coordinates in either input
/// or in the result are a typed failure; on failure callers keep the target
/// unmodified and continue with the rest of the batch.
pub fn subtract_region(
    target: &RegionGeometry,
    region: &RegionGeometry,
) -> Result<DifferenceOutcome, GeometryError> {
    if !target.is_finite() || !region.is_finite() {
        return Err(GeometryError::NonFinite);
    }

    let remainder = target
        .to_multi_polygon()
        .difference(&region.to_multi_polygon());
    if remainder.0.is_empty() || remainder.unsigned_area() < AREA_EPSILON {
        return Ok(DifferenceOutcome::Empty);
    }

    let remainder = RegionGeometry::MultiPolygon(remainder);
    if !remainder.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    Ok(DifferenceOutcome::Remainder(remainder))
}
