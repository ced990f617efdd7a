// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Geometry pipeline: metric buffering and region subtraction.

pub mod buffer;
pub mod difference;

pub use buffer::buffer_region;
pub use difference::{subtract_region, DifferenceOutcome};

/// Errors from geometry operations.
///
/// None of these are fatal: callers drop the feature (buffer) or keep its
/// prior shape (subtraction) and continue with the rest of the batch.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("unsupported geometry type (expected Polygon or MultiPolygon)")]
    Unsupported,

    #[error("geometry contains non-finite coordinates")]
    NonFinite,

    #[error("geometry collapsed to nothing")]
    Collapsed,
}
