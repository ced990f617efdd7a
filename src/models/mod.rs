// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod district;
pub mod stats;
pub mod trip;

pub use district::{District, RegionGeometry};
pub use stats::IntersectionStats;
pub use trip::Trip;
