// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - data loading and the geometry pipeline.

pub mod analysis;
pub mod fetch;
pub mod pipeline;
pub mod regions;
pub mod trips;

pub use pipeline::{Pipeline, PipelineParams};
