// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived district set computation.
//!
//! The pipeline owns the raw inputs and re-derives the district set whenever
//! one of them changes: buffer every raw feature, then subtract each
//! exclusion region in sequence when exclusion is enabled. Recomputation is
//! synchronous and last-write-wins; the derived set is always a pure
//! function of the current inputs.

use serde::{Deserialize, Serialize};

use crate::geometry::{buffer_region, subtract_region, DifferenceOutcome};
use crate::models::{District, IntersectionStats};

/// User-adjustable pipeline parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Outward buffer applied to every district, meters
    pub buffer_distance_m: u32,
    /// Subtract the exclusion borough from every district
    pub exclusion_enabled: bool,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            buffer_distance_m: 0,
            exclusion_enabled: false,
        }
    }
}

/// Pipeline state: raw inputs, derived district set, last stats.
#[derive(Default)]
pub struct Pipeline {
    /// Raw BID districts; `None` until the source loads
    districts: Option<Vec<District>>,
    exclusions: Vec<District>,
    params: PipelineParams,
    /// `None` while raw districts are unset - distinct from "empty after
    /// exclusion", which is `Some` of an empty vec
    derived: Option<Vec<District>>,
    stats: Option<IntersectionStats>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw districts arrived (or were replaced).
    pub fn set_districts(&mut self, districts: Vec<District>) {
        self.districts = Some(districts);
        self.recompute();
    }

    /// Exclusion regions arrived (or were replaced).
    pub fn set_exclusions(&mut self, exclusions: Vec<District>) {
        self.exclusions = exclusions;
        self.recompute();
    }

    /// Apply new parameters.
    pub fn set_params(&mut self, params: PipelineParams) {
        self.params = params;
        self.recompute();
    }

    pub fn params(&self) -> PipelineParams {
        self.params
    }

    /// The derived district set; `None` until raw districts have loaded.
    pub fn derived(&self) -> Option<&[District]> {
        self.derived.as_deref()
    }

    pub fn exclusions(&self) -> &[District] {
        &self.exclusions
    }

    pub fn stats(&self) -> Option<&IntersectionStats> {
        self.stats.as_ref()
    }

    pub fn set_stats(&mut self, stats: IntersectionStats) {
        self.stats = Some(stats);
    }

    /// Re-derive the district set from the current inputs.
    ///
    /// A feature that fails buffering is dropped; a feature that fails
    /// subtraction keeps its prior shape; a fully-excluded feature is
    /// removed. None of these abort the batch.
    fn recompute(&mut self) {
        let Some(raw) = &self.districts else {
            self.derived = None;
            return;
        };

        let distance_m = f64::from(self.params.buffer_distance_m);
        let mut features: Vec<District> = raw
            .iter()
            .filter_map(
                |district| match buffer_region(&district.geometry, distance_m) {
                    Ok(geometry) => Some(district.with_geometry(geometry)),
                    Err(error) => {
                        tracing::warn!(
                            district = %district.name,
                            %error,
                            "Buffer failed, dropping feature"
                        );
                        None
                    }
                },
            )
            .collect();

        if self.params.exclusion_enabled && !self.exclusions.is_empty() {
            for region in &self.exclusions {
                // Later exclusions operate on the result of earlier ones
                let mut next = Vec::with_capacity(features.len());
                for mut district in features {
                    match subtract_region(&district.geometry, &region.geometry) {
                        Ok(DifferenceOutcome::Remainder(geometry)) => {
                            district.geometry = geometry;
                            next.push(district);
                        }
                        Ok(DifferenceOutcome::Empty) => {
                            tracing::debug!(
                                district = %district.name,
                                "Fully inside exclusion region, removed"
                            );
                        }
                        Err(error) => {
                            tracing::warn!(
                                district = %district.name,
                                %error,
                                "Difference failed, keeping original shape"
                            );
                            next.push(district);
                        }
                    }
                }
                features = next;
            }
        }

        tracing::debug!(
            count = features.len(),
            buffer_m = self.params.buffer_distance_m,
            exclusion = self.params.exclusion_enabled,
            "Derived district set recomputed"
        );
        self.derived = Some(features);
    }
}
