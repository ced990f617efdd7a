// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! District and borough boundary loading from GeoJSON.

use geo::{MultiPolygon, Polygon};
use geojson::GeoJson;

use crate::config::Config;
use crate::geometry::GeometryError;
use crate::models::{District, RegionGeometry};
use crate::services::fetch::{fetch_text, FetchError};

/// Errors from region loading.
#[derive(Debug, thiserror::Error)]
pub enum RegionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to parse GeoJSON: {0}")]
    Parse(String),
}

/// Load the raw BID districts.
pub async fn load_districts(config: &Config) -> Result<Vec<District>, RegionError> {
    let json = fetch_text(&config.districts_source).await?;
    let districts = parse_districts(&json)?;
    tracing::info!(count = districts.len(), "Loaded BID districts");
    Ok(districts)
}

/// Load the exclusion borough's polygons.
pub async fn load_exclusion_regions(config: &Config) -> Result<Vec<District>, RegionError> {
    let json = fetch_text(&config.boroughs_source).await?;
    let regions = parse_borough(&json, &config.exclusion_borough)?;
    tracing::info!(
        count = regions.len(),
        borough = %config.exclusion_borough,
        "Loaded exclusion regions"
    );
    Ok(regions)
}

/// Parse a GeoJSON FeatureCollection into districts.
///
/// Non-polygonal features never enter the geometry pipeline; they are
/// filtered out here.
pub fn parse_districts(json: &str) -> Result<Vec<District>, RegionError> {
    parse_features(json, None)
}

/// Parse a GeoJSON FeatureCollection, keeping one borough's polygons.
pub fn parse_borough(json: &str, borough: &str) -> Result<Vec<District>, RegionError> {
    parse_features(json, Some(borough))
}

fn parse_features(json: &str, borough: Option<&str>) -> Result<Vec<District>, RegionError> {
    let geojson: GeoJson = json
        .parse()
        .map_err(|e: geojson::Error| RegionError::Parse(e.to_string()))?;

    let mut districts = Vec::new();

    if let GeoJson::FeatureCollection(collection) = geojson {
        for feature in collection.features {
            if let Some(wanted) = borough {
                let boro = feature
                    .property("BoroName")
                    .and_then(|v| v.as_str())
                    .unwrap_or("");
                if boro != wanted {
                    continue;
                }
            }

            let name = feature
                .property("name")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown")
                .to_string();

            let Some(geometry) = feature.geometry else {
                continue;
            };
            match convert_geometry(geometry.value) {
                Ok(geometry) => districts.push(District {
                    name,
                    properties: feature.properties,
                    geometry,
                }),
                Err(error) => {
                    tracing::debug!(name = %name, %error, "Skipping feature");
                }
            }
        }
    }

    Ok(districts)
}

/// Convert GeoJSON geometry to our internal format.
fn convert_geometry(value: geojson::Value) -> Result<RegionGeometry, GeometryError> {
    use std::convert::TryInto;

    // Try as Polygon first
    let poly_result: Result<Polygon<f64>, _> = value.clone().try_into();
    if let Ok(poly) = poly_result {
        return Ok(RegionGeometry::Polygon(poly));
    }

    // Try as MultiPolygon
    let multi_result: Result<MultiPolygon<f64>, _> = value.try_into();
    if let Ok(multi) = multi_result {
        return Ok(RegionGeometry::MultiPolygon(multi));
    }

    Err(GeometryError::Unsupported)
}
