// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! District model and geometry handling.

use geo::{Area, MultiPolygon, Point, Polygon};
use geojson::{Feature, FeatureCollection, JsonObject};

/// A Business Improvement District (or an exclusion region) with its
/// boundary geometry.
///
/// `properties` is the source feature's property map, carried through the
/// pipeline unchanged so the frontend sees the same attributes it would see
/// on the raw data.
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    /// Display name, "Unknown" if the source had none
    pub name: String,
    /// Source feature properties, passed through unchanged
    pub properties: Option<JsonObject>,
    /// Boundary geometry (can be Polygon or MultiPolygon)
    pub geometry: RegionGeometry,
}

impl District {
    /// Copy of this district with a replaced geometry.
    ///
    /// Name and properties are preserved, so a feature keeps its identity
    /// across buffering and subtraction.
    pub fn with_geometry(&self, geometry: RegionGeometry) -> Self {
        Self {
            name: self.name.clone(),
            properties: self.properties.clone(),
            geometry,
        }
    }

    /// Convert back to a GeoJSON feature.
    pub fn to_feature(&self) -> Feature {
        let value = match &self.geometry {
            RegionGeometry::Polygon(p) => geojson::Value::from(p),
            RegionGeometry::MultiPolygon(mp) => geojson::Value::from(mp),
        };
        Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(value)),
            id: None,
            properties: self.properties.clone(),
            foreign_members: None,
        }
    }
}

/// Build a GeoJSON FeatureCollection from a district slice.
pub fn to_feature_collection(districts: &[District]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: districts.iter().map(District::to_feature).collect(),
        foreign_members: None,
    }
}

/// Region geometry - either a simple polygon or multi-polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl RegionGeometry {
    /// Boundary-inclusive point membership test.
    ///
    /// A point strictly inside a hole is outside the region.
    pub fn contains_point(&self, point: &Point<f64>) -> bool {
        use geo::Intersects;
        match self {
            RegionGeometry::Polygon(p) => p.intersects(point),
            RegionGeometry::MultiPolygon(mp) => mp.intersects(point),
        }
    }

    /// View as a multi-polygon; a plain polygon becomes a one-part multi.
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        match self {
            RegionGeometry::Polygon(p) => MultiPolygon::new(vec![p.clone()]),
            RegionGeometry::MultiPolygon(mp) => mp.clone(),
        }
    }

    pub fn unsigned_area(&self) -> f64 {
        match self {
            RegionGeometry::Polygon(p) => p.unsigned_area(),
            RegionGeometry::MultiPolygon(mp) => mp.unsigned_area(),
        }
    }

    /// All coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        use geo::CoordsIter;
        match self {
            RegionGeometry::Polygon(p) => {
                p.coords_iter().all(|c| c.x.is_finite() && c.y.is_finite())
            }
            RegionGeometry::MultiPolygon(mp) => {
                mp.coords_iter().all(|c| c.x.is_finite() && c.y.is_finite())
            }
        }
    }
}
