// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Outward metric buffering of district polygons.

use geo::{BoundingRect, Coord, MapCoords, MultiPolygon};
use geo_buf::buffer_multi_polygon_rounded;

use crate::geometry::GeometryError;
use crate::models::RegionGeometry;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Meters spanned by one degree of latitude.
const METERS_PER_DEGREE: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

/// Results with total area below this are considered collapsed.
const AREA_EPSILON: f64 = 1e-12;

/// Expand a region outward by `distance_m` meters.
///
/// Distance 0 returns the input geometrically unchanged. For positive
/// distances the buffer is planar: longitudes are scaled by the cosine of
/// the feature's mid-latitude so that one isotropic offset in degree space
/// approximates a metric offset, then unscaled. Geodesic exactness is not
/// attempted.
///
/// A non-finite input or a collapsed result is a typed failure; callers
/// drop the feature from the derived set.
pub fn buffer_region(
    geometry: &RegionGeometry,
    distance_m: f64,
) -> Result<RegionGeometry, GeometryError> {
    if !geometry.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    if distance_m <= 0.0 {
        return Ok(geometry.clone());
    }

    let multi = geometry.to_multi_polygon();
    let rect = multi.bounding_rect().ok_or(GeometryError::Collapsed)?;
    // Projection degenerates at the poles; clamp so the scale stays usable.
    let lon_scale = rect.center().y.to_radians().cos().max(0.01);
    let distance_deg = distance_m / METERS_PER_DEGREE;

    let scaled = multi.map_coords(|c| Coord {
        x: c.x * lon_scale,
        y: c.y,
    });
    let buffered = buffer_multi_polygon_rounded(&scaled, distance_deg);
    let unscaled: MultiPolygon<f64> = buffered.map_coords(|c| Coord {
        x: c.x / lon_scale,
        y: c.y,
    });

    let result = RegionGeometry::MultiPolygon(unscaled);
    if !result.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    if result.unsigned_area() < AREA_EPSILON {
        return Err(GeometryError::Collapsed);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, Polygon};

    /// A small square near the NYC coordinate range.
    fn nyc_square() -> RegionGeometry {
        RegionGeometry::Polygon(Polygon::new(
            LineString::from(vec![
                (-74.00, 40.70),
                (-73.99, 40.70),
                (-73.99, 40.71),
                (-74.00, 40.71),
                (-74.00, 40.70),
            ]),
            vec![],
        ))
    }

    #[test]
    fn test_zero_distance_is_identity() {
        let square = nyc_square();

        let result = buffer_region(&square, 0.0).expect("Zero buffer should succeed");

        assert_eq!(result, square);
    }

    #[test]
    fn test_buffer_grows_area() {
        let square = nyc_square();

        let buffered = buffer_region(&square, 100.0).expect("Buffer should succeed");

        assert!(buffered.unsigned_area() > square.unsigned_area());
    }

    #[test]
    fn test_buffer_is_monotonic_in_distance() {
        let square = nyc_square();

        let near = buffer_region(&square, 100.0).expect("Buffer should succeed");
        let far = buffer_region(&square, 300.0).expect("Buffer should succeed");

        assert!(far.unsigned_area() > near.unsigned_area());
    }

    #[test]
    fn test_buffer_keeps_original_points_inside() {
        let square = nyc_square();

        let buffered = buffer_region(&square, 50.0).expect("Buffer should succeed");

        // Corners of the original square stay inside the grown region
        assert!(buffered.contains_point(&geo::Point::new(-74.00, 40.70)));
        assert!(buffered.contains_point(&geo::Point::new(-73.99, 40.71)));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let broken = RegionGeometry::Polygon(Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (f64::NAN, 0.0),
                (1.0, 1.0),
                (0.0, 0.0),
            ]),
            vec![],
        ));

        let result = buffer_region(&broken, 100.0);

        assert!(matches!(result, Err(GeometryError::NonFinite)));
    }

    #[test]
    fn test_multipolygon_input() {
        let parts = RegionGeometry::MultiPolygon(geo::MultiPolygon::new(vec![
            Polygon::new(
                LineString::from(vec![
                    (-74.00, 40.70),
                    (-73.995, 40.70),
                    (-73.995, 40.705),
                    (-74.00, 40.705),
                    (-74.00, 40.70),
                ]),
                vec![],
            ),
            Polygon::new(
                LineString::from(vec![
                    (-73.95, 40.75),
                    (-73.945, 40.75),
                    (-73.945, 40.755),
                    (-73.95, 40.755),
                    (-73.95, 40.75),
                ]),
                vec![],
            ),
        ]));

        let buffered = buffer_region(&parts, 100.0).expect("Buffer should succeed");

        assert!(buffered.unsigned_area() > parts.unsigned_area());
    }
}
