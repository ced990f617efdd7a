// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Taxi trip loading and coordinate filtering.

use crate::config::Config;
use crate::models::Trip;
use crate::services::fetch::{fetch_text, FetchError};

/// Coordinates this close to zero are placeholder values, not positions.
const MIN_COORD_MAGNITUDE: f64 = 1.0;

/// Errors from trip loading.
#[derive(Debug, thiserror::Error)]
pub enum TripError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Trip CSV is empty")]
    Empty,

    #[error("Trip CSV is missing column: {0}")]
    MissingColumn(&'static str),
}

/// Load and filter the taxi trips.
pub async fn load_trips(config: &Config) -> Result<Vec<Trip>, TripError> {
    let csv = fetch_text(&config.trips_source).await?;
    let trips = parse_trips_csv(&csv)?;
    tracing::info!(count = trips.len(), "Loaded taxi trips");
    Ok(trips)
}

/// Parse the trip CSV.
///
/// Columns are located by header name. Rows shorter than the header, rows
/// with unparseable coordinates, and rows where any endpoint coordinate has
/// magnitude below 1 (sentinel data) are discarded.
pub fn parse_trips_csv(csv: &str) -> Result<Vec<Trip>, TripError> {
    let mut lines = csv.trim().lines();
    let header: Vec<&str> = lines.next().ok_or(TripError::Empty)?.split(',').collect();

    let column = |name: &'static str| -> Result<usize, TripError> {
        header
            .iter()
            .position(|c| c.trim() == name)
            .ok_or(TripError::MissingColumn(name))
    };
    let columns = [
        column("pickup_longitude")?,
        column("pickup_latitude")?,
        column("dropoff_longitude")?,
        column("dropoff_latitude")?,
    ];

    let mut trips = Vec::new();
    for line in lines {
        let row: Vec<&str> = line.split(',').collect();
        if row.len() < header.len() {
            continue;
        }

        let Some(coords) = parse_coords(&row, columns) else {
            continue;
        };
        if coords.iter().any(|c| c.abs() < MIN_COORD_MAGNITUDE) {
            continue;
        }

        trips.push(Trip::new([coords[0], coords[1]], [coords[2], coords[3]]));
    }

    Ok(trips)
}

fn parse_coords(row: &[&str], columns: [usize; 4]) -> Option<[f64; 4]> {
    let mut coords = [0.0; 4];
    for (slot, index) in coords.iter_mut().zip(columns) {
        *slot = row[index].trim().parse().ok()?;
    }
    Some(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "fare,pickup_longitude,pickup_latitude,dropoff_longitude,dropoff_latitude";

    #[test]
    fn test_parses_valid_rows() {
        let csv = format!(
            "{HEADER}\n12.5,-73.99,40.75,-73.98,40.76\n8.0,-73.97,40.74,-73.96,40.73"
        );

        let trips = parse_trips_csv(&csv).expect("Parse should succeed");

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].pickup.x(), -73.99);
        assert_eq!(trips[0].pickup.y(), 40.75);
        assert_eq!(trips[1].dropoff.x(), -73.96);
    }

    #[test]
    fn test_zero_coordinate_rows_are_discarded() {
        // Pickup longitude 0.0 marks sentinel data
        let csv = format!(
            "{HEADER}\n12.5,0.0,40.75,-73.98,40.76\n8.0,-73.97,40.74,-73.96,40.73"
        );

        let trips = parse_trips_csv(&csv).expect("Parse should succeed");

        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].pickup.x(), -73.97);
    }

    #[test]
    fn test_sub_unit_magnitude_is_sentinel() {
        let csv = format!("{HEADER}\n12.5,-73.99,40.75,0.4,-0.9");

        let trips = parse_trips_csv(&csv).expect("Parse should succeed");

        assert!(trips.is_empty());
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let csv = format!("{HEADER}\n12.5,-73.99\n8.0,-73.97,40.74,-73.96,40.73");

        let trips = parse_trips_csv(&csv).expect("Parse should succeed");

        assert_eq!(trips.len(), 1);
    }

    #[test]
    fn test_unparseable_coordinates_are_skipped() {
        let csv = format!("{HEADER}\n12.5,garbage,40.75,-73.98,40.76");

        let trips = parse_trips_csv(&csv).expect("Parse should succeed");

        assert!(trips.is_empty());
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "fare,pickup_longitude,pickup_latitude\n12.5,-73.99,40.75";

        let result = parse_trips_csv(csv);

        assert!(matches!(
            result,
            Err(TripError::MissingColumn("dropoff_longitude"))
        ));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(parse_trips_csv(""), Err(TripError::Empty)));
    }
}
