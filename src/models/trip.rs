// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Taxi trip model.

use geo::Point;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A single taxi trip: pickup and dropoff endpoints in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trip {
    pub pickup: Point<f64>,
    pub dropoff: Point<f64>,
}

impl Trip {
    pub fn new(pickup: [f64; 2], dropoff: [f64; 2]) -> Self {
        Self {
            pickup: Point::new(pickup[0], pickup[1]),
            dropoff: Point::new(dropoff[0], dropoff[1]),
        }
    }
}

// Serialized as `{"pickup": [lon, lat], "dropoff": [lon, lat]}` - the shape
// the scatterplot layer consumes.
impl Serialize for Trip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Trip", 2)?;
        state.serialize_field("pickup", &[self.pickup.x(), self.pickup.y()])?;
        state.serialize_field("dropoff", &[self.dropoff.x(), self.dropoff.y()])?;
        state.end()
    }
}
