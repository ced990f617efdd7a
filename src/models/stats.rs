//! Batch intersection statistics.

use serde::{Deserialize, Serialize};

/// Result of one batch intersection pass.
///
/// The counts are valid for the derived district set that was current when
/// the analysis started; a later recompute silently stales them. Pickup and
/// dropoff counts are independent - a trip can contribute to one, both, or
/// neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionStats {
    /// Trips in the analyzed batch
    pub total_trips: u64,
    /// Trips whose pickup point fell inside a district
    pub pickup_in_bid: u64,
    /// Trips whose dropoff point fell inside a district
    pub dropoff_in_bid: u64,
    /// Wall-clock duration of the full pass, milliseconds
    pub elapsed_ms: f64,
    /// When the pass finished (RFC 3339)
    pub computed_at: String,
}
