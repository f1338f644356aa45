//! Temporal feature derivation for loaded trips.

use chrono::{Datelike, Timelike};

use crate::types::{DerivedTrip, Trip};

/// Derive month/weekday/hour features for every trip.
///
/// Pure mapping: one output per input, same order, original field values
/// untouched. The derived fields are functions purely of each trip's start
/// time, so re-deriving yields identical results.
pub fn derive(trips: Vec<Trip>) -> Vec<DerivedTrip> {
    trips.into_iter().map(derive_trip).collect()
}

/// Derive the temporal features of a single trip.
///
/// The weekday is the full English name (`%A`, locale-invariant) of the
/// timestamp's own calendar day; no timezone conversion is performed.
pub fn derive_trip(trip: Trip) -> DerivedTrip {
    let month = trip.start_time.month();
    let weekday = trip.start_time.format("%A").to_string();
    let hour = trip.start_time.hour();

    DerivedTrip {
        trip,
        month,
        weekday,
        hour,
    }
}
