//! Aggregate statistics over the filtered trip set.
//!
//! Four independent read-only reductions: times of travel, stations, trip
//! duration, and user-type breakdown. Every mode in this module is a
//! *stable-first* mode: the most frequent value, ties broken by earliest first
//! occurrence in the filtered order. Each group requires a non-empty input and
//! fails with [`PipelineError::EmptyResult`] otherwise - the mode of an empty
//! series is undefined, not "no preference".

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{PipelineError, PipelineResult};
use crate::types::DerivedTrip;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// Most frequent start month, 1-12.
    pub popular_month: u32,
    /// Most frequent start weekday (full English name).
    pub popular_weekday: String,
    /// Most frequent start hour, 0-23.
    pub popular_hour: u32,
}

/// Most popular stations, computed independently per endpoint (not as a joint
/// start-to-end trip mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub popular_start_station: String,
    pub popular_end_station: String,
}

/// Total and mean trip duration, in seconds as stored, unconverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
}

/// All four statistic groups over one filtered trip set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub time: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    /// `(user_type, count)` in descending count order; see [`user_type_stats`].
    pub user_types: Vec<(String, usize)>,
}

/// Stable-first mode: the most frequent value, ties broken by earliest first
/// occurrence. `None` only for an empty input.
fn stable_mode<T, I>(values: I) -> Option<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut order: Vec<T> = Vec::new();
    for v in values {
        let count = counts.entry(v.clone()).or_insert(0);
        if *count == 0 {
            order.push(v);
        }
        *count += 1;
    }

    // `order` is first-seen order, so only a strictly greater count displaces
    // the current winner.
    let mut best: Option<(T, usize)> = None;
    for v in order {
        let count = counts[&v];
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((v, count)),
        }
    }
    best.map(|(v, _)| v)
}

/// Most frequent start month, weekday, and hour.
pub fn time_stats(trips: &[DerivedTrip]) -> PipelineResult<TimeStats> {
    let popular_month =
        stable_mode(trips.iter().map(|t| t.month)).ok_or(PipelineError::EmptyResult)?;
    let popular_weekday = stable_mode(trips.iter().map(|t| t.weekday.as_str()))
        .ok_or(PipelineError::EmptyResult)?
        .to_owned();
    let popular_hour =
        stable_mode(trips.iter().map(|t| t.hour)).ok_or(PipelineError::EmptyResult)?;

    Ok(TimeStats {
        popular_month,
        popular_weekday,
        popular_hour,
    })
}

/// Most frequent start station and end station.
pub fn station_stats(trips: &[DerivedTrip]) -> PipelineResult<StationStats> {
    let popular_start_station = stable_mode(trips.iter().map(|t| t.trip.start_station.as_str()))
        .ok_or(PipelineError::EmptyResult)?
        .to_owned();
    let popular_end_station = stable_mode(trips.iter().map(|t| t.trip.end_station.as_str()))
        .ok_or(PipelineError::EmptyResult)?
        .to_owned();

    Ok(StationStats {
        popular_start_station,
        popular_end_station,
    })
}

/// Sum and arithmetic mean of trip duration.
pub fn duration_stats(trips: &[DerivedTrip]) -> PipelineResult<DurationStats> {
    if trips.is_empty() {
        return Err(PipelineError::EmptyResult);
    }

    let total_seconds: f64 = trips.iter().map(|t| t.trip.trip_duration).sum();
    let mean_seconds = total_seconds / trips.len() as f64;

    Ok(DurationStats {
        total_seconds,
        mean_seconds,
    })
}

/// Count of trips per distinct user type, descending by count, ties in
/// first-seen order.
///
/// Trips without a user type are excluded from the enumeration entirely (no
/// synthetic "unknown" bucket), so a non-empty trip set can legitimately yield
/// an empty breakdown.
pub fn user_type_stats(trips: &[DerivedTrip]) -> PipelineResult<Vec<(String, usize)>> {
    if trips.is_empty() {
        return Err(PipelineError::EmptyResult);
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for t in trips {
        if let Some(user_type) = t.trip.user_type.as_deref() {
            let count = counts.entry(user_type).or_insert(0);
            if *count == 0 {
                order.push(user_type);
            }
            *count += 1;
        }
    }

    let mut out: Vec<(String, usize)> = order
        .into_iter()
        .map(|user_type| (user_type.to_owned(), counts[user_type]))
        .collect();
    // Stable sort: equal counts keep their first-seen order.
    out.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(out)
}

/// Compute all four statistic groups over one filtered trip set.
pub fn report(trips: &[DerivedTrip]) -> PipelineResult<Report> {
    Ok(Report {
        time: time_stats(trips)?,
        stations: station_stats(trips)?,
        durations: duration_stats(trips)?,
        user_types: user_type_stats(trips)?,
    })
}
