//! CSV loading of city trip datasets.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{PipelineError, PipelineResult};
use crate::types::{City, Trip};

use super::LoadOptions;
use super::observability::{LoadContext, LoadSeverity, LoadStats};

/// Timestamp layout used by the city exports (e.g. `2017-01-01 00:07:57`).
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const COL_START_TIME: &str = "Start Time";
const COL_START_STATION: &str = "Start Station";
const COL_END_STATION: &str = "End Station";
const COL_TRIP_DURATION: &str = "Trip Duration";
const COL_USER_TYPE: &str = "User Type";

/// Load one city's trip dataset from `options.data_dir`.
///
/// Reads the backing CSV once and returns trips in source order. Any record
/// whose `Start Time` or `Trip Duration` cannot be parsed fails the whole load
/// with [`PipelineError::MalformedRecord`] - no partial trip set is returned.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with trip count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
pub fn load_city(city: City, options: &LoadOptions) -> PipelineResult<Vec<Trip>> {
    let path = options.data_dir.join(city.data_file());
    let result = load_trips_from_path(&path);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = LoadContext {
            city,
            path: path.clone(),
        };
        match &result {
            Ok(trips) => obs.on_success(&ctx, LoadStats { rows: trips.len() }),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Load trips from a CSV file at `path`.
pub fn load_trips_from_path(path: impl AsRef<Path>) -> PipelineResult<Vec<Trip>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_trips_from_reader(&mut rdr)
}

/// Load trips from an existing CSV reader.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain `Start Time`, `Start Station`, `End Station`, and
///   `Trip Duration` (order can differ; extra columns are ignored).
/// - `User Type` is optional; a missing column or empty cell loads as `None`.
pub fn load_trips_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> PipelineResult<Vec<Trip>> {
    let headers = rdr.headers()?.clone();

    let start_time_idx = required_column(&headers, COL_START_TIME)?;
    let start_station_idx = required_column(&headers, COL_START_STATION)?;
    let end_station_idx = required_column(&headers, COL_END_STATION)?;
    let duration_idx = required_column(&headers, COL_TRIP_DURATION)?;
    let user_type_idx = headers.iter().position(|h| h == COL_USER_TYPE);

    let mut trips: Vec<Trip> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let raw_start = record.get(start_time_idx).unwrap_or("");
        let start_time = NaiveDateTime::parse_from_str(raw_start.trim(), START_TIME_FORMAT)
            .map_err(|e| PipelineError::MalformedRecord {
                row: user_row,
                column: COL_START_TIME.to_owned(),
                raw: raw_start.to_owned(),
                message: e.to_string(),
            })?;

        let raw_duration = record.get(duration_idx).unwrap_or("");
        let trip_duration = raw_duration.trim().parse::<f64>().map_err(|e| {
            PipelineError::MalformedRecord {
                row: user_row,
                column: COL_TRIP_DURATION.to_owned(),
                raw: raw_duration.to_owned(),
                message: e.to_string(),
            }
        })?;

        let user_type = user_type_idx
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        trips.push(Trip {
            start_time,
            start_station: record.get(start_station_idx).unwrap_or("").trim().to_owned(),
            end_station: record.get(end_station_idx).unwrap_or("").trim().to_owned(),
            trip_duration,
            user_type,
        });
    }

    Ok(trips)
}

fn required_column(headers: &csv::StringRecord, name: &str) -> PipelineResult<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        PipelineError::SchemaMismatch {
            message: format!(
                "missing required column '{name}'. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        }
    })
}

fn severity_for_error(e: &PipelineError) -> LoadSeverity {
    match e {
        PipelineError::Io(_) => LoadSeverity::Critical,
        PipelineError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        _ => LoadSeverity::Error,
    }
}
