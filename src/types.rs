//! Core domain types for the trip pipeline.
//!
//! A [`Trip`] is one record as loaded from a city dataset; a [`DerivedTrip`] is a
//! trip augmented with the temporal features computed from its start timestamp.
//! [`FilterSpec`] is the city + optional month/weekday selection that drives one
//! pipeline run.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::PipelineError;

/// One of the three supported bike-share systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    /// File name of this city's dataset inside the data directory.
    pub fn data_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYork => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "chicago",
            City::NewYork => "new york",
            City::Washington => "washington",
        };
        f.write_str(name)
    }
}

impl FromStr for City {
    type Err = PipelineError;

    /// Case-insensitive; accepts `"new york"` and `"new_york"` interchangeably.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york" | "new_york" => Ok(City::NewYork),
            "washington" => Ok(City::Washington),
            _ => Err(PipelineError::UnknownCity { name: s.to_owned() }),
        }
    }
}

/// A month covered by the datasets.
///
/// The exports only span January through June; later months are rejected at the
/// boundary like any other unknown token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// Calendar month number, 1-based (january = 1 .. june = 6).
    pub fn number(self) -> u32 {
        self as u32 + 1
    }
}

impl FromStr for Month {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "january" => Ok(Month::January),
            "february" => Ok(Month::February),
            "march" => Ok(Month::March),
            "april" => Ok(Month::April),
            "may" => Ok(Month::May),
            "june" => Ok(Month::June),
            _ => Err(PipelineError::UnknownMonth { name: s.to_owned() }),
        }
    }
}

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Capitalized full English name, matching [`DerivedTrip::weekday`].
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl FromStr for Weekday {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" => Ok(Weekday::Sunday),
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            _ => Err(PipelineError::UnknownWeekday { name: s.to_owned() }),
        }
    }
}

/// Month selection: everything, or a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    /// No month filtering.
    All,
    /// Keep only trips starting in this month.
    Only(Month),
}

impl FromStr for MonthFilter {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(MonthFilter::All)
        } else {
            s.parse::<Month>().map(MonthFilter::Only)
        }
    }
}

/// Weekday selection: everything, or a single day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    /// No weekday filtering.
    All,
    /// Keep only trips starting on this day.
    Only(Weekday),
}

impl FromStr for DayFilter {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(DayFilter::All)
        } else {
            s.parse::<Weekday>().map(DayFilter::Only)
        }
    }
}

/// The city + optional month/weekday selection driving one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    /// Which city dataset to load.
    pub city: City,
    /// Optional month restriction.
    pub month: MonthFilter,
    /// Optional weekday restriction.
    pub day: DayFilter,
}

impl FilterSpec {
    /// Parse a spec from raw user tokens (case-insensitive).
    ///
    /// Invalid tokens are rejected here, before any dataset is read; the caller
    /// decides whether to re-prompt.
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self, PipelineError> {
        Ok(Self {
            city: city.parse()?,
            month: month.parse()?,
            day: day.parse()?,
        })
    }
}

/// One trip record as stored in a city dataset.
///
/// Trips are created once at load time and are immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Start timestamp; source of every derived field.
    pub start_time: NaiveDateTime,
    /// Station the trip started from.
    pub start_station: String,
    /// Station the trip ended at.
    pub end_station: String,
    /// Trip length in seconds.
    pub trip_duration: f64,
    /// Rider category. `None` when the dataset has no `User Type` column or the
    /// cell is empty; such trips are excluded from user-type counts entirely.
    pub user_type: Option<String>,
}

/// A [`Trip`] augmented with temporal features derived from its start timestamp.
///
/// All three features are functions purely of `trip.start_time`: two trips with
/// equal start times always carry equal derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTrip {
    /// The underlying trip record, unchanged.
    pub trip: Trip,
    /// Calendar month number of the start time, 1-12.
    pub month: u32,
    /// Full English weekday name of the start time (e.g. `"Sunday"`).
    pub weekday: String,
    /// Zero-based hour of day of the start time, 0-23.
    pub hour: u32,
}
