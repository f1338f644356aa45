//! `bikeshare-stats` answers descriptive-statistics questions over trip-log
//! records from three US bike-share systems (chicago, new york, washington).
//!
//! Given a city and optional month/weekday filters, the pipeline loads the
//! matching dataset into an in-memory trip set, derives temporal features from
//! each start timestamp, filters rows, and reports:
//!
//! - the most frequent travel month, weekday, and start hour
//! - the most popular start and end stations
//! - total and mean trip duration (seconds)
//! - the user-type breakdown, descending by count
//!
//! plus paginated inspection of the raw filtered rows, five at a time.
//!
//! The primary entrypoint is [`pipeline::analyze`]: one call per
//! [`types::FilterSpec`], returning the filtered working set and a full
//! [`processing::Report`], or an error.
//!
//! ## Quick example: one analysis run
//!
//! ```no_run
//! use bikeshare_stats::ingestion::LoadOptions;
//! use bikeshare_stats::pipeline::analyze;
//! use bikeshare_stats::processing::{page, RAW_PAGE_SIZE};
//! use bikeshare_stats::types::FilterSpec;
//!
//! # fn main() -> Result<(), bikeshare_stats::PipelineError> {
//! // Raw user tokens are validated here, before any dataset is read.
//! let spec = FilterSpec::parse("chicago", "march", "all")?;
//!
//! let options = LoadOptions {
//!     data_dir: "data".into(),
//!     ..Default::default()
//! };
//!
//! let analysis = analyze(&spec, &options)?;
//! println!("most popular hour: {}", analysis.report.time.popular_hour);
//! println!("first page: {:?}", page(&analysis.trips, 0, RAW_PAGE_SIZE));
//! # Ok(())
//! # }
//! ```
//!
//! ## Dataset contract
//!
//! One CSV per city (`chicago.csv`, `new_york_city.csv`, `washington.csv`)
//! with at minimum the columns `Start Time` (`%Y-%m-%d %H:%M:%S`),
//! `Start Station`, `End Station`, and `Trip Duration` (seconds), in any
//! column order. `User Type` is optional; the washington export omits it.
//! The exports only span January through June, and the month filter is
//! restricted to that range.
//!
//! An unparseable `Start Time` or `Trip Duration` fails the whole load with
//! [`PipelineError::MalformedRecord`]; an empty filtered set fails aggregation
//! with [`PipelineError::EmptyResult`] ("no data for this selection") rather
//! than reporting a spurious answer.
//!
//! ## Modules
//!
//! - [`ingestion`]: city-dataset loading and load observability
//! - [`types`]: cities, filters, and the trip model
//! - [`processing`]: derive / filter / stats / page stages
//! - [`pipeline`]: the request/response entry point
//! - [`error`]: the error type shared across the pipeline

pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{PipelineError, PipelineResult};
