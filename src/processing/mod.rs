//! In-memory pipeline stages over loaded trips.
//!
//! The processing layer operates on the trip set produced by ingestion. Data
//! flows strictly one way - derive, then filter, then aggregate or paginate -
//! and no stage mutates its input; each returns a fresh value (or, for
//! [`page()`], a borrowed window).
//!
//! - [`derive()`]: temporal feature derivation (month/weekday/hour)
//! - [`filter()`]: month/weekday selection, order-preserving
//! - [`stats`]: the four statistic groups ([`report()`] runs them all)
//! - [`page()`]: fixed-size raw-row windows
//!
//! ## Example: derive, filter, aggregate
//!
//! ```rust
//! use bikeshare_stats::processing::{derive, filter, page, report, RAW_PAGE_SIZE};
//! use bikeshare_stats::types::{City, DayFilter, FilterSpec, Month, MonthFilter, Trip};
//! use chrono::NaiveDate;
//!
//! let trip = |m: u32, d: u32, duration: f64| Trip {
//!     start_time: NaiveDate::from_ymd_opt(2017, m, d)
//!         .unwrap()
//!         .and_hms_opt(8, 5, 0)
//!         .unwrap(),
//!     start_station: "Clark & Lake".to_string(),
//!     end_station: "Canal & Adams".to_string(),
//!     trip_duration: duration,
//!     user_type: Some("Subscriber".to_string()),
//! };
//!
//! let derived = derive(vec![trip(1, 1, 100.0), trip(3, 15, 200.0), trip(3, 22, 300.0)]);
//!
//! // Keep only March trips.
//! let spec = FilterSpec {
//!     city: City::Chicago,
//!     month: MonthFilter::Only(Month::March),
//!     day: DayFilter::All,
//! };
//! let kept = filter(&derived, &spec);
//! assert_eq!(kept.len(), 2);
//!
//! let report = report(&kept).unwrap();
//! assert_eq!(report.time.popular_month, 3);
//! assert_eq!(report.durations.total_seconds, 500.0);
//! assert_eq!(report.durations.mean_seconds, 250.0);
//!
//! // Raw inspection, five rows at a time.
//! assert_eq!(page(&kept, 0, RAW_PAGE_SIZE).len(), 2);
//! assert!(page(&kept, 5, RAW_PAGE_SIZE).is_empty());
//! ```

pub mod derive;
pub mod filter;
pub mod page;
pub mod stats;

pub use derive::{derive, derive_trip};
pub use filter::filter;
pub use page::{RAW_PAGE_SIZE, page};
pub use stats::{
    DurationStats, Report, StationStats, TimeStats, duration_stats, report, station_stats,
    time_stats, user_type_stats,
};
