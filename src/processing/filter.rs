//! Month/weekday filtering of derived trips.

use crate::types::{DayFilter, DerivedTrip, FilterSpec, MonthFilter};

/// Returns the trips matching `spec`, in their original relative order.
///
/// Month and weekday restrictions compose as logical AND; `All` on either axis
/// disables that test. An empty result is a valid, reportable outcome, not an
/// error. The spec's city field plays no part here - it only selected which
/// dataset was loaded.
pub fn filter(trips: &[DerivedTrip], spec: &FilterSpec) -> Vec<DerivedTrip> {
    trips
        .iter()
        .filter(|t| matches_spec(t, spec))
        .cloned()
        .collect()
}

fn matches_spec(trip: &DerivedTrip, spec: &FilterSpec) -> bool {
    let month_ok = match spec.month {
        MonthFilter::All => true,
        MonthFilter::Only(month) => trip.month == month.number(),
    };
    let day_ok = match spec.day {
        DayFilter::All => true,
        DayFilter::Only(day) => trip.weekday == day.name(),
    };
    month_ok && day_ok
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::filter;
    use crate::processing::derive::derive;
    use crate::types::{City, DayFilter, DerivedTrip, FilterSpec, Month, MonthFilter, Trip, Weekday};

    // Months [1, 3, 3, 5]; weekdays Sunday, Wednesday, Friday, Monday.
    fn sample_trips() -> Vec<DerivedTrip> {
        let days = [(1, 1), (3, 15), (3, 17), (5, 1)];
        let trips = days
            .iter()
            .enumerate()
            .map(|(i, &(m, d))| Trip {
                start_time: NaiveDate::from_ymd_opt(2017, m, d)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap(),
                start_station: format!("S{i}"),
                end_station: format!("E{i}"),
                trip_duration: 60.0,
                user_type: None,
            })
            .collect();
        derive(trips)
    }

    fn spec(month: MonthFilter, day: DayFilter) -> FilterSpec {
        FilterSpec {
            city: City::Chicago,
            month,
            day,
        }
    }

    #[test]
    fn all_all_returns_input_unchanged_in_order() {
        let trips = sample_trips();
        let out = filter(&trips, &spec(MonthFilter::All, DayFilter::All));
        assert_eq!(out, trips);
    }

    #[test]
    fn month_filter_keeps_matching_rows_in_relative_order() {
        let trips = sample_trips();
        let out = filter(&trips, &spec(MonthFilter::Only(Month::March), DayFilter::All));

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], trips[1]);
        assert_eq!(out[1], trips[2]);
        // Original untouched.
        assert_eq!(trips.len(), 4);
    }

    #[test]
    fn day_filter_matches_full_capitalized_name() {
        let trips = sample_trips();
        let out = filter(&trips, &spec(MonthFilter::All, DayFilter::Only(Weekday::Wednesday)));

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].weekday, "Wednesday");
        assert_eq!(out[0], trips[1]);
    }

    #[test]
    fn month_and_day_compose_as_and() {
        let trips = sample_trips();

        let out = filter(
            &trips,
            &spec(MonthFilter::Only(Month::March), DayFilter::Only(Weekday::Friday)),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], trips[2]);

        // March trips exist and Monday trips exist, but no March Monday.
        let out = filter(
            &trips,
            &spec(MonthFilter::Only(Month::March), DayFilter::Only(Weekday::Monday)),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn no_match_returns_empty_not_error() {
        let trips = sample_trips();
        let out = filter(&trips, &spec(MonthFilter::Only(Month::June), DayFilter::All));
        assert!(out.is_empty());
    }
}
