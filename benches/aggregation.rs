use bikeshare_stats::processing::{derive, filter, report};
use bikeshare_stats::types::{City, DayFilter, DerivedTrip, FilterSpec, Month, MonthFilter, Trip};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const STATIONS: &[&str] = &[
    "Clark & Lake",
    "Canal & Adams",
    "Daley Center",
    "Theater on the Lake",
    "Wabash & Grand",
];

fn synthetic_trips(n: usize) -> Vec<DerivedTrip> {
    let trips = (0..n)
        .map(|i| Trip {
            start_time: NaiveDate::from_ymd_opt(2017, (i % 6) as u32 + 1, (i % 28) as u32 + 1)
                .unwrap()
                .and_hms_opt((i % 24) as u32, (i % 60) as u32, 0)
                .unwrap(),
            start_station: STATIONS[i % STATIONS.len()].to_string(),
            end_station: STATIONS[(i + 2) % STATIONS.len()].to_string(),
            trip_duration: (60 + (i % 3600)) as f64,
            user_type: match i % 3 {
                0 => Some("Subscriber".to_string()),
                1 => Some("Customer".to_string()),
                _ => None,
            },
        })
        .collect();
    derive(trips)
}

fn bench_report(c: &mut Criterion) {
    let trips = synthetic_trips(10_000);
    c.bench_function("report_10k_trips", |b| {
        b.iter(|| report(black_box(&trips)).unwrap())
    });
}

fn bench_filter(c: &mut Criterion) {
    let trips = synthetic_trips(10_000);
    let spec = FilterSpec {
        city: City::Chicago,
        month: MonthFilter::Only(Month::March),
        day: DayFilter::All,
    };
    c.bench_function("filter_10k_trips_by_month", |b| {
        b.iter(|| filter(black_box(&trips), black_box(&spec)))
    });
}

criterion_group!(benches, bench_report, bench_filter);
criterion_main!(benches);
