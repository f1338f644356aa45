use bikeshare_stats::PipelineError;
use bikeshare_stats::ingestion::{LoadOptions, load_city, load_trips_from_path, load_trips_from_reader};
use bikeshare_stats::types::City;
use chrono::NaiveDate;

fn reader_from(input: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes())
}

#[test]
fn load_trips_from_path_happy_path() {
    let trips = load_trips_from_path("tests/fixtures/chicago.csv").unwrap();

    assert_eq!(trips.len(), 6);

    let first = &trips[0];
    assert_eq!(
        first.start_time,
        NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(0, 7, 57)
            .unwrap()
    );
    assert_eq!(first.start_station, "Clark & Lake");
    assert_eq!(first.end_station, "Canal & Adams");
    assert_eq!(first.trip_duration, 300.0);
    assert_eq!(first.user_type.as_deref(), Some("Subscriber"));
}

#[test]
fn load_city_resolves_dataset_inside_data_dir() {
    let options = LoadOptions {
        data_dir: "tests/fixtures".into(),
        ..Default::default()
    };

    let trips = load_city(City::Chicago, &options).unwrap();
    assert_eq!(trips.len(), 6);

    let trips = load_city(City::Washington, &options).unwrap();
    assert_eq!(trips.len(), 3);
}

#[test]
fn rows_load_in_source_order() {
    let trips = load_trips_from_path("tests/fixtures/chicago.csv").unwrap();
    let months: Vec<u32> = trips
        .iter()
        .map(|t| chrono::Datelike::month(&t.start_time))
        .collect();
    assert_eq!(months, vec![1, 3, 3, 3, 5, 6]);
}

#[test]
fn column_order_does_not_matter() {
    let input = "Trip Duration,End Station,Start Station,Start Time\n\
                 120,Canal & Adams,Clark & Lake,2017-02-01 10:00:00\n";
    let trips = load_trips_from_reader(&mut reader_from(input)).unwrap();

    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].trip_duration, 120.0);
    assert_eq!(trips[0].start_station, "Clark & Lake");
    assert_eq!(trips[0].end_station, "Canal & Adams");
    assert_eq!(trips[0].user_type, None);
}

#[test]
fn missing_required_column_is_a_schema_mismatch() {
    let input = "Start Time,Start Station,End Station\n\
                 2017-02-01 10:00:00,Clark & Lake,Canal & Adams\n";
    let err = load_trips_from_reader(&mut reader_from(input)).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'Trip Duration'"));
}

#[test]
fn unparseable_start_time_fails_the_whole_load() {
    let input = "Start Time,Start Station,End Station,Trip Duration\n\
                 2017-02-01 10:00:00,Clark & Lake,Canal & Adams,120\n\
                 not a timestamp,Clark & Lake,Canal & Adams,60\n";
    let err = load_trips_from_reader(&mut reader_from(input)).unwrap_err();

    match err {
        PipelineError::MalformedRecord { row, column, raw, .. } => {
            // Header is row 1, so the offending record is row 3.
            assert_eq!(row, 3);
            assert_eq!(column, "Start Time");
            assert_eq!(raw, "not a timestamp");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn unparseable_duration_fails_the_whole_load() {
    let input = "Start Time,Start Station,End Station,Trip Duration\n\
                 2017-02-01 10:00:00,Clark & Lake,Canal & Adams,twelve\n";
    let err = load_trips_from_reader(&mut reader_from(input)).unwrap_err();

    match err {
        PipelineError::MalformedRecord { row, column, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Trip Duration");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn missing_user_type_column_loads_as_none() {
    let trips = load_trips_from_path("tests/fixtures/washington.csv").unwrap();

    assert_eq!(trips.len(), 3);
    assert!(trips.iter().all(|t| t.user_type.is_none()));
    assert_eq!(trips[0].trip_duration, 420.5);
}

#[test]
fn empty_user_type_cell_loads_as_none() {
    let trips = load_trips_from_path("tests/fixtures/chicago.csv").unwrap();

    // Last fixture row has an empty User Type cell.
    assert_eq!(trips[5].user_type, None);
    assert_eq!(trips[5].start_station, "Daley Center");
}
