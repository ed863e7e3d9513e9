#![allow(dead_code)]

use jiff::Timestamp;
use sepconstraint::UngriddedData;

pub const ROWS: usize = 10;
pub const COLUMNS: usize = 5;

pub fn timestamp(s: &str) -> Timestamp {
    s.parse().unwrap()
}

/// Regular 10 × 5 reference dataset, flattened row-major
///
/// values:       1..=50
/// latitude:     [-10, -5, 0, 5, 10] along each row
/// longitude:    [-5, -2.5, 0, 2.5, 5] along each row
/// altitude:     0, 10, .., 90 down the columns
/// air pressure: [4, 12, 20, 30, 40, 50, 60, 70, 80, 90] down the columns
/// time:         1984-08-27 .. 1984-08-31 along each row
pub fn regular_4d_data() -> UngriddedData {
    let latitude = [-10.0, -5.0, 0.0, 5.0, 10.0];
    let longitude = [-5.0, -2.5, 0.0, 2.5, 5.0];
    let altitude: Vec<f64> = (0..ROWS).map(|r| r as f64 * 10.0).collect();
    let air_pressure = [4.0, 12.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];
    let time = [
        timestamp("1984-08-27T00:00:00Z"),
        timestamp("1984-08-28T00:00:00Z"),
        timestamp("1984-08-29T00:00:00Z"),
        timestamp("1984-08-30T00:00:00Z"),
        timestamp("1984-08-31T00:00:00Z"),
    ];

    let cells = || (0..ROWS).flat_map(|r| (0..COLUMNS).map(move |c| (r, c)));

    UngriddedData::builder()
        .latitude(cells().map(|(_, c)| latitude[c]).collect())
        .longitude(cells().map(|(_, c)| longitude[c]).collect())
        .altitude(cells().map(|(r, _)| altitude[r]).collect())
        .air_pressure(cells().map(|(r, _)| air_pressure[r]).collect())
        .time(cells().map(|(_, c)| time[c]).collect())
        .values((1..=ROWS * COLUMNS).map(|v| v as f64).collect())
        .build()
        .unwrap()
}

/// Single sample point at the origin on 1984-08-29
pub fn sample_point(altitude: Option<f64>, air_pressure: Option<f64>) -> UngriddedData {
    let mut builder = UngriddedData::builder()
        .latitude(vec![0.0])
        .longitude(vec![0.0])
        .time(vec![timestamp("1984-08-29T00:00:00Z")]);
    if let Some(altitude) = altitude {
        builder = builder.altitude(vec![altitude]);
    }
    if let Some(air_pressure) = air_pressure {
        builder = builder.air_pressure(vec![air_pressure]);
    }
    builder.build().unwrap()
}

/// Values of the given rows and columns, row-major
pub fn grid_values(
    rows: std::ops::Range<usize>,
    columns: std::ops::Range<usize>,
) -> Vec<f64> {
    rows.flat_map(|r| columns.clone().map(move |c| (r * COLUMNS + c + 1) as f64))
        .collect()
}
