use criterion::{Criterion, criterion_group, criterion_main};
use jiff::{SignedDuration, Timestamp};
use sepconstraint::{SeparationIndex, UngriddedData};

fn global_grid(step: usize) -> UngriddedData {
    let cells: Vec<(f64, f64)> = (-90i32..=90)
        .step_by(step)
        .flat_map(|lat| (-180i32..180).step_by(step).map(move |lon| (f64::from(lat), f64::from(lon))))
        .collect();
    let start: Timestamp = "2020-01-01T00:00:00Z".parse().unwrap();

    UngriddedData::builder()
        .latitude(cells.iter().map(|&(lat, _)| lat).collect())
        .longitude(cells.iter().map(|&(_, lon)| lon).collect())
        .altitude(cells.iter().map(|&(lat, _)| lat.abs() * 100.0).collect())
        .time(
            (0..cells.len())
                .map(|i| start + SignedDuration::from_mins(i as i64))
                .collect(),
        )
        .build()
        .unwrap()
}

fn index_benchmark(c: &mut Criterion) {
    let data = global_grid(1);

    c.bench_function("build_index", |b| {
        b.iter(|| SeparationIndex::build(&data).unwrap());
    });
}

criterion_group!(benches, index_benchmark);
criterion_main!(benches);
