use criterion::{black_box, criterion_group, criterion_main, Criterion};
use surya_core::{
    approximate_longitude_deg, approximate_position_of_sun, precise_longitude_deg,
    precise_position_of_sun, LocalTime, TimeZone,
};

fn longitude_bench(c: &mut Criterion) {
    let jd = 2_452_847.5;

    let mut group = c.benchmark_group("longitude");
    group.bench_function("approximate", |b| {
        b.iter(|| approximate_longitude_deg(black_box(jd)))
    });
    group.bench_function("precise", |b| {
        b.iter(|| precise_longitude_deg(black_box(jd)))
    });
    group.finish();
}

fn position_bench(c: &mut Criterion) {
    let local = LocalTime::new(2003, 7, 27, 0, 0, 0.0);
    let zone = TimeZone::utc();

    let mut group = c.benchmark_group("position");
    group.bench_function("approximate", |b| {
        b.iter(|| approximate_position_of_sun(black_box(&local), black_box(&zone)))
    });
    group.bench_function("precise", |b| {
        b.iter(|| precise_position_of_sun(black_box(&local), black_box(&zone)))
    });
    group.finish();
}

criterion_group!(benches, longitude_bench, position_bench);
criterion_main!(benches);
