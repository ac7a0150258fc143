use chrono::TimeZone;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::{
    ALL_PLANETS, ChartSnapshot, Placement, birth_balance, compute_ashtakavarga, detect_yogas,
    mahadasha_sequence, nakshatra_from_longitude, periods_at, sign_from_longitude,
};

fn sample_chart() -> ChartSnapshot {
    let asc = 195.5;
    let placements = ALL_PLANETS
        .iter()
        .enumerate()
        .map(|(i, &p)| Placement::derive(p, i as f64 * 38.7 + 4.2, 0.3, 1.1, false, asc))
        .collect();
    ChartSnapshot::assemble(asc, placements)
}

fn derivation_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    group.bench_function("sign_from_longitude", |b| {
        b.iter(|| sign_from_longitude(black_box(123.456)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(123.456)))
    });
    group.bench_function("chart_assemble", |b| b.iter(sample_chart));
    group.finish();
}

fn engines_bench(c: &mut Criterion) {
    let chart = sample_chart();
    let birth = chrono::Utc.with_ymd_and_hms(1990, 5, 15, 6, 30, 0).unwrap();
    let balance = birth_balance(45.0);
    let sequence = mahadasha_sequence(birth, &balance);
    let query = birth + chrono::Duration::days(9_000);

    let mut group = c.benchmark_group("engines");
    group.bench_function("detect_yogas", |b| b.iter(|| detect_yogas(black_box(&chart))));
    group.bench_function("ashtakavarga", |b| {
        b.iter(|| compute_ashtakavarga(black_box(&chart)))
    });
    group.bench_function("dasha_lookup", |b| {
        b.iter(|| periods_at(black_box(&sequence), black_box(query)))
    });
    group.finish();
}

criterion_group!(benches, derivation_bench, engines_bench);
criterion_main!(benches);
