use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;
use walkmap::{parse_map_document, LatLng, MarkerStore};

fn bench_document_parsing(c: &mut Criterion) {
    let json_content = include_str!("../tests/fixtures/sample_map.json");

    c.bench_function("json_parse_sample_map", |b| {
        b.iter(|| {
            let map = parse_map_document(black_box(json_content)).expect("JSON parse failed");
            black_box(map.store.len())
        })
    });
}

fn build_synthetic_store(marker_count: usize) -> MarkerStore {
    let mut store = MarkerStore::new();

    for index in 0..marker_count {
        let column = (index % 1000) as f64;
        let row = (index / 1000) as f64;
        let lat = -80.0 + row * 0.05 + column * 0.00001;
        let lng = -170.0 + column * 0.3;
        let position = LatLng::new(lat, lng).expect("synthetische Koordinaten gültig");
        store.add(position);
    }

    store
}

fn bench_store_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_store");

    for &marker_count in &[1_000usize, 10_000usize] {
        let store = build_synthetic_store(marker_count);

        group.bench_with_input(
            BenchmarkId::new("walk_next_from_first", marker_count),
            &store,
            |b, store| {
                b.iter(|| {
                    let mut store = store.clone();
                    if let Some(first) = store.get_index(0).map(|m| m.id) {
                        store.select(first);
                    }
                    let mut steps = 0usize;
                    while store.select_next() {
                        steps += 1;
                    }
                    black_box(steps)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("duplicate_add", marker_count),
            &store,
            |b, store| {
                let existing = store
                    .get_index(marker_count / 2)
                    .map(|m| m.position)
                    .expect("Store sollte Marker enthalten");
                b.iter(|| {
                    let mut store = store.clone();
                    black_box(store.add(black_box(existing)))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nearest_within", marker_count),
            &store,
            |b, store| {
                b.iter(|| black_box(store.nearest_within(black_box(Vec2::new(150.0, 7990.0)), 50.0)))
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_document_parsing, bench_store_operations);
criterion_main!(core_benches);
