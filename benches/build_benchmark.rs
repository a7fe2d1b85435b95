use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use i18n_sheet::build::{build_row_tree, KeyPath};
use i18n_sheet::{build_locale_tree, Row};

/// Generate a sheet of `count` rows mixing nested fields and list entries
fn synthetic_sheet(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let key = if i % 5 == 0 {
                format!("section{}.items.{}.label", i % 40, i % 12)
            } else {
                format!("section{}.group{}.key{}", i % 40, i % 7, i)
            };
            vec![key, format!("값 {}", i), format!("value {}", i)]
        })
        .collect()
}

fn languages() -> Vec<String> {
    vec!["ko".to_string(), "en".to_string()]
}

/// Benchmark building one locale tree from sheets of increasing size
fn bench_build_locale_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_locale_tree");

    for size in [100usize, 1_000, 10_000] {
        let rows = synthetic_sheet(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| build_locale_tree(black_box(rows), &languages(), "en").unwrap());
        });
    }

    group.finish();
}

/// Benchmark parsing and materializing a single deep row
fn bench_row_tree(c: &mut Criterion) {
    c.bench_function("row_tree_deep_path", |b| {
        b.iter(|| {
            let path = KeyPath::parse(black_box(
                "available.audio.three.tow.depth.value3.age.student.school.3.type",
            ));
            build_row_tree(&path, "유치원")
        });
    });
}

criterion_group!(benches, bench_build_locale_tree, bench_row_tree);
criterion_main!(benches);
