//! Criterion benchmarks for affine transform fast paths.
//! Compares per-kind transform and composition against the general multiply.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::affine::AffineMatrix;
use planar::Pt2;

fn kinds() -> Vec<(&'static str, AffineMatrix)> {
    vec![
        ("identity", AffineMatrix::identity()),
        ("translation", AffineMatrix::translation(1.5, -0.5)),
        ("scaling", AffineMatrix::scaling(2.0, 0.5)),
        ("general", AffineMatrix::rotation(37.0)),
    ]
}

fn bench_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine");
    let p = Pt2::new(1.25, -3.5);

    for (name, m) in kinds() {
        group.bench_with_input(BenchmarkId::new("transform_point", name), &m, |b, m| {
            b.iter(|| m.transform_point(p))
        });
    }

    for (name_a, a) in kinds() {
        for (name_b, b_mat) in kinds() {
            group.bench_with_input(
                BenchmarkId::new("then", format!("{name_a}_{name_b}")),
                &(a, b_mat),
                |b, (a, bm)| b.iter(|| a.then(bm)),
            );
        }
    }

    group.bench_function("inverse_general", |b| {
        let m = AffineMatrix::new(1.0, 0.5, -0.25, 2.0, 3.0, 4.0);
        b.iter(|| m.inverse().unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_affine);
criterion_main!(benches);
