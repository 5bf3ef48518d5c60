// Component label benchmark - measure negative/positive pass construction
//
// Run with: cargo bench --bench prepare_malis_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::{ArrayD, IxDyn};
use voxel_batch::split_components;

/// Blocky labels with 8x8x8 objects
fn synthetic_labels(edge: usize) -> ArrayD<u64> {
    ArrayD::from_shape_fn(IxDyn(&[edge, edge, edge]), |ix| {
        ((ix[0] / 8) * 64 + (ix[1] / 8) * 8 + ix[2] / 8) as u64
    })
}

/// Mask covering everything but a border of 4 voxels
fn synthetic_outside_mask(edge: usize) -> ArrayD<bool> {
    ArrayD::from_shape_fn(IxDyn(&[edge, edge, edge]), |ix| {
        (0..3).any(|d| ix[d] < 4 || ix[d] >= edge - 4)
    })
}

fn bench_split_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_components");

    // Typical training batch sizes
    let edges = vec![(32, "32^3"), (64, "64^3"), (128, "128^3")];

    for (edge, name) in edges {
        let labels = synthetic_labels(edge);
        let outside = synthetic_outside_mask(edge);

        group.bench_with_input(BenchmarkId::new("no_mask", name), &labels, |b, labels| {
            b.iter(|| {
                let components = split_components(black_box(labels), None).unwrap();
                black_box(components.into_stacked());
            });
        });

        group.bench_with_input(
            BenchmarkId::new("with_mask", name),
            &(labels, outside),
            |b, (labels, outside)| {
                b.iter(|| {
                    let components =
                        split_components(black_box(labels), Some(black_box(outside))).unwrap();
                    black_box(components.into_stacked());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_split_components);
criterion_main!(benches);
