//! Criterion micro-benchmarks for grid access, iteration, and fill.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use planar_core::{Bounds, Extents, Indices};
use planar_grid::{DenseGrid, FixedTiledGrid, Grid, GridMut, Traversal};

/// Benchmark: fill a 2000x2000 dense grid cell-by-cell.
fn bench_dense_fill_4m(c: &mut Criterion) {
    let mut grid = DenseGrid::filled(Extents::new(2000, 2000), 0i32).unwrap();

    c.bench_function("dense_fill_4m", |b| {
        b.iter(|| {
            grid.fill(black_box(2));
        });
    });
}

/// Benchmark: row-major read of every cell of a 1000x1000 dense grid.
fn bench_dense_iterate_1m(c: &mut Criterion) {
    let grid = DenseGrid::filled(Extents::new(1000, 1000), 7i32).unwrap();

    c.bench_function("dense_iterate_1m", |b| {
        b.iter(|| {
            let sum: i64 = grid.cells(Traversal::RowMajor).map(|&v| v as i64).sum();
            black_box(sum);
        });
    });
}

/// Benchmark: read every cell of a fully-sparse tiled grid.
///
/// No tile is materialized, so every access resolves to the shared
/// default value.
fn bench_tiled_sparse_read_1m(c: &mut Criterion) {
    let grid = FixedTiledGrid::<i32, 1000, 1000, 250, 250>::new(7).unwrap();

    c.bench_function("tiled_sparse_read_1m", |b| {
        b.iter(|| {
            let sum: i64 = grid.cells(Traversal::RowMajor).map(|&v| v as i64).sum();
            black_box(sum);
        });
    });
}

/// Benchmark: fill a tiled grid, materializing all 16 tiles each build.
fn bench_tiled_fill_materializing(c: &mut Criterion) {
    c.bench_function("tiled_fill_materializing", |b| {
        b.iter(|| {
            let mut grid = FixedTiledGrid::<i32, 2000, 2000, 500, 500>::new(1).unwrap();
            grid.fill(black_box(2));
            black_box(grid.active());
        });
    });
}

/// Benchmark: write through a window view into a dense grid.
fn bench_view_window_writes(c: &mut Criterion) {
    let mut grid = DenseGrid::filled(Extents::new(1024, 1024), 0i32).unwrap();
    let bounds = Bounds::sized::<256, 256>(Indices::new(384, 384));

    c.bench_function("view_window_writes", |b| {
        b.iter(|| {
            let mut window = grid.view_mut(bounds).unwrap();
            window.fill(black_box(5));
        });
    });
}

criterion_group!(
    benches,
    bench_dense_fill_4m,
    bench_dense_iterate_1m,
    bench_tiled_sparse_read_1m,
    bench_tiled_fill_materializing,
    bench_view_window_writes
);
criterion_main!(benches);
