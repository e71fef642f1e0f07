use checkers_engine::{Grid, Side};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn movable_both_sides(grid: &Grid) -> usize {
    grid.movable_pieces(Side::Red).len() + grid.movable_pieces(Side::Black).len()
}

fn full_scan(grid: &Grid) -> usize {
    grid.iter_pieces()
        .map(|(coord, _)| grid.piece_moves(coord).len())
        .sum()
}

fn criterion_benchmark(c: &mut Criterion) {
    let grid = Grid::default();
    c.bench_function("movable_pieces", |b| {
        b.iter(|| movable_both_sides(black_box(&grid)))
    });
    c.bench_function("piece_moves full scan", |b| {
        b.iter(|| full_scan(black_box(&grid)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
