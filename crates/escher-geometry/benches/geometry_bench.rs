use criterion::{black_box, criterion_group, criterion_main, Criterion};
use escher_core::{TilingKey, Word};
use escher_geometry::TilingGeometry;

fn long_word(groups: usize) -> Word {
    let mut s = String::new();
    for i in 0..groups {
        for j in 0..(i % 3 + 1) {
            s.push(if (i + j) % 2 == 0 { 'b' } else { 'B' });
        }
        s.push('a');
    }
    s.parse().unwrap()
}

fn bench_primal_construction(c: &mut Criterion) {
    let key = TilingKey::new(4, 5);
    c.bench_function("tiling_geometry_primal", |b| {
        b.iter(|| TilingGeometry::primal(black_box(key)))
    });
}

fn bench_matrix_of_word_100(c: &mut Criterion) {
    let geom = TilingGeometry::primal(TilingKey::new(4, 5));
    let word = long_word(50);
    c.bench_function("matrix_of_word_100", |b| {
        b.iter(|| geom.matrix_of_word(black_box(&word)))
    });
}

fn bench_matrix_of_word_dual_100(c: &mut Criterion) {
    let geom = TilingGeometry::dual(TilingKey::new(4, 5));
    let word = long_word(50);
    c.bench_function("matrix_of_word_dual_100", |b| {
        b.iter(|| geom.matrix_of_word(black_box(&word)))
    });
}

criterion_group!(
    benches,
    bench_primal_construction,
    bench_matrix_of_word_100,
    bench_matrix_of_word_dual_100,
);
criterion_main!(benches);
