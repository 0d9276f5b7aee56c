use criterion::{black_box, criterion_group, criterion_main, Criterion};
use escher_core::{TilingKey, Word};
use escher_rewrite::{RewriteRule, RuleTable};

fn square_table() -> RuleTable {
    let rule = |pat: &str, rep: &str| {
        RewriteRule::new(pat.parse().unwrap(), rep.parse().unwrap())
    };
    RuleTable::new(
        TilingKey::new(4, 5),
        vec![
            rule("bB", ""),
            rule("Bb", ""),
            rule("aa", ""),
            rule("bbbb", ""),
            rule("BBBB", ""),
            rule("bbb", "B"),
            rule("BBB", "b"),
        ],
    )
    .unwrap()
}

fn reducible_word(groups: usize) -> Word {
    let mut s = String::new();
    for i in 0..groups {
        s.push_str(if i % 2 == 0 { "bbbb" } else { "bBBb" });
        s.push('a');
    }
    s.parse().unwrap()
}

fn bench_normalize_reducible_300(c: &mut Criterion) {
    let table = square_table();
    let word = reducible_word(60);
    c.bench_function("normalize_reducible_300", |b| {
        b.iter(|| table.normalize(black_box(&word)))
    });
}

fn bench_normalize_fixpoint_300(c: &mut Criterion) {
    let table = square_table();
    let word: Word = "ba".repeat(150).parse().unwrap();
    c.bench_function("normalize_fixpoint_300", |b| {
        b.iter(|| table.normalize(black_box(&word)))
    });
}

criterion_group!(benches, bench_normalize_reducible_300, bench_normalize_fixpoint_300);
criterion_main!(benches);
