use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_tree::{fit_default, Tree, TreeConfig};

fn dictionary() -> Vec<String> {
    let letters = ['a', 'e', 'r', 's', 't', 'n'];
    let mut words: Vec<String> = Vec::new();
    for &a in &letters {
        for &b in &letters {
            for &c in &letters {
                words.push([a, b, c].iter().collect());
            }
        }
    }
    words
}

fn bench_fit(c: &mut Criterion) {
    let words = dictionary();
    c.bench_function("fit 216 words", |b| {
        b.iter(|| fit_default(black_box(words.clone())))
    });
    c.bench_function("fit 216 words, leaves of 4", |b| {
        let config = TreeConfig::default().with_min_leaf_size(4);
        b.iter(|| Tree::fit(black_box(words.clone()), &config))
    });
}

fn bench_play(c: &mut Criterion) {
    let tree = fit_default(dictionary()).unwrap();
    c.bench_function("average queries", |b| b.iter(|| tree.average_queries()));
}

criterion_group!(benches, bench_fit, bench_play);
criterion_main!(benches);
