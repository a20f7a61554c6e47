use corpus::tokenizer::{tokenize, tokenize_set};
use corpus::Vocabulary;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_tokenize(c: &mut Criterion) {
    let text = include_str!("../README.md");
    c.bench_function("tokenize_readme", |b| b.iter(|| tokenize(text)));
    c.bench_function("tokenize_set_readme", |b| b.iter(|| tokenize_set(text)));
    c.bench_function("vocabulary_readme", |b| b.iter(|| Vocabulary::from_texts([text])));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
