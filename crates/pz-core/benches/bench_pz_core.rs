use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pz_core::{FieldTag, FieldToken};

fn bench_token_render(c: &mut Criterion) {
    let tokens: Vec<FieldToken> = FieldTag::ALL
        .iter()
        .map(|tag| FieldToken::new(*tag, "Sample_Value"))
        .collect();
    c.bench_function("render_all_tokens", |b| {
        b.iter(|| {
            let joined: String = tokens
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            black_box(joined)
        })
    });
}

fn bench_tag_parse(c: &mut Criterion) {
    let spellings: Vec<&str> = FieldTag::ALL.iter().map(|t| t.as_str()).collect();
    c.bench_function("parse_all_tags", |b| {
        b.iter(|| {
            for s in &spellings {
                black_box(FieldTag::parse(s));
            }
        })
    });
}

criterion_group!(benches, bench_token_render, bench_tag_parse);
criterion_main!(benches);
