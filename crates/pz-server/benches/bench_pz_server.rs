use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pz_server::dispatch::{dispatch, DispatchRequest};
use pz_translator::Translator;
use serde_json::json;

fn bench_dispatch_translate(c: &mut Criterion) {
    let translator = Translator::default();
    let request = DispatchRequest {
        action: "translate_to_compact".to_string(),
        params: json!({ "text": "Act as a senior Python developer. Write a robust script. Format the output as markdown." }),
    };
    c.bench_function("dispatch_translate", |b| {
        b.iter(|| black_box(dispatch(&translator, black_box(&request))))
    });
}

fn bench_dispatch_batch(c: &mut Criterion) {
    let translator = Translator::default();
    let items: Vec<String> = (0..50)
        .map(|i| format!("Write a Python script number {i} that processes user input."))
        .collect();
    let request = DispatchRequest {
        action: "batch_translate".to_string(),
        params: json!({ "items": items }),
    };
    c.bench_function("dispatch_batch_50", |b| {
        b.iter(|| black_box(dispatch(&translator, black_box(&request))))
    });
}

criterion_group!(benches, bench_dispatch_translate, bench_dispatch_batch);
criterion_main!(benches);
