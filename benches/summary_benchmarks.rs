//! Performance benchmarks for the Shift Summary Calculator.
//!
//! Covers the pure calculation, coercion of a full form of text input, and
//! a full request through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use shift_summary::api::{AppState, create_router};
use shift_summary::calculation::{calculate_shift_result, coerce_input, summarize_shift};
use shift_summary::config::FieldRegistry;
use shift_summary::logo::{LogoLoader, RetryPolicy};
use shift_summary::models::{FieldId, RawValue, ShiftInput};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn sample_input() -> ShiftInput {
    FieldId::ALL
        .into_iter()
        .enumerate()
        .fold(ShiftInput::default(), |input, (i, field)| {
            input.with(field, 12.34 * (i as f64 + 1.0))
        })
}

fn sample_raw() -> Vec<(FieldId, RawValue)> {
    FieldId::ALL
        .into_iter()
        .enumerate()
        .map(|(i, field)| (field, RawValue::from(format!("{:.2}", 12.34 * (i as f64 + 1.0)))))
        .collect()
}

fn bench_calculation(c: &mut Criterion) {
    let input = sample_input();

    c.bench_function("calculate_shift_result", |b| {
        b.iter(|| calculate_shift_result(black_box(&input)))
    });

    c.bench_function("summarize_shift", |b| {
        b.iter(|| summarize_shift(black_box(input)))
    });
}

fn bench_coercion(c: &mut Criterion) {
    let raw = sample_raw();

    c.bench_function("coerce_input_text", |b| {
        b.iter(|| coerce_input(black_box(&raw).iter().map(|(field, value)| (*field, value))))
    });
}

fn bench_http(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(
        FieldRegistry::default(),
        LogoLoader::new(RetryPolicy::default()),
        "http://127.0.0.1:9/logo.jpg",
    );
    let body: serde_json::Map<String, serde_json::Value> = sample_raw()
        .into_iter()
        .map(|(field, value)| (field.to_string(), serde_json::to_value(value).unwrap()))
        .collect();
    let body = serde_json::Value::Object(body).to_string();

    c.bench_function("post_summary", |b| {
        b.to_async(&runtime).iter(|| async {
            let router = create_router(state.clone());
            router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/summary")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_calculation, bench_coercion, bench_http);
criterion_main!(benches);
