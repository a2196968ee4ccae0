//! Performance benchmarks for the Salary Breakdown Engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Direct breakdown calculation: < 10μs mean
//! - Single HTTP calculation request: < 1ms mean
//! - Batch of 100 requests: < 50ms mean
//! - Batch of 1000 requests: < 500ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::create_router;
use payroll_engine::calculation::calculate_salary;
use payroll_engine::models::SalaryInput;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a request body covering a spread of CTCs, states and toggles.
fn create_request_body(index: usize) -> String {
    let states = ["karnataka", "maharashtra", "tamil_nadu", "gujarat", "delhi"];
    let request_json = serde_json::json!({
        "annual_ctc": 120_000 + index * 4_321,
        "state": states[index % states.len()],
        "pf_enabled": index % 7 != 0,
        "pt_enabled": index % 11 != 0
    });
    serde_json::to_string(&request_json).unwrap()
}

/// Benchmark: Direct breakdown calculation without the HTTP layer.
///
/// Target: < 10μs mean
fn bench_direct_calculation(c: &mut Criterion) {
    let input = SalaryInput::new(Decimal::new(300_000, 0));

    c.bench_function("direct_calculation", |b| {
        b.iter(|| black_box(calculate_salary(black_box(&input))))
    });
}

/// Benchmark: Single calculation through the HTTP endpoint.
///
/// Target: < 1ms mean
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router();
    let body = serde_json::json!({"annual_ctc": 300_000}).to_string();

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 calculation requests.
///
/// Target: < 50ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    // Pre-create 100 different requests (vary CTC and state for a realistic spread)
    let requests: Vec<String> = (0..100).map(create_request_body).collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Batch of 1000 calculation requests.
///
/// Target: < 500ms mean
fn bench_batch_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    // Pre-create 1000 different requests
    let requests: Vec<String> = (0..1000).map(create_request_body).collect();

    let mut group = c.benchmark_group("large_batch_processing");
    group.throughput(Throughput::Elements(1000));
    // Reduce sample size for large batches to keep benchmark time reasonable
    group.sample_size(10);

    group.bench_function("batch_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(1000);
            for body in &requests {
                let router = create_router();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: CTC magnitudes to understand Decimal scaling behavior.
fn bench_ctc_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("ctc_scaling");

    for annual_ctc in [120_000u64, 300_000, 3_000_000, 30_000_000, 100_000_000].iter() {
        let input = SalaryInput::new(Decimal::from(*annual_ctc));

        group.bench_with_input(
            BenchmarkId::new("annual_ctc", annual_ctc),
            annual_ctc,
            |b, _| b.iter(|| black_box(calculate_salary(black_box(&input)))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_direct_calculation,
    bench_single_request,
    bench_batch_100,
    bench_batch_1000,
    bench_ctc_scaling,
);
criterion_main!(benches);
