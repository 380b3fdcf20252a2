//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite tracks:
//! - Forward calculation of a single salary
//! - Net-to-gross search with both strategies
//! - A payroll sheet of 100 employees through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use bordro_engine::api::{AppState, create_router};
use bordro_engine::calculation::{
    SolverOptions, SolverStrategy, gross_from_net_with, net_from_gross,
};
use bordro_engine::config::TaxConfiguration;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Benchmark: forward calculation at several points of the bracket table.
fn bench_net_from_gross(c: &mut Criterion) {
    let config = TaxConfiguration::reference_2026();
    let mut group = c.benchmark_group("net_from_gross");

    for gross in [33_030u32, 100_000, 600_000] {
        let gross = Decimal::from(gross);
        group.bench_with_input(BenchmarkId::from_parameter(gross), &gross, |b, gross| {
            b.iter(|| net_from_gross(black_box(*gross), &config))
        });
    }

    group.finish();
}

/// Benchmark: net-to-gross search per strategy.
fn bench_gross_from_net(c: &mut Criterion) {
    let config = TaxConfiguration::reference_2026();
    let target = Decimal::from(75_000);
    let mut group = c.benchmark_group("gross_from_net");

    for strategy in [SolverStrategy::DampedNewton, SolverStrategy::Bisection] {
        let options = SolverOptions::with_strategy(strategy);
        group.bench_with_input(
            BenchmarkId::new("strategy", format!("{:?}", strategy)),
            &options,
            |b, options| b.iter(|| gross_from_net_with(black_box(target), &config, options)),
        );
    }

    group.finish();
}

/// Benchmark: payroll sheet of 100 employees.
fn bench_payroll_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(TaxConfiguration::reference_2026()));

    // Spread net salaries across the bracket table
    let employees: Vec<serde_json::Value> = (0..100)
        .map(|i| {
            serde_json::json!({
                "name": format!("Çalışan {}", i + 1),
                "net_salary": (28_075 + i * 3_500).to_string()
            })
        })
        .collect();
    let body = serde_json::json!({ "employees": employees }).to_string();

    let mut group = c.benchmark_group("payroll");
    group.throughput(Throughput::Elements(100));

    group.bench_function("payroll_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payroll")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_net_from_gross,
    bench_gross_from_net,
    bench_payroll_100,
);
criterion_main!(benches);
