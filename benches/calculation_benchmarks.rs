//! Performance benchmarks for the Ponto Engine.
//!
//! Covers the pure engine (one day, one month, night allocation) and the
//! `/payroll` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use ponto_engine::api::{AppState, create_router};
use ponto_engine::calculation::{
    DEFAULT_NIGHT_WINDOW, NightAllocation, PayrollOptions, WorkSegment, allocate_night_minutes,
    classify_minutes, compute_day, compute_monthly_payroll,
};
use ponto_engine::config::ConfigLoader;
use ponto_engine::holidays::HolidayCalendar;
use ponto_engine::models::DailyPunchRecord;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/ponto").expect("Failed to load config");
    AppState::new(config)
}

fn record(date: NaiveDate, punches: [&str; 4]) -> DailyPunchRecord {
    let mut record = DailyPunchRecord::new(date);
    record.entrada = Some(punches[0].to_string());
    record.intervalo_saida = Some(punches[1].to_string());
    record.intervalo_volta = Some(punches[2].to_string());
    record.saida = Some(punches[3].to_string());
    record
}

/// Every day of October 2025, alternating day and night shifts.
fn october_days() -> Vec<DailyPunchRecord> {
    let first = NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date");
    first
        .iter_days()
        .take_while(|d| d.month() == 10)
        .map(|date| {
            if date.day() % 3 == 0 {
                record(date, ["21:00", "01:00", "02:00", "07:30"])
            } else {
                record(date, ["08:00", "12:00", "13:00", "18:45"])
            }
        })
        .collect()
}

fn options_2025() -> PayrollOptions {
    PayrollOptions::default().with_holidays(HolidayCalendar::for_year(2025, Vec::new()))
}

fn bench_single_day(c: &mut Criterion) {
    let options = options_2025();
    let date = NaiveDate::from_ymd_opt(2025, 10, 6).expect("valid date");
    let day = record(date, ["22:00", "02:00", "03:00", "08:00"]);

    c.bench_function("compute_day_night_shift", |b| {
        b.iter(|| compute_day(black_box(&day), black_box(&options)).unwrap())
    });
}

fn bench_month(c: &mut Criterion) {
    let options = options_2025();
    let days = october_days();
    let salary = Decimal::from(2200);

    let mut group = c.benchmark_group("monthly_payroll");
    group.throughput(Throughput::Elements(days.len() as u64));
    group.bench_function("october_31_days", |b| {
        b.iter(|| compute_monthly_payroll(black_box(&days), salary, black_box(&options)).unwrap())
    });
    group.finish();
}

fn bench_night_allocation(c: &mut Criterion) {
    let segments = [WorkSegment::between(1260, 60), WorkSegment::between(120, 450)];
    let worked: u32 = segments.iter().map(|s| s.length).sum();
    let buckets = classify_minutes(worked, 440, 120, false);

    let mut group = c.benchmark_group("night_allocation");
    for mode in [NightAllocation::Chronological, NightAllocation::Proportional] {
        group.bench_with_input(BenchmarkId::new("mode", format!("{:?}", mode)), &mode, |b, mode| {
            b.iter(|| {
                allocate_night_minutes(
                    black_box(&segments),
                    black_box(&buckets),
                    &DEFAULT_NIGHT_WINDOW,
                    *mode,
                )
            })
        });
    }
    group.finish();
}

fn bench_payroll_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "employee": { "id": "func_bench", "name": "Bench", "base_salary": "2200" },
        "days": october_days(),
    })
    .to_string();

    c.bench_function("payroll_endpoint_month", |b| {
        b.to_async(&rt).iter(|| async {
            let response = router
                .clone()
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
}

criterion_group!(
    benches,
    bench_single_day,
    bench_month,
    bench_night_allocation,
    bench_payroll_endpoint,
);
criterion_main!(benches);
