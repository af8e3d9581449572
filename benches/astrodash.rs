use astrodash::{filter, DayRecord, FilterCriteria, PhaseSelector, ResultSet, SummaryStats};
use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PHASES: [&str; 4] = ["New Moon", "Waxing Crescent", "First Quarter", "Full Moon"];

fn ten_days() -> ResultSet {
    let start = NaiveDate::from_ymd_opt(2025, 3, 26).unwrap();
    let records = (0..10u64)
        .map(|i| DayRecord {
            date: start + Days::new(i),
            temperature_f: 35.0 + (i * 7 % 13) as f64,
            moon_rise: format!("{:02}:15 AM", 5 + i),
            moon_set: "04:30 PM".to_string(),
            moon_phase: PHASES[(i / 3) as usize].to_string(),
        })
        .collect();
    ResultSet::new(records).unwrap()
}

fn bench_dashboard(c: &mut Criterion) {
    let days = ten_days();
    let criteria = FilterCriteria::builder()
        .date_query("03")
        .phase(PhaseSelector::from("Waxing Crescent"))
        .build();

    c.bench_function("filter", |b| b.iter(|| filter(black_box(&days), black_box(&criteria)).len()));
    c.bench_function("summary_stats", |b| {
        b.iter(|| SummaryStats::from_result_set(black_box(&days)))
    });
}

criterion_group!(benches, bench_dashboard);
criterion_main!(benches);
