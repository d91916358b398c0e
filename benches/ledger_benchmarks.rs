//! Performance benchmarks for the payroll ledger engine.
//!
//! - Single employee evaluation with missions and a unit
//! - Ledger runs over batches of 100 and 1000 employees
//! - Rendering a batch to the ledger stream
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::HashMap;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use louvois_ledger::config::{
    BaseSalaryTable, DutyRates, FatiguePolicy, HousingPolicy, LookupTables, MissionPolicy,
};
use louvois_ledger::engine::PayrollEngine;
use louvois_ledger::ledger::LedgerWriter;
use louvois_ledger::models::{Employee, Mission, Rank, Unit};

/// Lookup tables with every rule family switched on.
fn create_tables() -> LookupTables {
    let salaries = Rank::ALL
        .iter()
        .enumerate()
        .map(|(i, rank)| (rank.to_string(), Decimal::from(1000 + 300 * i as i64)))
        .collect();
    LookupTables {
        base_salary: BaseSalaryTable::new(salaries),
        duty: DutyRates {
            night_rate: Decimal::from(12),
            weekend_rate: Decimal::from(15),
            holiday_rate: Decimal::from(25),
            overtime_rate: Decimal::from(18),
            call_back_flat: Decimal::from(60),
            standby_rate: Decimal::from(5),
            training_day_allowance: Decimal::from(30),
            ..Default::default()
        },
        missions: MissionPolicy {
            per_diem_domestic: HashMap::from([("north".to_string(), Decimal::from(40))]),
            per_diem_international: HashMap::from([("Tokyo".to_string(), Decimal::from(120))]),
            hazard_rate: Decimal::new(1, 2),
            hazard_flat: Decimal::from(15),
            combat_allowance: Decimal::from(300),
            combat_cap: Decimal::from(600),
            joint_mission_bonus: Decimal::from(150),
            ..Default::default()
        },
        housing: HousingPolicy {
            allowance_table: HashMap::from([(
                "Taipei".to_string(),
                Rank::ALL
                    .iter()
                    .map(|rank| (rank.to_string(), Decimal::from(300)))
                    .collect(),
            )]),
            barracks_fee: Decimal::from(100),
            meal_deduction: Decimal::from(60),
            ..Default::default()
        },
        fatigue: FatiguePolicy {
            streak_threshold: Decimal::from(10),
            fatigue_multiplier: Decimal::new(12, 1),
        },
        ..Default::default()
    }
}

fn create_units() -> Vec<Unit> {
    (0..10)
        .map(|i| Unit {
            id: Some(format!("U{:02}", i)),
            location: Some("Taipei".to_string()),
            barracks_provided: i % 3 == 0,
            meals_provided: i % 2 == 0,
        })
        .collect()
}

/// Five missions per unit, mixing domestic, international, hazard and combat.
fn create_missions() -> Vec<Mission> {
    (0..50)
        .map(|i| Mission {
            unit: Some(format!("U{:02}", i % 10)),
            trip_days: Decimal::from(2 + i % 5),
            domestic_zone: (i % 2 == 0).then(|| "north".to_string()),
            country_city: (i % 2 == 1).then(|| "Tokyo".to_string()),
            hazard_zone: i % 7 == 0,
            mission_type: (i % 4 == 0).then(|| "combat".to_string()),
            joint_mission: i % 5 == 0,
            ..Default::default()
        })
        .collect()
}

fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| Employee {
            id: Some(format!("E{:04}", i)),
            name: Some(format!("Member {}", i)),
            rank: Some(Rank::ALL[i % Rank::ALL.len()].to_string()),
            months_in_service: Decimal::from(i % 60),
            seniority_years: Decimal::from(i % 20),
            night_hours: Decimal::from(i % 12),
            weekend_hours: Decimal::from(i % 8),
            daily_hours: Decimal::from(8 + i % 4),
            training_days: Decimal::from(i % 3),
            streak_days: Decimal::from(i % 14),
            unit: Some(format!("U{:02}", i % 10)),
            ..Default::default()
        })
        .collect()
}

fn create_engine() -> PayrollEngine {
    PayrollEngine::new(create_tables(), create_units(), create_missions())
}

/// Benchmark: single employee evaluation.
fn bench_single_employee(c: &mut Criterion) {
    let engine = create_engine();
    let employee = create_employees(1).remove(0);

    c.bench_function("single_employee", |b| {
        b.iter(|| engine.evaluate(black_box(&employee)))
    });
}

/// Benchmark: full ledger runs over employee batches.
fn bench_ledger_runs(c: &mut Criterion) {
    let engine = create_engine();

    let mut group = c.benchmark_group("ledger_run");
    for size in [100usize, 1000] {
        let employees = create_employees(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, employees| {
            b.iter(|| engine.run(black_box(employees), None))
        });
    }
    group.finish();
}

/// Benchmark: rendering 1000 rows to the ledger stream.
fn bench_render(c: &mut Criterion) {
    let engine = create_engine();
    let rows = engine.run(&create_employees(1000), None);

    c.bench_function("render_1000_rows", |b| {
        b.iter(|| {
            let mut writer = LedgerWriter::new(Vec::with_capacity(512 * 1024));
            writer.write_header().unwrap();
            writer.write_rows(black_box(&rows)).unwrap();
            writer.into_inner().unwrap()
        })
    });
}

criterion_group!(benches, bench_single_employee, bench_ledger_runs, bench_render);
criterion_main!(benches);
