use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tsord_core::ordering::TimestampTable;
use tsord_core::schedule::{Operation, Schedule, TransactionId};
use tsord_core::{validate, Workload};

const OBJECTS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

/// Build a workload whose schedules are fully admissible: operation `i` is
/// issued by transaction `i + 1` ranked `i + 1`, so ranks only grow and no
/// admission rule ever fires.
fn build_workload(n_schedules: u64, n_ops: u64) -> Workload<&'static str> {
    let table: TimestampTable = (1..=n_ops).map(|t| (TransactionId(t), t)).collect();

    let schedules = (0..n_schedules)
        .map(|s| {
            let operations = (0..n_ops)
                .map(|i| {
                    let transaction = TransactionId(i + 1);
                    let object = OBJECTS[usize::try_from((s + i) % 8).unwrap()];
                    match i % 3 {
                        0 => Operation::read(transaction, object),
                        1 => Operation::write(transaction, object),
                        _ => Operation::Commit,
                    }
                })
                .collect();
            Schedule::new(format!("S{s}"), operations)
        })
        .collect();

    Workload::new(OBJECTS.to_vec(), table, schedules)
}

fn bench_validate(c: &mut Criterion) {
    let workload_small = build_workload(4, 32);
    let workload_medium = build_workload(32, 128);
    let workload_large = build_workload(128, 512);

    for workload in [&workload_small, &workload_medium, &workload_large] {
        let report = validate(workload).expect("benchmark workloads declare all names");
        assert!(
            report
                .outcomes
                .iter()
                .all(|o| o.to_string().ends_with("-OK")),
            "benchmark workloads must be fully admissible",
        );
    }

    let mut group = c.benchmark_group("validate");

    group.bench_function("small", |b| {
        b.iter(|| {
            let _ = validate(black_box(&workload_small));
        });
    });

    group.bench_function("medium", |b| {
        b.iter(|| {
            let _ = validate(black_box(&workload_medium));
        });
    });

    group.bench_function("large", |b| {
        b.iter(|| {
            let _ = validate(black_box(&workload_large));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
