use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use orgchart::graph::EmployeeRecord;
use orgchart::{build_department_hierarchy, build_manager_hierarchy, collect_employees, similarity, TreeMetrics};

const LOCATIONS: [&str; 4] = ["Paris", "Oslo", "Austin", "Pune"];
const ROLES: [&str; 5] = ["JC0001 Engineer", "JC0002 Analyst", "JC0003 Designer", "JC0004 Lead", "JC0005 Tester"];

/// Letters-only name, since digits are dropped during normalization
fn person(i: usize) -> String {
    let mut n = i + 1;
    let mut letters = String::new();
    while n > 0 {
        n -= 1;
        letters.insert(0, (b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    format!("Emp {}", letters)
}

/// Balanced department where employee `i` reports to `(i - 1) / fanout`
fn department(size: usize, fanout: usize) -> Vec<EmployeeRecord> {
    (0..size)
        .map(|i| {
            let manager = if i == 0 { String::new() } else { person((i - 1) / fanout) };
            EmployeeRecord::new(person(i), "Ops", ROLES[i % ROLES.len()], LOCATIONS[i % LOCATIONS.len()], manager)
        })
        .collect()
}

fn bench_department_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("department_build");

    for size in [100, 1000, 5000].iter() {
        let employees = department(*size, 8);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let snapshot = build_department_hierarchy("Ops", &employees, None).unwrap();
                criterion::black_box(snapshot.node_count());
            });
        });
    }
    group.finish();
}

fn bench_manager_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("manager_build");

    for size in [100, 1000, 5000].iter() {
        let employees = department(*size, 4);
        let deepest_manager = person((size - 1) / 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let snapshot = build_manager_hierarchy("Ops", &deepest_manager, &employees, None).unwrap();
                criterion::black_box(snapshot.node_count());
            });
        });
    }
    group.finish();
}

fn bench_metrics_and_aggregation(c: &mut Criterion) {
    let employees = department(2000, 8);
    let snapshot = build_department_hierarchy("Ops", &employees, None).unwrap();

    c.bench_function("tree_metrics_2000", |b| {
        b.iter(|| criterion::black_box(TreeMetrics::of(&snapshot)));
    });

    c.bench_function("collect_employees_root_2000", |b| {
        b.iter(|| {
            let all = collect_employees(&snapshot, snapshot.nodes[0].id).unwrap();
            criterion::black_box(all.len());
        });
    });
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("similarity", |b| {
        b.iter(|| {
            criterion::black_box(similarity("SMITH, John Paul", "john  paul smith jr"));
        });
    });
}

criterion_group!(
    benches,
    bench_department_build,
    bench_manager_build,
    bench_metrics_and_aggregation,
    bench_similarity
);
criterion_main!(benches);
