use criterion::{black_box, criterion_group, criterion_main, Criterion};
use switchyard::{HandlerCategory, RouteTable};

fn build_table(routes: usize) -> RouteTable<usize> {
    let mut table = RouteTable::new();
    for i in 0..routes {
        table
            .add(HandlerCategory::Get, &format!("/resources/{i}/items/:id"), i)
            .expect("unique route");
    }
    table
        .add(HandlerCategory::Before, "/resources/*", routes)
        .expect("filter route");
    table
}

fn bench_static_match(c: &mut Criterion) {
    let mut table = RouteTable::new();
    table
        .add(HandlerCategory::Get, "/health", 0usize)
        .expect("route");
    c.bench_function("static_route", |b| {
        b.iter(|| black_box(table.find_matches(HandlerCategory::Get, black_box("/health"))))
    });
}

fn bench_param_match(c: &mut Criterion) {
    let table = build_table(100);
    c.bench_function("param_route_100", |b| {
        b.iter(|| {
            black_box(table.find_matches(HandlerCategory::Get, black_box("/resources/57/items/42")))
        })
    });
}

fn bench_filter_scan(c: &mut Criterion) {
    let table = build_table(100);
    c.bench_function("filter_scan_100", |b| {
        b.iter(|| {
            black_box(
                table.find_matches(HandlerCategory::Before, black_box("/resources/57/items/42")),
            )
        })
    });
}

fn bench_param_extraction(c: &mut Criterion) {
    let table = build_table(1);
    let entry = table.find_matches(HandlerCategory::Get, "/resources/0/items/42")[0].clone();
    c.bench_function("param_extraction", |b| {
        b.iter(|| black_box(entry.extract_params(black_box("/resources/0/items/42"))))
    });
}

criterion_group!(
    benches,
    bench_static_match,
    bench_param_match,
    bench_filter_scan,
    bench_param_extraction
);
criterion_main!(benches);
