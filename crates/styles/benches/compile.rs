//! Benchmarks for the CSS compiler.

use a11y_styles::{builtin_filters, builtin_tools, compile_css, render_declarations, DEFAULT_PREFIX};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeMap;

fn bench_builtin_configs(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_builtin");

    let tools = builtin_tools(DEFAULT_PREFIX);
    let filters = builtin_filters(DEFAULT_PREFIX);

    for (id, config) in tools.iter().chain(filters.iter()) {
        group.bench_with_input(BenchmarkId::new("compile_css", id), config, |b, config| {
            b.iter(|| compile_css(black_box(config)))
        });
    }

    group.finish();
}

fn bench_declarations(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_declarations");

    for size in [1, 10, 100].iter() {
        let styles: BTreeMap<String, String> = (0..*size)
            .map(|i| {
                let property = if i % 4 == 0 { "filter".to_string() } else { format!("prop-{i}") };
                (property, format!("value-{i}"))
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &styles, |b, styles| {
            b.iter(|| render_declarations(black_box(styles)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_builtin_configs, bench_declarations);
criterion_main!(benches);
