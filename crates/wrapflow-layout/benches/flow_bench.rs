//! Benchmarks for flow measure and arrange.
//!
//! Run with: cargo bench -p wrapflow-layout

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wrapflow_layout::{ChildBox, FlowLayout, MeasureSpec, Sides};

// =============================================================================
// Test Data
// =============================================================================

/// Tag-cloud style children: varying widths, a few heights, small margins.
fn tags(count: usize) -> Vec<ChildBox> {
    (0..count)
        .map(|i| {
            let width = 24 + (i as u32 * 37) % 120;
            let height = 16 + (i as u32 % 3) * 4;
            ChildBox::new(width, height).margin(Sides::new(2, 4, 2, 4))
        })
        .collect()
}

const COUNTS: [usize; 4] = [10, 100, 1_000, 10_000];

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow/measure");
    let flow = FlowLayout::new(MeasureSpec::at_most(480), MeasureSpec::unspecified());

    for count in COUNTS {
        let children = tags(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &children, |b, children| {
            b.iter(|| black_box(flow.measure(children.iter().copied())))
        });
    }

    group.finish();
}

fn bench_arrange(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow/arrange");
    let flow = FlowLayout::new(MeasureSpec::at_most(480), MeasureSpec::unspecified());

    for count in COUNTS {
        let measured = flow.measure(tags(count));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &measured, |b, measured| {
            b.iter(|| black_box(FlowLayout::arrange(&measured.lines)))
        });
    }

    group.finish();
}

fn bench_exact_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow/exact_pass");
    let flow = FlowLayout::new(MeasureSpec::exact(480), MeasureSpec::exact(320));

    for count in COUNTS {
        let children = tags(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &children, |b, children| {
            b.iter(|| {
                let measured = flow.measure(children.iter().copied());
                black_box(measured.arrange())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_measure, bench_arrange, bench_exact_pass);
criterion_main!(benches);
