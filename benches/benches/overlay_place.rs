// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for overlay placement.
//!
//! Each configuration is timed against a roomy viewport (no correction) and
//! a cramped one that forces the per-axis fallback attempts.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_overlay::{
    ElementBox, HorizontalEdge, Origin, PlacementRequest, VerticalEdge, compute_position,
};

fn bench_compute_position(c: &mut Criterion) {
    let anchor = ElementBox::new(Rect::new(480.0, 320.0, 620.0, 360.0), Size::new(140.0, 40.0));
    let target = Size::new(280.0, 420.0);
    let roomy = Size::new(1920.0, 1080.0);
    let cramped = Size::new(640.0, 400.0);

    let cases = [
        (
            "below_left",
            Origin::new(VerticalEdge::Bottom, HorizontalEdge::Left),
            Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
        ),
        (
            "centered",
            Origin::new(VerticalEdge::Center, HorizontalEdge::Middle),
            Origin::new(VerticalEdge::Center, HorizontalEdge::Middle),
        ),
        (
            "covering",
            Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
            Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
        ),
    ];

    let mut group = c.benchmark_group("compute_position");
    for (name, anchor_origin, target_origin) in cases {
        let request = PlacementRequest::new(anchor, target, anchor_origin, target_origin);
        group.bench_with_input(BenchmarkId::new("roomy", name), &request, |b, request| {
            b.iter(|| compute_position(black_box(request), black_box(roomy)));
        });
        group.bench_with_input(
            BenchmarkId::new("overflowing", name),
            &request,
            |b, request| {
                b.iter(|| compute_position(black_box(request), black_box(cramped)));
            },
        );
    }
    group.finish();

    c.bench_function("compute_position/pointer", |b| {
        let request = PlacementRequest::new(
            anchor,
            target,
            Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
            Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
        )
        .with_trigger(Point::new(500.0, 340.0));
        b.iter(|| compute_position(black_box(&request), black_box(roomy)));
    });
}

criterion_group!(benches, bench_compute_position);
criterion_main!(benches);
