// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the decorative effects recomputed on the UI thread.
//!
//! Measures:
//! - Backdrop generation for one mode and for every section at once
//! - Cursor trail dot computation with a full trail

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Point;
use neon_portfolio::ui::effects::{Backdrop, BackdropMode, CursorTrail, SectionBackdrops};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bench_backdrops(c: &mut Criterion) {
    let mut group = c.benchmark_group("backdrops");

    group.bench_function("generate_matrix", |b| {
        b.iter(|| black_box(Backdrop::generate(BackdropMode::Matrix, black_box(42))));
    });

    group.bench_function("generate_all_sections", |b| {
        b.iter(|| black_box(SectionBackdrops::generate(black_box(42))));
    });

    group.finish();
}

fn bench_cursor_trail(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_trail");

    let start = Instant::now();
    let mut trail = CursorTrail::default();
    for i in 0..64 {
        let step = i as f32;
        trail.push(
            Point::new(step * 4.0, step * 2.0),
            start + Duration::from_millis(i * 8),
        );
    }
    let now = start + Duration::from_millis(300);

    group.bench_function("dots", |b| {
        b.iter(|| black_box(trail.dots(black_box(now))));
    });

    group.finish();
}

criterion_group!(benches, bench_backdrops, bench_cursor_trail);
criterion_main!(benches);
