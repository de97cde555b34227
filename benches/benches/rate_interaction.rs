// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_rate::geometry::resolve_value;
use understory_rate::{Direction, Rate, RateConfig};

const SIZE: f64 = 24.0;

fn mounted(count: usize) -> Rate {
    let mut rate = Rate::new(RateConfig::default().with_count(count).with_allow_half(true));
    for index in 0..count {
        let x0 = index as f64 * SIZE;
        rate.stars_mut()
            .set(index, Rect::new(x0, 0.0, x0 + SIZE, SIZE));
    }
    rate
}

fn bench_resolve(c: &mut Criterion) {
    let bounds = Rect::new(48.0, 0.0, 72.0, 24.0);
    c.bench_function("rate/resolve_value", |b| {
        b.iter(|| {
            resolve_value(
                black_box(2),
                black_box(53.0),
                black_box(Some(bounds)),
                Direction::Ltr,
                true,
            )
        });
    });
}

fn bench_hover_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate/hover_sweep");

    // A pointer sweep across the whole row, one event per pixel.
    for count in [5_usize, 10, 50] {
        let xs: Vec<f64> = (0..(count * SIZE as usize)).map(|x| x as f64).collect();
        group.throughput(Throughput::Elements(xs.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &xs, |b, xs| {
            let mut rate = mounted(count);
            b.iter(|| {
                for &x in xs {
                    let index = (x / SIZE) as usize;
                    black_box(rate.on_hover(index, x));
                }
                black_box(rate.on_mouse_leave());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_hover_sweep);
criterion_main!(benches);
