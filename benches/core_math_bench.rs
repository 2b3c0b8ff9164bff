use chart_viewport::api::{ChartEngine, ChartEngineConfig};
use chart_viewport::core::{
    ChartInput, SampleRange, Series, TimeAxis, Window, compute_scale, resolve_sample_range,
};
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

const DAY: i64 = 86_400_000;

fn generated_input(samples: usize) -> ChartInput {
    let mut x = vec![Value::from("x")];
    let mut y0 = vec![Value::from("y0")];
    let mut y1 = vec![Value::from("y1")];
    for i in 0..samples {
        let t = i as f64;
        x.push(Value::from(i as i64 * DAY));
        y0.push(Value::from(1_000.0 + (t * 0.05).sin() * 400.0));
        y1.push(Value::from(600.0 + (t * 0.11).cos() * 250.0));
    }

    serde_json::from_value(json!({
        "columns": [x, y0, y1],
        "types": { "x": "x", "y0": "line", "y1": "line" },
    }))
    .expect("generated input")
}

fn bench_resolve_sample_range_100k(c: &mut Criterion) {
    let axis = TimeAxis::new((0..100_000).map(|i| i * DAY).collect()).expect("valid axis");

    c.bench_function("resolve_sample_range_100k", |b| {
        b.iter(|| {
            let _ = resolve_sample_range(black_box(Window::new(0.37, 0.21)), black_box(&axis));
        })
    });
}

fn bench_compute_scale_100k(c: &mut Criterion) {
    let series = Series {
        key: "y0".to_owned(),
        name: "y0".to_owned(),
        color: None,
        values: (0..100_000).map(|i| (i as f64 * 0.01).sin() * 1_000.0).collect(),
    };

    c.bench_function("compute_scale_100k", |b| {
        b.iter(|| {
            let _ = compute_scale(black_box(SampleRange::full(100_000)), [black_box(&series)]);
        })
    });
}

fn bench_engine_drag_10k(c: &mut Criterion) {
    let config = ChartEngineConfig::default().with_container_width(1_200.0);
    let mut engine = ChartEngine::new(generated_input(10_000), config).expect("engine init");
    engine.set_window(Window::new(0.0, 0.3));
    engine.begin_drag(chart_viewport::interaction::DragHandle::Area, 0.0);

    let mut pointer = 0.0;
    c.bench_function("engine_drag_10k", |b| {
        b.iter(|| {
            pointer = (pointer + 7.0) % 600.0;
            let _ = engine.drag_to(black_box(pointer));
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_sample_range_100k,
    bench_compute_scale_100k,
    bench_engine_drag_10k
);
criterion_main!(benches);
