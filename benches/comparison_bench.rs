//! Performance benchmarks for acoustic comparison

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sonodiff::{compare_audio, CompareConfig};

fn bench_compare_audio(c: &mut Criterion) {
    // Two synthetic recordings (30 seconds at 44.1kHz)
    let normal: Vec<f32> = (0..44100 * 30)
        .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 44100.0).sin() * 0.5)
        .collect();
    let target: Vec<f32> = (0..44100 * 30)
        .map(|i| (i as f32 * 880.0 * 2.0 * std::f32::consts::PI / 44100.0).sin() * 0.7)
        .collect();

    let config = CompareConfig::default();

    c.bench_function("compare_audio_30s", |b| {
        b.iter(|| {
            let _ = compare_audio(
                black_box(&normal),
                black_box(&target),
                black_box(44100),
                black_box(config.clone()),
            );
        });
    });
}

criterion_group!(benches, bench_compare_audio);
criterion_main!(benches);
