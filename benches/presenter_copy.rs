//! Cost of handing a finished frame to a presenter.
//!
//! Run with: `cargo bench --bench presenter_copy`

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use mandelbrot_explorer::{
    BYTES_PER_PIXEL, FrameBuffer, GradientTable, Viewport, copy_pixels_to_rgba, render_frame,
    write_ppm,
};

fn sample_frame(width: u32, height: u32) -> FrameBuffer {
    let viewport = Viewport::new(0.005, -0.5, 0.0).unwrap();
    let gradient = GradientTable::new(100).unwrap();
    render_frame(&viewport, &gradient, width, height).unwrap()
}

fn bench_rgba_copy(c: &mut Criterion) {
    let frame = sample_frame(800, 600);
    let mut surface = vec![0u8; frame.len() * BYTES_PER_PIXEL];

    let mut group = c.benchmark_group("presenter_copy");
    group.throughput(Throughput::Bytes(surface.len() as u64));

    group.bench_function("rgba_800x600", |b| {
        b.iter(|| copy_pixels_to_rgba(black_box(frame.pixels()), &mut surface));
    });

    group.bench_function("ppm_800x600", |b| {
        let mut bytes = Vec::with_capacity(frame.len() * 3 + 32);
        b.iter(|| {
            bytes.clear();
            write_ppm(black_box(&frame), &mut bytes).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_rgba_copy);
criterion_main!(benches);
