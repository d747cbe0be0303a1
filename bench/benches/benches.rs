use criterion::{Criterion, criterion_group, criterion_main};
use sierpinski_core::{
    Canvas, CoordinateSpace, RenderConfig, Surface, draw_fractal, export_png, render, subdivide,
};

const SIZE: u32 = 600;
const ORDER: u32 = 8;

fn bench_subdivide(c: &mut Criterion) {
    let t = CoordinateSpace::Pixel.initial_triangle(SIZE);
    c.bench_function("subdivide order 8", |b| {
        b.iter(|| subdivide(ORDER, t.p1, t.p2, t.p3))
    });
}

fn bench_render_only(c: &mut Criterion) {
    let space = CoordinateSpace::Pixel;
    let t = space.initial_triangle(SIZE);
    let leaves = subdivide(ORDER, t.p1, t.p2, t.p3);
    let view = space.view_transform(SIZE);
    let fill = RenderConfig::default().fill.to_rgba();
    let mut canvas = Canvas::new(SIZE, SIZE);
    c.bench_function("render 6561 triangles at 600x600", |b| {
        b.iter(|| render(&mut canvas, &leaves, fill, &view))
    });
}

fn bench_draw_pixel(c: &mut Criterion) {
    let config = RenderConfig::default();
    let mut canvas = Canvas::default();
    c.bench_function("draw_fractal pixel space (order 8, 600)", |b| {
        b.iter(|| draw_fractal(&mut canvas, "8", "600", &config).unwrap())
    });
}

fn bench_draw_centered(c: &mut Criterion) {
    let config = RenderConfig {
        coordinate_space: CoordinateSpace::centered(),
        ..RenderConfig::default()
    };
    let mut canvas = Canvas::default();
    c.bench_function("draw_fractal centered space (order 8, 600)", |b| {
        b.iter(|| draw_fractal(&mut canvas, "8", "600", &config).unwrap())
    });
}

fn bench_export(c: &mut Criterion) {
    let mut canvas = Canvas::default();
    let report = draw_fractal(&mut canvas, "6", "600", &RenderConfig::default()).unwrap();
    assert_eq!(canvas.width(), SIZE);
    c.bench_function("export 600x600 PNG", |b| {
        b.iter(|| export_png(&canvas, &report.params).unwrap())
    });
}

criterion_group!(
    sierpinski_benchmarks,
    bench_subdivide,
    bench_render_only,
    bench_draw_pixel,
    bench_draw_centered,
    bench_export
);
criterion_main!(sierpinski_benchmarks);
