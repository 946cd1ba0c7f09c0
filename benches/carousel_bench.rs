use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use vitrine::camera::{Camera, CameraMode};
use vitrine::carousel::{Appearance, Carousel, Item};
use vitrine::options::CarouselOptions;
use vitrine::util::easing::EasingFunction;

fn ring(count: usize) -> Carousel {
    let options = CarouselOptions::default();
    let items = (0..count)
        .map(|i| {
            Item::on_ring(i, count, options.radius, 0, Appearance::FlatColor([1.0; 3]))
        })
        .collect();
    Carousel::new(items, &options)
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::QuadraticInOut;
    c.bench_function("quadratic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))))
    });
}

fn transition_benchmark(c: &mut Criterion) {
    c.bench_function("full_transition_advance", |b| {
        b.iter(|| {
            let mut carousel = ring(10);
            let _ = carousel.select_next(1);
            while !carousel.is_settled() {
                carousel.advance();
                carousel.update_item_visuals();
            }
            black_box(carousel.current_angle())
        })
    });
}

fn view_matrix_benchmark(c: &mut Criterion) {
    let camera = Camera {
        mode: CameraMode::Orbit,
        tilt: 12.5,
        offset: Vec3::new(0.0, 1.0, 20.0),
        inspect_rotation: Vec2::ZERO,
        inspect_distance: 10.0,
        aspect: 16.0 / 9.0,
        fovy: 45.0,
        znear: 0.1,
        zfar: 100.0,
    };
    c.bench_function("orbit_view_matrix", |b| {
        b.iter(|| black_box(camera.view_matrix(black_box(0.7), Vec3::ZERO)))
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    transition_benchmark,
    view_matrix_benchmark
);
criterion_main!(benches);
