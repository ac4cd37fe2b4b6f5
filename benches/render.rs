// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use id_lens::domain::editing::{
    FilterKind, FilterPercent, ImageFilters, Rect, RotationDegrees, Size,
};
use id_lens::media::image_transform::{apply_filters, rgba_to_pixmap};
use id_lens::ui::image_editor::render::{render, CropLayer, Scene};
use id_lens::ui::image_editor::GuideToggles;
use id_lens::ui::state::Viewport;
use image_rs::{Rgba, RgbaImage};
use std::hint::black_box;

fn portrait() -> RgbaImage {
    RgbaImage::from_fn(1000, 1200, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

fn render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let surface = Size::new(800.0, 600.0);
    let image = portrait();
    let photo = rgba_to_pixmap(&image).expect("pixmap");
    let viewport = Viewport::fitted(surface, Size::new(1000.0, 1200.0)).expect("fit");

    group.bench_function("preview_without_crop", |b| {
        let scene = Scene {
            surface,
            photo: &photo,
            viewport,
            crop: None,
        };
        b.iter(|| black_box(render(black_box(&scene))));
    });

    group.bench_function("preview_with_rotated_crop", |b| {
        let scene = Scene {
            surface,
            photo: &photo,
            viewport,
            crop: Some(CropLayer {
                rect: Rect::new(190.0, 30.0, 420.0, 540.0),
                rotation: RotationDegrees::new(4.5),
                guides: GuideToggles {
                    crop_guides: true,
                    biometric_guides: true,
                },
            }),
        };
        b.iter(|| black_box(render(black_box(&scene))));
    });

    group.bench_function("filter_pass", |b| {
        let mut filters = ImageFilters::default();
        filters.set(FilterKind::Contrast, FilterPercent::new(140.0));
        b.iter(|| black_box(apply_filters(black_box(&image), &filters)));
    });

    group.finish();
}

criterion_group!(benches, render_benchmark);
criterion_main!(benches);
