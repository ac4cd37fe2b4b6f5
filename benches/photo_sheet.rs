// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use id_lens::domain::editing::{ImageFilters, SheetCopies};
use id_lens::media::export::{self, ExportKind};
use id_lens::media::sheet::compose_sheet;
use id_lens::media::Photo;
use image_rs::{Rgba, RgbaImage};
use std::hint::black_box;

fn photo_sheet_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("photo_sheet");
    let pixels = RgbaImage::from_pixel(840, 1080, Rgba([200, 180, 160, 255]));

    for copies in SheetCopies::ALL {
        group.bench_function(format!("compose_{}", copies.count()), |b| {
            b.iter(|| black_box(compose_sheet(black_box(&pixels), copies)));
        });
    }

    let photo = Photo::new(pixels);
    let filters = ImageFilters::default();
    group.bench_function("encode_sheet_8", |b| {
        b.iter(|| {
            black_box(export::render(
                ExportKind::Sheet(SheetCopies::Eight),
                black_box(&photo),
                &filters,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, photo_sheet_benchmark);
criterion_main!(benches);
