use criterion::{criterion_group, criterion_main, Criterion};
use rasterfont_fontmanager::{FontManager, FontRegistry, Orientation, Raster};
use std::hint::black_box;

const TEXT: &str = "The quick brown fox jumps over the lazy dog 0123456789";

fn rasterize_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rasterize string");
    group.significance_level(0.1).sample_size(500);

    let registry = FontRegistry::builtin();
    for raster in [Raster::RowMajor, Raster::ColumnMajor] {
        for index in 0..registry.len() {
            let Ok(manager) = FontManager::new(&registry, index, raster, Orientation::Top) else {
                continue;
            };

            group.bench_function(format!("{} {raster}", manager.font_name()), |b| {
                b.iter(|| manager.rasterize(black_box(TEXT), black_box(3)))
            });
        }
    }

    group.finish();
}

fn line_breaks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Character breaks");

    let registry = FontRegistry::builtin();
    if let Ok(manager) = FontManager::new(&registry, 1, Raster::RowMajor, Orientation::Top) {
        group.bench_function("proportional 128px", |b| {
            b.iter(|| manager.character_breaks(black_box(TEXT), black_box(128)))
        });
    }

    group.finish();
}

criterion_group!(benches, rasterize_string, line_breaks);
criterion_main!(benches);
