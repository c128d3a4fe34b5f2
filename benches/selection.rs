//! Benchmarks for the mapart engine.

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mapart::preview::{style_preview, OutputFormat, RenderFlags, Staircasing};
use mapart::resolve::resolve;
use mapart::types::{
    BlockVariant, Colour, ColourName, ColourSet, PaletteCatalog, ToneSet, VariantTraits,
};

const VERSIONS: [&str; 4] = ["1.12.2", "1.13.2", "1.14.4", "1.16.5"];

/// Build a catalog shaped like the real colours document: a few dozen sets,
/// a handful of blocks each, version validity varying per block.
fn synthetic_catalog(sets: usize, blocks_per_set: usize) -> PaletteCatalog {
    let colour_sets = (0..sets)
        .map(|s| {
            let base = (s * 4 % 256) as u8;
            let blocks = (0..blocks_per_set)
                .map(|b| {
                    // Rotate which versions each block supports.
                    let valid: HashMap<String, VariantTraits> = VERSIONS
                        .iter()
                        .skip((s + b) % VERSIONS.len())
                        .map(|v| (v.to_string(), VariantTraits::default()))
                        .collect();
                    BlockVariant::new(b.to_string(), format!("Block {}-{}", s, b), valid)
                })
                .collect();

            ColourSet::new(
                s.to_string(),
                ColourName::Literal(format!("Colour {}", s)),
                ToneSet {
                    dark: Colour::rgb(base, base / 2, 0),
                    normal: Colour::rgb(base, base, 0),
                    light: Colour::rgb(base, base, base / 2),
                    unobtainable: Colour::rgb(base / 2, base / 2, 0),
                },
                blocks,
            )
        })
        .collect();

    PaletteCatalog::new(colour_sets)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for (label, sets) in [("small", 16), ("full", 64)] {
        let catalog = synthetic_catalog(sets, 4);
        group.bench_function(format!("resolve_{}", label), |b| {
            b.iter(|| resolve(black_box(&catalog), black_box("1.16.5")))
        });
    }

    let catalog = synthetic_catalog(64, 4);
    group.bench_function("resolve_unknown_version", |b| {
        b.iter(|| resolve(black_box(&catalog), black_box("0.0.0")))
    });

    group.finish();
}

fn bench_preview(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview");

    let catalog = synthetic_catalog(1, 1);
    let set = &catalog.sets()[0];

    let cases = [
        (
            "flat",
            RenderFlags {
                staircasing: Staircasing::Off,
                format: OutputFormat::MapDat,
                unobtainable: false,
            },
        ),
        (
            "three_band",
            RenderFlags {
                staircasing: Staircasing::Classic,
                format: OutputFormat::SchematicNbt,
                unobtainable: false,
            },
        ),
        (
            "six_band",
            RenderFlags {
                staircasing: Staircasing::Classic,
                format: OutputFormat::MapDat,
                unobtainable: true,
            },
        ),
    ];

    for (label, flags) in cases {
        group.bench_function(format!("style_{}", label), |b| {
            b.iter(|| style_preview(black_box(set), black_box(flags)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_preview);
criterion_main!(benches);
