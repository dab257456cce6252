//! Benchmark for assembling fonts with every encoder.
//!
//! Uses a synthetic source of printable ASCII plus one CJK block worth of
//! 16 pixel wide glyphs, roughly the size of a real simplified-Chinese font.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use unifig::{test_support, BoxStyle, CodePointSet, Encoder, FigFont};

fn bench_encoders(c: &mut Criterion) {
    let extra: Vec<u32> = (0x4E00..0x4E00 + 2048).collect();
    let source = test_support::hex_source(&extra);
    let mut set = CodePointSet::new();
    set.push_range(0x4E00, 0x4E00 + 2047).unwrap();
    let glyphs = source.select(&set.with_required()).unwrap();

    let encoders = [
        Encoder::solid_fill(),
        Encoder::half_block(),
        Encoder::braille(),
        Encoder::box_drawing(BoxStyle::Normal, true),
        Encoder::box_drawing(BoxStyle::Double, false),
    ];

    let mut group = c.benchmark_group("assemble");
    for encoder in &encoders {
        group.bench_function(encoder.file_stem(), |b| {
            b.iter(|| FigFont::assemble(black_box(&glyphs), encoder))
        });
    }
    group.finish();

    let font = FigFont::assemble(&glyphs, &Encoder::half_block());
    c.bench_function("serialize_half_block", |b| {
        b.iter(|| black_box(&font).to_flf_string().unwrap())
    });
}

criterion_group!(benches, bench_encoders);
criterion_main!(benches);
