//! Test support utilities for unifig.
//!
//! Bitmap and source builders shared by the tests and benchmarks. Not part of
//! the stable API.

use crate::{charset::REQUIRED_ASCII, Bitmap, GlyphSet, HexSource};

/// All pixels clear.
pub fn blank(width: usize) -> Bitmap {
    filled_with(width, |_, _| false)
}

/// All pixels set.
pub fn solid(width: usize) -> Bitmap {
    filled_with(width, |_, _| true)
}

/// Alternating pixels, top-left set.
pub fn checkerboard(width: usize) -> Bitmap {
    filled_with(width, |row, col| (row + col) % 2 == 0)
}

/// Build a bitmap by asking `f(row, col)` for every pixel.
pub fn filled_with(width: usize, f: impl Fn(usize, usize) -> bool) -> Bitmap {
    let rows: Vec<String> = (0..16)
        .map(|row| {
            (0..width)
                .map(|col| if f(row, col) { '1' } else { '0' })
                .collect()
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    Bitmap::from_binary_rows(&rows).expect("test bitmap dimensions")
}

/// A hex source with an 8 pixel wide glyph for every printable ASCII
/// character plus `extra` 16 pixel wide glyphs. Glyph rows encode the code
/// point so every glyph differs.
pub fn hex_source(extra: &[u32]) -> HexSource {
    let mut text = String::new();
    for cp in REQUIRED_ASCII {
        let row = format!("{:02X}", cp as u8);
        text.push_str(&format!("{cp:04X}:{}\n", row.repeat(16)));
    }
    for cp in extra {
        let row = format!("{:04X}", cp & 0xFFFF);
        text.push_str(&format!("{cp:04X}:{}\n", row.repeat(16)));
    }
    HexSource::parse(&text).expect("generated hex source")
}

/// Every printable ASCII glyph of [`hex_source`], in order.
pub fn ascii_glyphs() -> GlyphSet {
    let source = hex_source(&[]);
    let mut set = GlyphSet::new();
    for cp in REQUIRED_ASCII {
        set.insert(cp, source.bitmap(cp).expect("ascii glyph"));
    }
    set
}
