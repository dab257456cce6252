//! unifig: turn Unifont bitmap glyphs into FIGlet fonts.
//! Encoders: solid fill, half block, braille dots, box-drawing outline.

pub mod bitmap;
pub mod box_drawing;
pub mod charset;
pub mod encoder;
mod error;
pub mod figlet;
mod font;
pub mod hex;

pub use bitmap::{Bitmap, MISSING_GLYPH};
pub use box_drawing::{BoxDrawing, BoxStyle};
pub use charset::{is_required, CodePointSet};
pub use encoder::{Encoder, GlyphArt, HalfBlock, Metrics, SolidFill};
pub use error::{FontError, Result};
pub use figlet::FlfFile;
pub use font::{FigFont, FontHeader, DEFAULT_COMMENT};
pub use hex::{GlyphSet, HexSource};

// Test utilities
pub mod test_support;
