//! Monochrome 16-row glyph bitmaps as stored in GNU Unifont `.hex` files.
use crate::error::{FontError, Result};
use once_cell::sync::Lazy;

/// Every Unifont glyph is exactly 16 pixel rows high.
pub const GLYPH_HEIGHT: usize = 16;
/// Widest supported row (64 hex digits per glyph).
pub const MAX_WIDTH: usize = 16;

/// Hex rows of the placeholder glyph stored under code point 0.
pub const MISSING_GLYPH_HEX: &str = "0000007E665A5A7A76767E76767E0000";

const MISSING_GLYPH_ROWS: [u16; GLYPH_HEIGHT] = [
    0x00, 0x00, 0x00, 0x7E, 0x66, 0x5A, 0x5A, 0x7A, 0x76, 0x76, 0x7E, 0x76, 0x76, 0x7E, 0x00, 0x00,
];

/// The "glyph not found" bitmap (a boxed question mark, 8 pixels wide).
pub static MISSING_GLYPH: Lazy<Bitmap> = Lazy::new(|| Bitmap {
    width: 8,
    rows: MISSING_GLYPH_ROWS,
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    /// One mask per row, the leftmost pixel in bit `width - 1`.
    rows: [u16; GLYPH_HEIGHT],
}

impl Bitmap {
    /// Decode a Unifont hex row string.
    ///
    /// The digit count must be a non-zero multiple of 16; every row takes
    /// `len / 16` digits, so 32 digits give 8 pixel wide rows and 64 digits
    /// give 16 pixel wide rows.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let len = hex.len();
        if len == 0 || len % GLYPH_HEIGHT != 0 || len > GLYPH_HEIGHT * 4 {
            return Err(FontError::InvalidBitmap(format!(
                "expected 16, 32, 48 or 64 hex digits, got {len}"
            )));
        }
        let digits_per_row = len / GLYPH_HEIGHT;
        let mut rows = [0u16; GLYPH_HEIGHT];
        for (row, chunk) in hex.as_bytes().chunks(digits_per_row).enumerate() {
            let mut mask = 0u16;
            for &b in chunk {
                let nibble = (b as char).to_digit(16).ok_or_else(|| {
                    FontError::InvalidBitmap(format!("invalid hex digit '{}'", b as char))
                })?;
                mask = (mask << 4) | nibble as u16;
            }
            rows[row] = mask;
        }
        Ok(Self {
            width: digits_per_row * 4,
            rows,
        })
    }

    /// Build a bitmap from 16 rows of '0'/'1' characters.
    pub fn from_binary_rows(rows: &[&str]) -> Result<Self> {
        if rows.len() != GLYPH_HEIGHT {
            return Err(FontError::InvalidBitmap(format!(
                "expected {GLYPH_HEIGHT} rows, got {}",
                rows.len()
            )));
        }
        let width = rows[0].len();
        if width == 0 || width > MAX_WIDTH || width % 2 != 0 {
            return Err(FontError::InvalidBitmap(format!(
                "row width must be even and at most {MAX_WIDTH}, got {width}"
            )));
        }
        let mut masks = [0u16; GLYPH_HEIGHT];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(FontError::InvalidBitmap(format!(
                    "row {i} has width {}, expected {width}",
                    row.len()
                )));
            }
            for ch in row.chars() {
                let bit = match ch {
                    '0' => 0,
                    '1' => 1,
                    _ => {
                        return Err(FontError::InvalidBitmap(format!(
                            "row {i} contains '{ch}'"
                        )))
                    }
                };
                masks[i] = (masks[i] << 1) | bit;
            }
        }
        Ok(Self { width, rows: masks })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        GLYPH_HEIGHT
    }

    /// Pixel at `row`, `col`. Panics when out of bounds.
    pub fn pixel(&self, row: usize, col: usize) -> bool {
        assert!(col < self.width, "column {col} out of range");
        (self.rows[row] >> (self.width - 1 - col)) & 1 == 1
    }

    /// Like [`Bitmap::pixel`], but positions outside the grid read as unset.
    pub fn pixel_or_blank(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 || row as usize >= GLYPH_HEIGHT || col as usize >= self.width {
            return false;
        }
        self.pixel(row as usize, col as usize)
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|r| *r == 0)
    }

    /// Rows as '0'/'1' strings, the inverse of [`Bitmap::from_binary_rows`].
    pub fn to_binary_rows(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| format!("{:0width$b}", r, width = self.width))
            .collect()
    }
}
