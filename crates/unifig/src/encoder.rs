//! Glyph encoders: bitmap in, glyph art lines out.
use crate::{
    bitmap::{Bitmap, GLYPH_HEIGHT},
    box_drawing::{BoxDrawing, BoxStyle},
    error::{FontError, Result},
};

pub const FULL_BLOCK: char = '\u{2588}';
pub const UPPER_HALF_BLOCK: char = '\u{2580}';
pub const LOWER_HALF_BLOCK: char = '\u{2584}';
pub const BRAILLE_BLANK: u32 = 0x2800;

/// Dot order of a braille cell as (row, column) offsets: bit `k` is
/// `BRAILLE_DOTS[k]`.
///
/// ```text
/// 0 3
/// 1 4
/// 2 5
/// 6 7
/// ```
pub const BRAILLE_DOTS: [(usize, usize); 8] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (0, 1),
    (1, 1),
    (2, 1),
    (3, 0),
    (3, 1),
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphArt {
    lines: Vec<String>,
}

impl GlyphArt {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Widest line in characters.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Header metrics an encoder produces for glyphs up to a given width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Metrics {
    pub height: usize,
    pub baseline: usize,
    pub max_length: usize,
}

/// FIGfont endmark, stripped from the end of every glyph line by readers.
pub const END_MARK: char = '@';
/// FIGfont hardblank, rendered as a space by readers.
pub const HARD_BLANK: char = '$';

// Glyph art may not contain the characters a FIGlet reader treats specially.
fn check_drawable(what: &str, ch: char) -> Result<()> {
    if ch == END_MARK || ch == HARD_BLANK || ch.is_control() {
        return Err(FontError::InvalidArgument(format!(
            "{what} may not contain {ch:?}"
        )));
    }
    Ok(())
}

/// Every pixel becomes a two character pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolidFill {
    fill: String,
    blank: String,
}

impl SolidFill {
    pub fn new(fill: impl Into<String>, blank: impl Into<String>) -> Result<Self> {
        let fill = fill.into();
        let blank = blank.into();
        for (what, s) in [("fill", &fill), ("blank", &blank)] {
            if s.chars().count() != 2 {
                return Err(FontError::InvalidArgument(format!(
                    "{what} must be exactly 2 characters, got '{s}'"
                )));
            }
            for ch in s.chars() {
                check_drawable(what, ch)?;
            }
        }
        Ok(Self { fill, blank })
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }

    pub fn blank(&self) -> &str {
        &self.blank
    }

    fn encode(&self, bitmap: &Bitmap) -> Vec<String> {
        (0..GLYPH_HEIGHT)
            .map(|row| {
                (0..bitmap.width())
                    .map(|col| {
                        if bitmap.pixel(row, col) {
                            self.fill.as_str()
                        } else {
                            self.blank.as_str()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for SolidFill {
    fn default() -> Self {
        Self {
            fill: format!("{FULL_BLOCK}{FULL_BLOCK}"),
            blank: "  ".to_string(),
        }
    }
}

/// Two pixel rows per line: `table[upper][lower]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HalfBlock {
    table: [[char; 2]; 2],
}

impl HalfBlock {
    /// Fails when an entry is the endmark, the hardblank or a control character.
    pub fn with_table(table: [[char; 2]; 2]) -> Result<Self> {
        for ch in table.iter().flatten() {
            check_drawable("half block table", *ch)?;
        }
        Ok(Self { table })
    }

    pub fn table(&self) -> &[[char; 2]; 2] {
        &self.table
    }

    fn encode(&self, bitmap: &Bitmap) -> Vec<String> {
        (0..GLYPH_HEIGHT)
            .step_by(2)
            .map(|row| {
                (0..bitmap.width())
                    .map(|col| {
                        let upper = bitmap.pixel(row, col) as usize;
                        let lower = bitmap.pixel(row + 1, col) as usize;
                        self.table[upper][lower]
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for HalfBlock {
    fn default() -> Self {
        Self {
            table: [[' ', LOWER_HALF_BLOCK], [UPPER_HALF_BLOCK, FULL_BLOCK]],
        }
    }
}

fn encode_braille(bitmap: &Bitmap) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .step_by(4)
        .map(|row| {
            (0..bitmap.width())
                .step_by(2)
                .map(|col| {
                    let dots = BRAILLE_DOTS
                        .iter()
                        .enumerate()
                        .filter(|(_, (dr, dc))| bitmap.pixel(row + dr, col + dc))
                        .fold(0u32, |acc, (bit, _)| acc | 1 << bit);
                    // 0x2800..=0x28FF is always a valid scalar value
                    char::from_u32(BRAILLE_BLANK + dots).unwrap_or(' ')
                })
                .collect()
        })
        .collect()
}

/// The four glyph encodings a font can be generated with.
#[derive(Clone, Debug)]
pub enum Encoder {
    SolidFill(SolidFill),
    HalfBlock(HalfBlock),
    Braille,
    BoxDrawing(BoxDrawing),
}

impl Encoder {
    pub fn solid_fill() -> Self {
        Encoder::SolidFill(SolidFill::default())
    }

    pub fn half_block() -> Self {
        Encoder::HalfBlock(HalfBlock::default())
    }

    pub fn braille() -> Self {
        Encoder::Braille
    }

    pub fn box_drawing(style: BoxStyle, split_block: bool) -> Self {
        Encoder::BoxDrawing(BoxDrawing::new(style, split_block))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Encoder::SolidFill(_) => "solid",
            Encoder::HalfBlock(_) => "half-block",
            Encoder::Braille => "braille",
            Encoder::BoxDrawing(_) => "box",
        }
    }

    /// File name stem of fonts made with this encoder.
    pub fn file_stem(&self) -> String {
        match self {
            Encoder::SolidFill(_) => "solid_box_big".to_string(),
            Encoder::HalfBlock(_) => "solid_box_small".to_string(),
            Encoder::Braille => "braille_dots".to_string(),
            Encoder::BoxDrawing(b) => {
                let mode = if b.split_block() { "split" } else { "merged" };
                format!("box_drawing_{}_{mode}", b.style())
            }
        }
    }

    /// Height, baseline and max line length for glyphs up to `width` pixels.
    pub fn metrics(&self, width: usize) -> Metrics {
        let (height, baseline, line_width) = match self {
            Encoder::SolidFill(_) => (16, 14, 2 * width),
            Encoder::HalfBlock(_) => (8, 7, width),
            Encoder::Braille => (4, 4, width / 2),
            Encoder::BoxDrawing(_) => (17, 15, 2 * width + 1),
        };
        Metrics {
            height,
            baseline,
            max_length: line_width + 2,
        }
    }

    /// Extra attribution appended to the font comment.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Encoder::Braille => Some(
                "This font's idea is inspired by drawille <https://github.com/asciimoo/drawille>.",
            ),
            _ => None,
        }
    }

    pub fn encode(&self, bitmap: &Bitmap) -> GlyphArt {
        let lines = match self {
            Encoder::SolidFill(s) => s.encode(bitmap),
            Encoder::HalfBlock(h) => h.encode(bitmap),
            Encoder::Braille => encode_braille(bitmap),
            Encoder::BoxDrawing(b) => b.encode(bitmap),
        };
        GlyphArt::new(lines)
    }
}
