//! Box-drawing outline encoder.
//!
//! The bitmap is treated as a grid of junctions, one between every group of
//! four pixels. For junction (`row`, `col`) the neighbours are
//!
//! ```text
//!   b | a      b = (row - 1, col - 1)   a = (row - 1, col)
//!  ---+---
//!   c | d      c = (row, col - 1)       d = (row, col)
//! ```
//!
//! and `a + 2b + 4c + 8d` selects one of 16 precomputed junction glyphs. Each
//! glyph is two characters: the junction itself and the wall running right of it.
use crate::{
    bitmap::{Bitmap, GLYPH_HEIGHT},
    error::{FontError, Result},
};
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BoxStyle {
    Bold,
    #[default]
    Normal,
    Double,
    /// Light lines with rounded corners.
    Borad,
}

impl BoxStyle {
    pub const ALL: [BoxStyle; 4] = [
        BoxStyle::Bold,
        BoxStyle::Normal,
        BoxStyle::Double,
        BoxStyle::Borad,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BoxStyle::Bold => "bold",
            BoxStyle::Normal => "normal",
            BoxStyle::Double => "double",
            BoxStyle::Borad => "borad",
        }
    }

    pub fn char_set(self) -> &'static BoxCharSet {
        match self {
            BoxStyle::Bold => &BOLD,
            BoxStyle::Normal => &NORMAL,
            BoxStyle::Double => &DOUBLE,
            BoxStyle::Borad => &BORAD,
        }
    }
}

impl FromStr for BoxStyle {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self> {
        BoxStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| FontError::UnknownStyle(s.to_string()))
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The eleven line-drawing glyphs a style is made of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxCharSet {
    pub horizontal: char,
    pub vertical: char,
    pub down_right: char,
    pub down_left: char,
    pub up_right: char,
    pub up_left: char,
    pub vertical_right: char,
    pub vertical_left: char,
    pub down_horizontal: char,
    pub up_horizontal: char,
    pub cross: char,
}

const BOLD: BoxCharSet = BoxCharSet {
    horizontal: '━',
    vertical: '┃',
    down_right: '┏',
    down_left: '┓',
    up_right: '┗',
    up_left: '┛',
    vertical_right: '┣',
    vertical_left: '┫',
    down_horizontal: '┳',
    up_horizontal: '┻',
    cross: '╋',
};

const NORMAL: BoxCharSet = BoxCharSet {
    horizontal: '─',
    vertical: '│',
    down_right: '┌',
    down_left: '┐',
    up_right: '└',
    up_left: '┘',
    vertical_right: '├',
    vertical_left: '┤',
    down_horizontal: '┬',
    up_horizontal: '┴',
    cross: '┼',
};

const DOUBLE: BoxCharSet = BoxCharSet {
    horizontal: '═',
    vertical: '║',
    down_right: '╔',
    down_left: '╗',
    up_right: '╚',
    up_left: '╝',
    vertical_right: '╠',
    vertical_left: '╣',
    down_horizontal: '╦',
    up_horizontal: '╩',
    cross: '╬',
};

const BORAD: BoxCharSet = BoxCharSet {
    down_right: '╭',
    down_left: '╮',
    up_right: '╰',
    up_left: '╯',
    ..NORMAL
};

impl BoxCharSet {
    fn junction(&self, up: bool, down: bool, left: bool, right: bool) -> char {
        match (up, down, left, right) {
            (false, false, false, false) => ' ',
            (_, _, false, false) => self.vertical,
            (false, false, _, _) => self.horizontal,
            (false, true, false, true) => self.down_right,
            (false, true, true, false) => self.down_left,
            (true, false, false, true) => self.up_right,
            (true, false, true, false) => self.up_left,
            (true, true, false, true) => self.vertical_right,
            (true, true, true, false) => self.vertical_left,
            (false, true, true, true) => self.down_horizontal,
            (true, false, true, true) => self.up_horizontal,
            (true, true, true, true) => self.cross,
        }
    }
}

/// Two-character glyph for each of the 16 neighbourhood indices.
pub type JunctionTable = [[char; 2]; 16];

/// Index of the junction left of `col` above `row`.
pub fn junction_index(bitmap: &Bitmap, row: usize, col: usize) -> usize {
    let (row, col) = (row as isize, col as isize);
    let a = bitmap.pixel_or_blank(row - 1, col) as usize;
    let b = bitmap.pixel_or_blank(row - 1, col - 1) as usize;
    let c = bitmap.pixel_or_blank(row, col - 1) as usize;
    let d = bitmap.pixel_or_blank(row, col) as usize;
    a + 2 * b + 4 * c + 8 * d
}

/// Build the junction table for a style.
///
/// In split mode every set pixel is outlined on its own, so a wall is drawn
/// wherever either neighbour is set. In merged mode walls only separate set
/// from unset pixels.
pub fn junction_table(chars: &BoxCharSet, split_block: bool) -> JunctionTable {
    let wall = |x: bool, y: bool| if split_block { x || y } else { x != y };
    let mut table = [[' '; 2]; 16];
    for (index, entry) in table.iter_mut().enumerate() {
        let a = index & 1 != 0;
        let b = index & 2 != 0;
        let c = index & 4 != 0;
        let d = index & 8 != 0;
        let (up, down, left, right) = (wall(b, a), wall(c, d), wall(b, c), wall(a, d));
        entry[0] = chars.junction(up, down, left, right);
        entry[1] = if right { chars.horizontal } else { ' ' };
    }
    table
}

#[derive(Clone, Debug)]
pub struct BoxDrawing {
    style: BoxStyle,
    split_block: bool,
    table: JunctionTable,
}

impl BoxDrawing {
    pub fn new(style: BoxStyle, split_block: bool) -> Self {
        Self {
            style,
            split_block,
            table: junction_table(style.char_set(), split_block),
        }
    }

    /// Look the style up by name; unknown names are a configuration error.
    pub fn from_name(style: &str, split_block: bool) -> Result<Self> {
        Ok(Self::new(style.parse()?, split_block))
    }

    pub fn style(&self) -> BoxStyle {
        self.style
    }

    pub fn split_block(&self) -> bool {
        self.split_block
    }

    pub fn table(&self) -> &JunctionTable {
        &self.table
    }

    /// 17 lines of `2 * width + 1` characters.
    pub fn encode(&self, bitmap: &Bitmap) -> Vec<String> {
        (0..=GLYPH_HEIGHT)
            .map(|row| {
                let mut line = String::with_capacity((bitmap.width() + 1) * 2);
                for col in 0..=bitmap.width() {
                    line.extend(self.table[junction_index(bitmap, row, col)]);
                }
                if line.ends_with(' ') {
                    line.pop();
                }
                line
            })
            .collect()
    }
}
