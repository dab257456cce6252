use crate::{
    charset::is_required,
    encoder::{Encoder, GlyphArt},
    error::{FontError, Result},
    hex::GlyphSet,
};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Signature and hardblank every generated header starts with.
pub const SIGNATURE: &str = "flf2a$";

/// Attribution written into every generated font.
pub const DEFAULT_COMMENT: &str = "File is generated by unifig.
Convert unifont <https://unifoundry.com/unifont/> (especially for Chinese characters) to FIGfont file.
License of this FIGfont and unifont is SIL OPEN FONT LICENSE Version 1.1(OFL 1.1), see LICENSE.txt.";

/// The eight numeric fields of a FIGfont header line, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FontHeader {
    pub height: usize,
    pub baseline: usize,
    pub max_length: usize,
    /// -1 disables horizontal smushing.
    pub old_layout: i32,
    pub comment_lines: usize,
    /// 0 is left-to-right.
    pub print_direction: u8,
    pub full_layout: u32,
    pub codetag_count: usize,
}

impl fmt::Display for FontHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{SIGNATURE} {} {} {} {} {} {} {} {}",
            self.height,
            self.baseline,
            self.max_length,
            self.old_layout,
            self.comment_lines,
            self.print_direction,
            self.full_layout,
            self.codetag_count
        )
    }
}

impl FromStr for FontHeader {
    type Err = FontError;

    /// Parses `flf2aX height baseline max_length old_layout comment_lines
    /// [print_direction [full_layout [codetag_count]]]`.
    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let signature = parts
            .next()
            .ok_or_else(|| FontError::Parse("missing header".into()))?;
        if !signature.starts_with("flf2a") {
            return Err(FontError::Parse("not a flf2a header".into()));
        }
        let fields: Vec<&str> = parts.collect();
        if fields.len() < 5 {
            return Err(FontError::Parse("incomplete header".into()));
        }
        fn field<T: FromStr>(fields: &[&str], idx: usize, name: &str) -> Result<T> {
            match fields.get(idx) {
                Some(s) => s
                    .parse()
                    .map_err(|_| FontError::Parse(format!("invalid {name} '{s}'"))),
                None => "0"
                    .parse()
                    .map_err(|_| FontError::Parse(format!("missing {name}"))),
            }
        }
        Ok(Self {
            height: field(&fields, 0, "height")?,
            baseline: field(&fields, 1, "baseline")?,
            max_length: field(&fields, 2, "max length")?,
            old_layout: field(&fields, 3, "old layout")?,
            comment_lines: field(&fields, 4, "comment lines")?,
            print_direction: field(&fields, 5, "print direction")?,
            full_layout: field(&fields, 6, "full layout")?,
            codetag_count: field(&fields, 7, "codetag count")?,
        })
    }
}

/// An assembled font: header, comment and one glyph per code point.
#[derive(Clone, Debug)]
pub struct FigFont {
    pub header: FontHeader,
    pub comment: String,
    glyphs: Vec<(u32, GlyphArt)>,
    index: HashMap<u32, usize>,
}

impl FigFont {
    /// Encode every glyph of `glyphs` with `encoder`, keeping their order.
    pub fn assemble(glyphs: &GlyphSet, encoder: &Encoder) -> Self {
        let metrics = encoder.metrics(glyphs.max_width());
        let mut comment = DEFAULT_COMMENT.to_string();
        if let Some(notice) = encoder.notice() {
            comment.push('\n');
            comment.push_str(notice);
        }
        let encoded: Vec<(u32, GlyphArt)> = glyphs
            .iter()
            .map(|(cp, bitmap)| (cp, encoder.encode(bitmap)))
            .collect();
        let index = encoded
            .iter()
            .enumerate()
            .map(|(pos, (cp, _))| (*cp, pos))
            .collect();
        let codetag_count = encoded.iter().filter(|(cp, _)| !is_required(*cp)).count();
        log::debug!(
            "assembled {} font: {} glyphs, {} code tagged",
            encoder.name(),
            encoded.len(),
            codetag_count
        );
        Self {
            header: FontHeader {
                height: metrics.height,
                baseline: metrics.baseline,
                max_length: metrics.max_length,
                old_layout: -1,
                comment_lines: comment.lines().count(),
                print_direction: 0,
                full_layout: 0,
                codetag_count,
            },
            comment,
            glyphs: encoded,
            index,
        }
    }

    pub fn glyph(&self, cp: u32) -> Option<&GlyphArt> {
        self.index.get(&cp).map(|&pos| &self.glyphs[pos].1)
    }

    pub fn glyphs(&self) -> impl Iterator<Item = (u32, &GlyphArt)> {
        self.glyphs.iter().map(|(cp, g)| (*cp, g))
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Optional glyphs, written after the mandatory block with a code tag.
    pub fn tagged_glyphs(&self) -> impl Iterator<Item = (u32, &GlyphArt)> {
        self.glyphs().filter(|(cp, _)| !is_required(*cp))
    }
}
