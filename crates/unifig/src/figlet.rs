//! FIGfont (`.flf`) writer and reader.
use crate::{
    charset::{REQUIRED_ASCII, REQUIRED_DEUTSCH},
    encoder::{GlyphArt, END_MARK},
    error::{FontError, Result},
    font::{FigFont, FontHeader},
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_glyph<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    let last = lines.len().saturating_sub(1);
    for (i, line) in lines.iter().enumerate() {
        if i == last {
            writeln!(out, "{line}{END_MARK}{END_MARK}")?;
        } else {
            writeln!(out, "{line}{END_MARK}")?;
        }
    }
    if lines.is_empty() {
        writeln!(out, "{END_MARK}{END_MARK}")?;
    }
    Ok(())
}

/// Code tag line: hex code point, then the character itself when it can
/// stand on a line, `U+XXXX` otherwise.
fn code_tag(cp: u32) -> String {
    match char::from_u32(cp) {
        Some(ch) if !ch.is_control() && !matches!(ch, '\u{2028}' | '\u{2029}') => {
            format!("{cp:#x} {ch}")
        }
        _ => format!("{cp:#x} U+{cp:04X}"),
    }
}

impl FigFont {
    /// Fails with [`FontError::MissingGlyph`] for the first printable ASCII
    /// character the font does not define.
    pub fn check_required(&self) -> Result<()> {
        match REQUIRED_ASCII.clone().find(|cp| self.glyph(*cp).is_none()) {
            Some(cp) => Err(FontError::MissingGlyph(cp)),
            None => Ok(()),
        }
    }

    /// Write the font in FIGfont layout: header, comment, printable ASCII,
    /// seven blank Deutsch placeholders, then code-tagged glyphs.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        self.check_required()?;
        self.write_checked(out)
    }

    // Callers have already run `check_required`.
    fn write_checked<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.header)?;
        if !self.comment.is_empty() {
            writeln!(out, "{}", self.comment)?;
        }
        for cp in REQUIRED_ASCII {
            let glyph = self.glyph(cp).ok_or(FontError::MissingGlyph(cp))?;
            write_glyph(out, glyph.lines())?;
        }
        // Deutsch characters are always written blank.
        let blank = vec![String::new(); self.header.height.max(1)];
        for _ in REQUIRED_DEUTSCH {
            write_glyph(out, &blank)?;
        }
        for (cp, glyph) in self.tagged_glyphs() {
            writeln!(out, "{}", code_tag(cp))?;
            write_glyph(out, glyph.lines())?;
        }
        Ok(())
    }

    pub fn to_flf_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf).map_err(|e| FontError::Parse(format!("utf8 error: {e}")))
    }

    /// Write to `path`. Nothing is created when a mandatory glyph is missing.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.check_required()?;
        let mut out = BufWriter::new(File::create(path)?);
        self.write_checked(&mut out)?;
        out.flush()?;
        log::info!(
            "wrote {} ({} glyphs, {} code tagged)",
            path.display(),
            self.glyph_count(),
            self.header.codetag_count
        );
        Ok(())
    }
}

/// A FIGfont read back from text.
#[derive(Clone, Debug)]
pub struct FlfFile {
    pub header: FontHeader,
    pub comment: String,
    glyphs: Vec<(u32, GlyphArt)>,
}

impl FlfFile {
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content.lines();
        let header: FontHeader = lines
            .next()
            .ok_or_else(|| FontError::Parse("missing header".into()))?
            .parse()?;
        let mut comments = Vec::with_capacity(header.comment_lines);
        for _ in 0..header.comment_lines {
            let line = lines
                .next()
                .ok_or_else(|| FontError::Parse("incomplete comment block".into()))?;
            comments.push(line);
        }

        let mut glyphs = Vec::new();
        for cp in REQUIRED_ASCII.chain(REQUIRED_DEUTSCH) {
            glyphs.push((cp, read_character(&mut lines, header.height)?));
        }
        while let Some(tag) = lines.next() {
            if tag.trim().is_empty() {
                continue;
            }
            let cp = parse_code_tag(tag)?;
            glyphs.push((cp, read_character(&mut lines, header.height)?));
        }

        Ok(Self {
            header,
            comment: comments.join("\n"),
            glyphs,
        })
    }

    pub fn glyph(&self, cp: u32) -> Option<&GlyphArt> {
        self.glyphs.iter().find(|(c, _)| *c == cp).map(|(_, g)| g)
    }

    pub fn glyphs(&self) -> impl Iterator<Item = (u32, &GlyphArt)> {
        self.glyphs.iter().map(|(cp, g)| (*cp, g))
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn tagged_count(&self) -> usize {
        self.glyphs.len() - REQUIRED_ASCII.count() - REQUIRED_DEUTSCH.len()
    }
}

/// Reads `height` lines, stripping one or two trailing endmarks from each.
fn read_character<'a, I>(lines: &mut I, height: usize) -> Result<GlyphArt>
where
    I: Iterator<Item = &'a str>,
{
    let mut char_lines = Vec::with_capacity(height);
    for _ in 0..height {
        let line = lines
            .next()
            .ok_or_else(|| FontError::Parse("incomplete character".into()))?;
        let line = line.trim_end_matches(['\r', '\n']);
        let mark = line
            .chars()
            .last()
            .ok_or_else(|| FontError::Parse("character line missing endmark".into()))?;
        let body = &line[..line.len() - mark.len_utf8()];
        let body = body.strip_suffix(mark).unwrap_or(body);
        char_lines.push(body.to_string());
    }
    Ok(GlyphArt::new(char_lines))
}

/// Code tags are decimal, `0x` hexadecimal or `0` prefixed octal.
fn parse_code_tag(line: &str) -> Result<u32> {
    let tag = line
        .split_whitespace()
        .next()
        .ok_or_else(|| FontError::Parse("empty code tag".into()))?;
    let parsed = if let Some(hex) = tag.strip_prefix("0x").or_else(|| tag.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else if tag.len() > 1 && tag.starts_with('0') {
        u32::from_str_radix(&tag[1..], 8)
    } else {
        tag.parse()
    };
    parsed.map_err(|e| FontError::Parse(format!("invalid code tag '{tag}': {e}")))
}
