//! Unifont `.hex` source: `CODEPOINT:HEXROWS`, one glyph per line.
use crate::{
    bitmap::{Bitmap, MISSING_GLYPH},
    charset::{CodePointSet, MISSING_CODE_POINT},
    error::{FontError, Result},
};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::{fs, path::Path};
use zip::ZipArchive;

#[derive(Clone, Debug, Default)]
pub struct HexSource {
    glyphs: HashMap<u32, String>,
}

impl HexSource {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        // Unifont releases are also shipped zipped; pick the first .hex entry.
        if bytes.len() >= 4 && &bytes[0..4] == b"PK\x03\x04" {
            let mut archive = ZipArchive::new(Cursor::new(bytes))
                .map_err(|e| FontError::Parse(format!("zip open error: {e}")))?;
            for i in 0..archive.len() {
                let mut file = archive
                    .by_index(i)
                    .map_err(|e| FontError::Parse(format!("zip entry error: {e}")))?;
                if file.name().ends_with(".hex") {
                    let mut buf = String::new();
                    file.read_to_string(&mut buf)
                        .map_err(|e| FontError::Parse(format!("zip read hex error: {e}")))?;
                    return Self::parse(&buf);
                }
            }
            return Err(FontError::Parse("zip archive contained no .hex".into()));
        }
        let content =
            std::str::from_utf8(bytes).map_err(|e| FontError::Parse(format!("utf8 error: {e}")))?;
        Self::parse(content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut glyphs = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (code, rows) = line
                .split_once(':')
                .ok_or_else(|| FontError::Parse(format!("line {}: missing ':'", idx + 1)))?;
            let cp = u32::from_str_radix(code, 16).map_err(|e| {
                FontError::Parse(format!("line {}: invalid code point '{code}': {e}", idx + 1))
            })?;
            if rows.is_empty() || !rows.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(FontError::Parse(format!(
                    "line {}: invalid glyph data for U+{cp:04X}",
                    idx + 1
                )));
            }
            glyphs.insert(cp, rows.to_string());
        }
        log::debug!("parsed {} hex glyphs", glyphs.len());
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn contains(&self, cp: u32) -> bool {
        cp == MISSING_CODE_POINT || self.glyphs.contains_key(&cp)
    }

    /// Raw hex rows as read from the source.
    pub fn raw(&self, cp: u32) -> Option<&str> {
        self.glyphs.get(&cp).map(String::as_str)
    }

    /// Decoded bitmap for `cp`. Code point 0 is always the built-in missing glyph.
    pub fn bitmap(&self, cp: u32) -> Result<Bitmap> {
        if cp == MISSING_CODE_POINT {
            return Ok(MISSING_GLYPH.clone());
        }
        let rows = self.raw(cp).ok_or(FontError::MissingGlyph(cp))?;
        Bitmap::from_hex(rows)
    }

    /// Decode every code point of `set`. Fails on the first absent glyph.
    pub fn select(&self, set: &CodePointSet) -> Result<GlyphSet> {
        let mut out = GlyphSet::new();
        for cp in set.iter() {
            out.insert(cp, self.bitmap(cp)?);
        }
        log::debug!("selected {} glyphs", out.len());
        Ok(out)
    }

    /// Code point to raw hex rows, keyed by decimal code point.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        let sorted: std::collections::BTreeMap<u32, &str> = self
            .glyphs
            .iter()
            .map(|(cp, rows)| (*cp, rows.as_str()))
            .collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }
}

/// Insertion ordered code point to bitmap map.
#[derive(Clone, Debug, Default)]
pub struct GlyphSet {
    entries: Vec<(u32, Bitmap)>,
    index: HashMap<u32, usize>,
}

impl GlyphSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced entry keeps its original position.
    pub fn insert(&mut self, cp: u32, bitmap: Bitmap) {
        match self.index.get(&cp) {
            Some(&pos) => self.entries[pos].1 = bitmap,
            None => {
                self.index.insert(cp, self.entries.len());
                self.entries.push((cp, bitmap));
            }
        }
    }

    pub fn get(&self, cp: u32) -> Option<&Bitmap> {
        self.index.get(&cp).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Bitmap)> {
        self.entries.iter().map(|(cp, b)| (*cp, b))
    }

    /// Widest bitmap in the set, or 16 for an empty set.
    pub fn max_width(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, b)| b.width())
            .max()
            .unwrap_or(crate::bitmap::MAX_WIDTH)
    }
}
