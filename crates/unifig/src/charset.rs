//! Code-point selection: which glyphs go into a generated font.
use crate::error::{FontError, Result};
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Printable ASCII, the first block every FIGfont must define.
pub const REQUIRED_ASCII: RangeInclusive<u32> = 0x20..=0x7E;

/// The seven Deutsch characters that follow the ASCII block: Ä Ö Ü ä ö ü ß.
pub const REQUIRED_DEUTSCH: [u32; 7] = [0xC4, 0xD6, 0xDC, 0xE4, 0xF6, 0xFC, 0xDF];

/// FIGlet renders code point 0 for characters the font does not define.
pub const MISSING_CODE_POINT: u32 = 0;

// CJK symbols and punctuation commonly needed alongside Chinese text.
const CJK_PUNCTUATION: [(u32, u32); 9] = [
    (0x3000, 0x3002), // ideographic space, comma, full stop
    (0x3007, 0x300B), // 〇 and angle brackets
    (0x3010, 0x3011), // 【】
    (0xFF0C, 0xFF0C), // ，
    (0xFF01, 0xFF01), // ！
    (0xFF1F, 0xFF1F), // ？
    (0xFF1A, 0xFF1B), // ：；
    (0x2014, 0x2014), // —
    (0x2026, 0x2026), // …
];

/// Whether `cp` belongs to the mandatory FIGfont character set.
pub fn is_required(cp: u32) -> bool {
    REQUIRED_ASCII.contains(&cp) || REQUIRED_DEUTSCH.contains(&cp)
}

/// An ordered list of inclusive code-point ranges.
#[derive(Clone, Debug, Default)]
pub struct CodePointSet {
    ranges: Vec<RangeInclusive<u32>>,
}

impl CodePointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cjk_punctuation() -> Self {
        let mut set = Self::new();
        for (start, end) in CJK_PUNCTUATION {
            set.ranges.push(start..=end);
        }
        set
    }

    pub fn push(&mut self, cp: u32) {
        self.ranges.push(cp..=cp);
    }

    pub fn push_range(&mut self, start: u32, end: u32) -> Result<()> {
        if start > end {
            return Err(FontError::InvalidArgument(format!(
                "range start {start:#x} is after its end {end:#x}"
            )));
        }
        self.ranges.push(start..=end);
        Ok(())
    }

    /// Add a range written as `HEX` or `HEX-HEX`, e.g. `4E00-9FFF`.
    pub fn parse_range(&mut self, text: &str) -> Result<()> {
        let parse = |s: &str| {
            let s = s.trim();
            let s = s
                .strip_prefix("U+")
                .or_else(|| s.strip_prefix("0x"))
                .unwrap_or(s);
            u32::from_str_radix(s, 16)
                .map_err(|e| FontError::Parse(format!("invalid code point '{s}': {e}")))
        };
        match text.split_once('-') {
            Some((start, end)) => self.push_range(parse(start)?, parse(end)?),
            None => {
                self.push(parse(text)?);
                Ok(())
            }
        }
    }

    /// Add every character of a newline separated list, one character per line.
    pub fn extend_from_list(&mut self, list: &str) -> Result<()> {
        for (idx, line) in list.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (None, _) => log::warn!("selection list line {} is empty, skipped", idx + 1),
                (Some(ch), None) => self.push(ch as u32),
                (Some(_), Some(_)) => {
                    return Err(FontError::Parse(format!(
                        "selection list line {} holds more than one character: '{line}'",
                        idx + 1
                    )))
                }
            }
        }
        Ok(())
    }

    /// Append the mandatory ASCII block and the missing-glyph code point.
    pub fn with_required(mut self) -> Self {
        self.ranges.push(REQUIRED_ASCII);
        self.ranges.push(MISSING_CODE_POINT..=MISSING_CODE_POINT);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Every selected code point once, in the order it was first added.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        let mut seen = HashSet::new();
        self.ranges
            .iter()
            .flat_map(|r| r.clone())
            .filter(move |cp| seen.insert(*cp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deutsch_block_is_required() {
        assert!(is_required(0xDF));
        assert!(is_required(b'~' as u32));
        assert!(!is_required(0x7F));
        assert!(!is_required(MISSING_CODE_POINT));
    }

    #[test]
    fn duplicates_keep_first_position() {
        let mut set = CodePointSet::new();
        set.push(0x41);
        set.push_range(0x40, 0x42).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0x41, 0x40, 0x42]);
    }
}
