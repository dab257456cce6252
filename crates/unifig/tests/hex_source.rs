use pretty_assertions::assert_eq;
use std::io::{Cursor, Write};
use unifig::{test_support, CodePointSet, FontError, HexSource};

#[test]
fn parses_lines_and_skips_blanks() {
    let text = "0041:0000000018242442427E424242420000\n\n4E00:0000000000000000000000000000FFFE00000000000000000000000000000000\n";
    let source = HexSource::parse(text).unwrap();
    assert_eq!(source.len(), 2);
    assert_eq!(source.bitmap(0x41).unwrap().width(), 8);
    assert_eq!(source.bitmap(0x4E00).unwrap().width(), 16);
    assert_eq!(source.raw(0x41), Some("0000000018242442427E424242420000"));
}

#[test]
fn malformed_lines_name_the_line() {
    let err = HexSource::parse("0041:00\nnonsense\n").unwrap_err();
    match err {
        FontError::Parse(msg) => assert!(msg.contains("line 2"), "{msg}"),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(HexSource::parse("zz:0000").is_err());
    assert!(HexSource::parse("0041:xyz").is_err());
}

#[test]
fn absent_code_point_aborts_selection() {
    let source = test_support::hex_source(&[0x4E00]);
    let mut set = CodePointSet::new();
    set.push(0x4E00);
    set.push(0x4E01);
    let err = source.select(&set.with_required()).unwrap_err();
    assert!(matches!(err, FontError::MissingGlyph(0x4E01)));
}

#[test]
fn selection_keeps_insertion_order() {
    let source = test_support::hex_source(&[0x3000, 0x4E00]);
    let mut set = CodePointSet::new();
    set.push(0x4E00);
    set.push(0x3000);
    let glyphs = source.select(&set.with_required()).unwrap();
    let order: Vec<u32> = glyphs.iter().map(|(cp, _)| cp).collect();
    assert_eq!(order.len(), 2 + 95 + 1);
    assert_eq!(&order[..3], &[0x4E00, 0x3000, 0x20]);
    assert_eq!(order.last(), Some(&0));
    assert_eq!(glyphs.max_width(), 16);
    assert_eq!(glyphs.get(0x4E00).map(|b| b.width()), Some(16));
    assert_eq!(glyphs.get(0x41).map(|b| b.width()), Some(8));
    assert!(glyphs.get(0x4E01).is_none());
}

#[test]
fn zipped_source_equals_plain() {
    let plain = "0041:0000000018242442427E424242420000\n";
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("unifont.hex", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(plain.as_bytes()).unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let zipped = HexSource::from_bytes(&bytes).unwrap();
    let source = HexSource::from_bytes(plain.as_bytes()).unwrap();
    assert_eq!(zipped.raw(0x41), source.raw(0x41));
}

#[test]
fn selection_list_and_ranges() {
    let mut set = CodePointSet::new();
    set.extend_from_list("中\r\n\n文\n").unwrap();
    set.parse_range("3000-3002").unwrap();
    set.parse_range("U+FF0C").unwrap();
    let cps: Vec<u32> = set.iter().collect();
    assert_eq!(cps, vec![0x4E2D, 0x6587, 0x3000, 0x3001, 0x3002, 0xFF0C]);

    assert!(set.extend_from_list("中文\n").is_err());
    assert!(set.parse_range("3002-3000").is_err());
    assert!(set.parse_range("xyz").is_err());
}

#[test]
fn cjk_punctuation_defaults() {
    let cps: Vec<u32> = CodePointSet::cjk_punctuation().iter().collect();
    assert_eq!(cps.len(), 3 + 5 + 2 + 1 + 1 + 1 + 2 + 1 + 1);
    assert_eq!(cps.first(), Some(&0x3000));
    assert_eq!(cps.last(), Some(&0x2026));
}

#[test]
fn json_dump_is_keyed_by_decimal_code_point() {
    let source = test_support::hex_source(&[]);
    let json = source.to_json().unwrap();
    assert!(json.contains(&format!("\"65\": \"{}\"", "41".repeat(16))), "{json}");
}
