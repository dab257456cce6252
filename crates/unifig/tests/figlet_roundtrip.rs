use pretty_assertions::assert_eq;
use unifig::{
    charset::{REQUIRED_ASCII, REQUIRED_DEUTSCH},
    test_support, BoxStyle, CodePointSet, Encoder, FigFont, FlfFile, FontError, FontHeader,
    GlyphSet,
};

fn chinese_glyphs() -> GlyphSet {
    let source = test_support::hex_source(&[0x3000, 0x4E00]);
    let mut set = CodePointSet::new();
    set.push(0x4E00);
    set.push(0x3000);
    source.select(&set.with_required()).unwrap()
}

fn temp_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("unifig-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn header_line_has_eight_fields() {
    let font = FigFont::assemble(&chinese_glyphs(), &Encoder::half_block());
    assert_eq!(font.header.to_string(), "flf2a$ 8 7 18 -1 3 0 0 3");

    let braille = FigFont::assemble(&chinese_glyphs(), &Encoder::braille());
    assert_eq!(braille.header.to_string(), "flf2a$ 4 4 10 -1 4 0 0 3");
    assert_eq!(braille.comment.lines().count(), 4);
}

#[test]
fn header_parses_back() {
    let header: FontHeader = "flf2a$ 17 15 35 -1 3 0 0 12".parse().unwrap();
    assert_eq!(header.height, 17);
    assert_eq!(header.old_layout, -1);
    assert_eq!(header.codetag_count, 12);

    let short: FontHeader = "flf2a$ 6 5 20 15 0".parse().unwrap();
    assert_eq!(short.print_direction, 0);
    assert_eq!(short.codetag_count, 0);

    assert!("flf2 6 5 20 15 0".parse::<FontHeader>().is_err());
    assert!("flf2a$ 6 5".parse::<FontHeader>().is_err());
}

#[test]
fn codetag_count_skips_required_characters() {
    let mut glyphs = test_support::ascii_glyphs();
    glyphs.insert(0xC4, test_support::blank(8));
    glyphs.insert(0x4E00, test_support::blank(16));
    let font = FigFont::assemble(&glyphs, &Encoder::solid_fill());
    assert_eq!(font.header.codetag_count, 1);
    assert_eq!(font.tagged_glyphs().count(), 1);
}

#[test]
fn written_font_has_figlet_layout() {
    let font = FigFont::assemble(&chinese_glyphs(), &Encoder::half_block());
    let text = font.to_flf_string().unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "flf2a$ 8 7 18 -1 3 0 0 3");
    assert_eq!(lines[1], "File is generated by unifig.");
    assert_eq!(lines.len(), 1 + 3 + 102 * 8 + 3 * (1 + 8));

    let body = &lines[4..4 + 102 * 8];
    for glyph in body.chunks(8) {
        for line in &glyph[..7] {
            assert!(line.ends_with('@') && !line.ends_with("@@"), "{line}");
        }
        assert!(glyph[7].ends_with("@@"));
    }
    // blank Deutsch placeholders
    let deutsch = &lines[4 + 95 * 8..4 + 102 * 8];
    assert!(deutsch.chunks(8).all(|g| g[..7] == ["@"; 7] && g[7] == "@@"));

    let tags: Vec<&str> = lines[4 + 102 * 8..].iter().step_by(9).copied().collect();
    assert_eq!(tags, vec!["0x4e00 一", "0x3000 \u{3000}", "0x0 U+0000"]);
}

#[test]
fn round_trip_preserves_required_glyphs() {
    let encoders = [
        Encoder::solid_fill(),
        Encoder::half_block(),
        Encoder::braille(),
        Encoder::box_drawing(BoxStyle::Normal, true),
    ];
    for encoder in encoders {
        let font = FigFont::assemble(&chinese_glyphs(), &encoder);
        let parsed = FlfFile::parse(&font.to_flf_string().unwrap()).unwrap();

        assert_eq!(parsed.header, font.header);
        assert_eq!(parsed.comment, font.comment);
        assert_eq!(parsed.glyph_count(), 102 + 3);
        assert_eq!(parsed.tagged_count(), font.header.codetag_count);
        for cp in REQUIRED_ASCII {
            let glyph = parsed.glyph(cp).unwrap();
            assert_eq!(glyph.height(), font.header.height);
            assert_eq!(glyph, font.glyph(cp).unwrap());
        }
        for cp in REQUIRED_DEUTSCH {
            let glyph = parsed.glyph(cp).unwrap();
            assert!(glyph.lines().iter().all(String::is_empty));
        }
        let tagged: Vec<u32> = parsed.glyphs().skip(102).map(|(cp, _)| cp).collect();
        assert_eq!(tagged, vec![0x4E00, 0x3000, 0]);
        assert_eq!(parsed.glyph(0x4E00), font.glyph(0x4E00));
    }
}

#[test]
fn line_breaking_code_points_keep_the_tag_on_one_line() {
    let mut glyphs = test_support::ascii_glyphs();
    glyphs.insert(0x0A, test_support::checkerboard(16));
    glyphs.insert(0x2028, test_support::solid(16));
    let font = FigFont::assemble(&glyphs, &Encoder::braille());
    let text = font.to_flf_string().unwrap();
    assert!(text.contains("\n0xa U+000A\n"));
    assert!(text.contains("\n0x2028 U+2028\n"));

    let parsed = FlfFile::parse(&text).unwrap();
    assert_eq!(parsed.tagged_count(), 2);
    assert_eq!(parsed.glyph(0x0A), font.glyph(0x0A));
    assert_eq!(parsed.glyph(0x2028), font.glyph(0x2028));
}

#[test]
fn lookup_finds_every_assembled_glyph() {
    let font = FigFont::assemble(&chinese_glyphs(), &Encoder::half_block());
    assert_eq!(font.glyph_count(), 98);
    for (cp, glyph) in font.glyphs() {
        assert_eq!(font.glyph(cp), Some(glyph));
    }
    assert!(font.glyph(0x4E01).is_none());
}

#[test]
fn missing_required_glyph_writes_nothing() {
    let mut glyphs = GlyphSet::new();
    for cp in 0x20..0x7E {
        glyphs.insert(cp, test_support::blank(8));
    }
    let font = FigFont::assemble(&glyphs, &Encoder::braille());
    let path = temp_path("incomplete.flf");
    let err = font.save(&path).unwrap_err();
    assert!(matches!(err, FontError::MissingGlyph(0x7E)));
    assert!(!path.exists());
}

#[test]
fn unwritable_destination_is_an_io_error() {
    let font = FigFont::assemble(&test_support::ascii_glyphs(), &Encoder::braille());
    let path = temp_path("no-such-dir").join("font.flf");
    assert!(matches!(font.save(&path), Err(FontError::Io(_))));
}

#[test]
fn saved_file_matches_string_output() {
    let font = FigFont::assemble(&chinese_glyphs(), &Encoder::box_drawing(BoxStyle::Double, false));
    let path = temp_path("double.flf");
    font.save(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, font.to_flf_string().unwrap());
}
