use pretty_assertions::assert_eq;
use slidecode_core::{CodeStyle, Color, PaletteError, SpanStyle, StyleCategory};
use std::io::Write;

#[test]
fn test_palette_overrides_on_top_of_base() {
    let palette = CodeStyle::from_yaml_str(include_str!("fixtures/solarized.yaml"))
        .expect("parse palette");

    assert_eq!(
        palette.style(StyleCategory::Keyword),
        &SpanStyle::color(Color::from_hex(0x859900)).bold()
    );
    assert_eq!(
        palette.style(StyleCategory::Comment),
        &SpanStyle::color(Color::from_hex(0x93A1A1)).italic()
    );
    // Untouched categories come from the light base.
    assert_eq!(
        palette.style(StyleCategory::Number),
        CodeStyle::light().style(StyleCategory::Number)
    );
}

#[test]
fn test_empty_palette_is_darcula() {
    let palette = CodeStyle::from_yaml_str("{}").expect("parse palette");
    assert_eq!(palette, CodeStyle::darcula());
    assert_eq!(CodeStyle::default(), CodeStyle::darcula());
}

#[test]
fn test_invalid_color_is_rejected() {
    let err = CodeStyle::from_yaml_str("styles:\n  number: { color: \"blue\" }\n").unwrap_err();
    assert!(matches!(err, PaletteError::Yaml(_)), "{err}");
    assert!(err.to_string().contains("invalid color"), "{err}");
}

#[test]
fn test_unknown_category_is_rejected() {
    let err = CodeStyle::from_yaml_str("styles:\n  sparkle: { bold: true }\n").unwrap_err();
    assert!(matches!(err, PaletteError::Yaml(_)));
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "base: darcula\nstyles:\n  tag: {{ color: \"#112233\", underline: true }}")
        .expect("write palette");

    let palette = CodeStyle::load_from_path(file.path()).expect("load palette");
    assert_eq!(
        palette.style(StyleCategory::Tag),
        &SpanStyle::color(Color::rgb(0x11, 0x22, 0x33)).underline()
    );

    let missing = CodeStyle::load_from_path(file.path().with_extension("missing"));
    assert!(matches!(missing, Err(PaletteError::Io(_))));
}
