//! Whole-document conversions checked against the fixture pairs.

use crate::common::{fixture_names, load_fixture};
use rewiki_babel::transforms::convert_source;

fn assert_fixture(name: &str) {
    let (source, expected) = load_fixture(name);
    let actual = convert_source(&source)
        .unwrap_or_else(|e| panic!("Fixture '{name}' failed to convert: {e}"));
    assert_eq!(actual, expected, "fixture '{name}'");
}

#[test]
fn test_headings() {
    assert_fixture("headings");
}

#[test]
fn test_inline_constructs() {
    assert_fixture("inline");
}

#[test]
fn test_links() {
    assert_fixture("links");
}

#[test]
fn test_media_embeds() {
    assert_fixture("media");
}

#[test]
fn test_line_continuation() {
    assert_fixture("continuation");
}

#[test]
fn test_reading_notes_page() {
    assert_fixture("reading-notes");
}

#[test]
fn test_every_fixture_converts() {
    let names = fixture_names();
    assert!(names.len() >= 6, "expected fixtures, found {names:?}");
    for name in &names {
        assert_fixture(name);
    }
}
