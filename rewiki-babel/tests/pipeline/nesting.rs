//! Constructs that only convert correctly because of the pass order.

use rewiki_babel::pipeline::{Pipeline, INNER_PASSES, OUTER_PASSES};
use rewiki_babel::transforms::{convert_source, convert_source_with_rules};
use rewiki_babel::{DialectRules, Document};

#[test]
fn test_nested_color_balance() {
    assert_eq!(
        convert_source("&color(#0000ff){@<b>{hello}};").unwrap(),
        "@<color:#0000ff>{@<b>{hello}}\n"
    );
}

#[test]
fn test_size_inside_color() {
    assert_eq!(
        convert_source("&color(Red){&size(20){''big''};};").unwrap(),
        "@<color:Red>{@<b>{big}}\n"
    );
}

#[test]
fn test_bold_inside_color_is_noise() {
    assert_eq!(
        convert_source("&color(blue){''hogehoge''};").unwrap(),
        "@<color:blue>{hogehoge}\n"
    );
}

#[test]
fn test_bold_around_converted_url_stays_balanced() {
    assert_eq!(
        convert_source("''http://example.com''\n").unwrap(),
        "@<b>{@<href>{http://example.com}}\n"
    );
}

#[test]
fn test_bold_around_color_stays_balanced() {
    assert_eq!(
        convert_source("''&color(red){x};''\n").unwrap(),
        "@<b>{@<color:red>{x}}\n"
    );
}

#[test]
fn test_url_before_join_marker() {
    assert_eq!(
        convert_source("see http://example.com~\nnext\n").unwrap(),
        "see @<href>{http://example.com}\nnext\n"
    );
}

#[test]
fn test_link_exclusivity() {
    let src = "http://www.amazon.co.jp/dp/4188695129 http://www.youtube.com/v/abc\n";
    assert_eq!(convert_source(src).unwrap(), src);
}

#[test]
fn test_converted_url_is_not_wrapped_twice() {
    assert_eq!(
        convert_source("#link(http://example.com) and http://example.com").unwrap(),
        "@<href>{http://example.com} and @<href>{http://example.com}\n"
    );
}

#[test]
fn test_underline_not_eaten_by_strikethrough() {
    assert_eq!(
        convert_source("%%%u%%%%%d%%").unwrap(),
        "@<u>{u}@<del>{d}\n"
    );
}

#[test]
fn test_heading_with_inline_markup() {
    assert_eq!(
        convert_source("** ''Bold'' heading with &color(red){color};").unwrap(),
        "== @<b>{Bold} heading with @<color:red>{color}\n"
    );
}

#[test]
fn test_triple_quote_reduction_is_opt_in() {
    let src = "it'''s\n";
    assert_eq!(convert_source(src).unwrap(), "it'''s\n");

    let rules = DialectRules {
        triple_quote_reduction: true,
        ..Default::default()
    };
    assert_eq!(convert_source_with_rules(src, &rules).unwrap(), "it's\n");
}

#[test]
fn test_trace_ends_with_converted_text() {
    let pipeline = Pipeline::default();
    let src = "* A\n&size(1){x}; http://example.com\n";
    let steps = pipeline.trace(src).unwrap();

    let names: Vec<&str> = steps.iter().map(|s| s.pass.as_str()).collect();
    let expected: Vec<&str> = INNER_PASSES.iter().chain(OUTER_PASSES).copied().collect();
    assert_eq!(names, expected);

    let mut doc = Document::new(src);
    doc.convert(&pipeline).unwrap();
    assert_eq!(steps.last().map(|s| s.output.as_str()), doc.result());
}
