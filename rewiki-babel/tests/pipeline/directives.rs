//! Single directives through the full pipeline.

use insta::assert_snapshot;
use rewiki_babel::transforms::convert_source;
use rewiki_babel::ConvertError;

fn convert(src: &str) -> String {
    convert_source(src)
        .expect("conversion failed")
        .trim_end()
        .to_string()
}

#[test]
fn test_size() {
    assert_snapshot!(convert("&size(18){''hogehoge''};"), @"@<b>{hogehoge}");
}

#[test]
fn test_amazon() {
    assert_snapshot!(convert("#amazon(http://xxxx/dp/123456)"), @"@<href>{amazon://dp/123456}");
}

#[test]
fn test_image_with_width() {
    assert_snapshot!(
        convert("#img(144,zengo.jpg,560)"),
        @"@<href>{image://attachment/144/zengo.jpg?width=560}"
    );
}

#[test]
fn test_image_without_width() {
    assert_snapshot!(
        convert("#img(508,file.jpg)"),
        @"@<href>{image://attachment/508/file.jpg}"
    );
}

#[test]
fn test_link_attachment() {
    assert_snapshot!(convert("#link(3251,doc.docx)"), @"@<href>{attachment://id/3251}");
}

#[test]
fn test_youtube() {
    assert_snapshot!(
        convert("#youtube(https://www.youtube.com/watch?v=dQw4w9WgXcQ)"),
        @"@<href>{youtube://video/dQw4w9WgXcQ}"
    );
}

#[test]
fn test_tilde_continuation() {
    assert_eq!(convert_source("test~\n").unwrap(), "test\n");
}

#[test]
fn test_malformed_image_fails_whole_document() {
    let src = "* Title\n''fine'' text\n#img(onlyone)\n";
    let err = convert_source(src).unwrap_err();
    assert_eq!(
        err,
        ConvertError::MalformedDirective {
            directive: "img".to_string(),
            message: "expected at least 2 parameters, found 1".to_string(),
        }
    );
}

#[test]
fn test_youtube_without_id_fails() {
    let err = convert_source("#youtube(http://example.com/video)").unwrap_err();
    assert!(matches!(
        err,
        ConvertError::MalformedDirective { ref directive, .. } if directive == "youtube"
    ));
}

#[test]
fn test_empty_document() {
    assert_eq!(convert_source("").unwrap(), "");
}

#[test]
fn test_crlf_input_is_normalized() {
    assert_eq!(
        convert_source("** Title\r\n''b''\r\n").unwrap(),
        "== Title\n@<b>{b}\n"
    );
}

#[test]
fn test_tilde_before_crlf() {
    assert_eq!(convert_source("join~\r\nnext\r\n").unwrap(), "join\nnext\n");
}
