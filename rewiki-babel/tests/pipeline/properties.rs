//! Property tests over generated documents.

use proptest::prelude::*;
use rewiki_babel::transforms::convert_source;
use rewiki_babel::{Document, Pipeline};

proptest! {
    #[test]
    fn heading_length_is_preserved(depth in 1usize..8, rest in "[a-z][a-z ]{0,20}") {
        let src = format!("{}{}", "*".repeat(depth), rest);
        let out = convert_source(&src).unwrap();
        prop_assert_eq!(out, format!("{}{}\n", "=".repeat(depth), rest));
    }

    #[test]
    fn plain_text_only_gains_line_endings(line in "[a-zA-Z0-9 .,]{1,40}") {
        let out = convert_source(&line).unwrap();
        prop_assert_eq!(out, format!("{line}\n"));
    }

    #[test]
    fn second_convert_is_a_noop(src in "[a-z*'%~ \n]{0,60}") {
        let pipeline = Pipeline::default();
        let mut doc = Document::new(src.clone());
        doc.convert(&pipeline).unwrap();
        let first = doc.result().map(str::to_string);

        doc.convert(&pipeline).unwrap();
        prop_assert_eq!(doc.result().map(str::to_string), first);
        prop_assert_eq!(doc.source(), src.as_str());
    }

    #[test]
    fn arbitrary_input_never_panics(src in "\\PC{0,80}") {
        let _ = convert_source(&src);
    }
}
