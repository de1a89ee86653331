//! Functional entry points
//!
//! Thin wrappers for callers that just want text in and text out, without holding a
//! [`Pipeline`] or [`Document`] themselves.

use crate::document::Document;
use crate::error::ConvertError;
use crate::pipeline::Pipeline;
use crate::rules::DialectRules;

/// Convert wiki source to Re:VIEW with the default dialect rules
///
/// # Example
///
/// ```
/// use rewiki_babel::transforms::convert_source;
///
/// let review = convert_source("** Setup\n").unwrap();
/// assert_eq!(review, "== Setup\n");
/// ```
pub fn convert_source(source: &str) -> Result<String, ConvertError> {
    convert_source_with_rules(source, &DialectRules::default())
}

/// Convert wiki source to Re:VIEW with custom dialect rules
pub fn convert_source_with_rules(
    source: &str,
    rules: &DialectRules,
) -> Result<String, ConvertError> {
    let pipeline = Pipeline::with_rules(rules);
    let mut doc = Document::new(source);
    doc.convert(&pipeline)?;
    Ok(doc.into_result().unwrap_or_default())
}
