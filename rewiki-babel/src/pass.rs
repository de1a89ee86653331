//! Pass trait definition
//!
//! A pass recognizes one markup construct and rewrites every occurrence of it across the
//! whole text. Passes take the current text and return the next one, so the pipeline can
//! thread a single value through them without shared mutable state.

use crate::error::ConvertError;
use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt;

/// Group a pass belongs to.
///
/// Inner passes handle constructs that may sit inside other constructs and always run
/// before outer passes, which work on whole lines or whole directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Inner,
    Outer,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Inner => f.pad("inner"),
            Stage::Outer => f.pad("outer"),
        }
    }
}

/// Trait for rewrite passes
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Pass for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn stage(&self) -> Stage {
///         Stage::Inner
///     }
///
///     fn apply(&self, text: &str) -> Result<String, ConvertError> {
///         Ok(text.to_uppercase())
///     }
/// }
/// ```
pub trait Pass: Send + Sync {
    /// The name of this pass (e.g., "section", "color")
    fn name(&self) -> &str;

    /// Optional description of this pass
    fn description(&self) -> &str {
        ""
    }

    /// The group this pass runs in
    fn stage(&self) -> Stage;

    /// Rewrite every occurrence of the construct in `text`
    fn apply(&self, text: &str) -> Result<String, ConvertError>;
}

/// Compile a pass pattern, reporting failures against the pass name.
pub fn compile(pass: &str, pattern: &str) -> Result<Regex, ConvertError> {
    Regex::new(pattern).map_err(|e| ConvertError::pattern(pass, e))
}

/// Replace every non-overlapping match of `re` with the output of `rewrite`.
///
/// Same contract as [`Regex::replace_all`], except that the rewrite may fail; the first
/// failure aborts the whole replacement.
pub fn replace_all<F>(re: &Regex, text: &str, mut rewrite: F) -> Result<String, ConvertError>
where
    F: FnMut(&Captures<'_>) -> Result<String, ConvertError>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);
        out.push_str(&rewrite(&caps)?);
        last = whole.end();
    }

    out.push_str(&text[last..]);
    Ok(out)
}
