//! Underline and strikethrough
//!
//! `%%%text%%%` is underline and `%%text%%` is strikethrough. The strikethrough pattern
//! also matches the first two thirds of an underline delimiter, so underline has to run
//! first; there is no lookahead to tell them apart.

use crate::error::ConvertError;
use crate::pass::{compile, replace_all, Pass, Stage};

fn wrap_percent_span(
    pass: &str,
    pattern: &str,
    tag: &str,
    text: &str,
) -> Result<String, ConvertError> {
    let re = compile(pass, pattern)?;
    replace_all(&re, text, |caps| {
        Ok(format!("@<{tag}>{{{}}}", caps[1].trim_matches('%')))
    })
}

/// `%%%text%%%` → `@<u>{text}`
#[derive(Default)]
pub struct UnderlinePass;

impl Pass for UnderlinePass {
    fn name(&self) -> &str {
        "underline"
    }

    fn description(&self) -> &str {
        "%%%..%%% spans"
    }

    fn stage(&self) -> Stage {
        Stage::Inner
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        wrap_percent_span(self.name(), r"%%%(.*?)%%%", "u", text)
    }
}

/// `%%text%%` → `@<del>{text}`
#[derive(Default)]
pub struct StrikethroughPass;

impl Pass for StrikethroughPass {
    fn name(&self) -> &str {
        "strikethrough"
    }

    fn description(&self) -> &str {
        "%%..%% spans"
    }

    fn stage(&self) -> Stage {
        Stage::Inner
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        wrap_percent_span(self.name(), r"%%(.*?)%%", "del", text)
    }
}
