//! Escape normalization
//!
//! - A `~` right before a line break is the wiki's explicit line join marker; it is
//!   dropped and the break kept.
//! - `'''` runs collapse to a single `'`. This undoes the tripled quoting some wiki pages
//!   use and only participates when [`DialectRules::triple_quote_reduction`] is set.
//!
//! [`DialectRules::triple_quote_reduction`]: crate::rules::DialectRules::triple_quote_reduction

use crate::error::ConvertError;
use crate::pass::{compile, replace_all, Pass, Stage};

#[derive(Default)]
pub struct TildeContinuationPass;

impl Pass for TildeContinuationPass {
    fn name(&self) -> &str {
        "tilde-continuation"
    }

    fn description(&self) -> &str {
        "Trailing ~ line join markers"
    }

    fn stage(&self) -> Stage {
        Stage::Outer
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        let re = compile(self.name(), r"~(\r?\n)")?;
        replace_all(&re, text, |caps| Ok(caps[1].to_string()))
    }
}

#[derive(Default)]
pub struct TripleQuotePass;

impl Pass for TripleQuotePass {
    fn name(&self) -> &str {
        "triple-quote"
    }

    fn description(&self) -> &str {
        "''' runs reduced to '"
    }

    fn stage(&self) -> Stage {
        Stage::Inner
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        let re = compile(self.name(), "'''")?;
        replace_all(&re, text, |_| Ok("'".to_string()))
    }
}
