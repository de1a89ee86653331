//! Section headings
//!
//! `** Title` becomes `== Title`: the leading marker run keeps its length, so heading
//! depth survives the conversion. This pass also normalizes line endings: `\n` and
//! `\r\n` are both accepted and every line comes out terminated by `\n`.

use crate::error::ConvertError;
use crate::pass::{compile, Pass, Stage};
use crate::rules::DialectRules;
use regex::Captures;

pub struct SectionPass {
    source_marker: char,
    target_marker: char,
}

impl SectionPass {
    pub fn new(rules: &DialectRules) -> Self {
        Self {
            source_marker: rules.source_heading_marker,
            target_marker: rules.target_heading_marker,
        }
    }
}

impl Default for SectionPass {
    fn default() -> Self {
        Self::new(&DialectRules::default())
    }
}

impl Pass for SectionPass {
    fn name(&self) -> &str {
        "section"
    }

    fn description(&self) -> &str {
        "Heading marker runs at line start, line ending normalization"
    }

    fn stage(&self) -> Stage {
        Stage::Outer
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        let marker = regex::escape(&self.source_marker.to_string());
        let re = compile(self.name(), &format!("^{marker}+"))?;
        let target = self.target_marker.to_string();

        let mut out = String::with_capacity(text.len() + 1);
        for line in text.lines() {
            let converted = re.replace(line, |caps: &Captures<'_>| {
                target.repeat(caps[0].chars().count())
            });
            out.push_str(&converted);
            out.push('\n');
        }

        Ok(out)
    }
}
