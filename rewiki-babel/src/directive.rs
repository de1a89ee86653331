//! Tokenizer for parenthesized directive parameters
//!
//! Every `#name(a,b,c)` directive (link, img, youtube, amazon) shares the same parameter
//! syntax: a comma separated list, possibly wrapped in stray braces or quotes left over
//! from hand-edited wiki pages. This module is the one place that splits it.

use crate::error::ConvertError;

/// Punctuation trimmed from both ends of a directive's raw parameter string.
pub fn is_noise(c: char) -> bool {
    matches!(c, '{' | '}' | '\'' | '(' | ')')
}

/// Pattern matching `#<name>(<params>)`, capturing the raw parameters in group 1.
pub fn pattern(name: &str) -> String {
    format!(r"#{}\((.*?)\)", regex::escape(name))
}

/// Parsed parameters of one directive occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveArgs<'a> {
    name: &'a str,
    params: Vec<&'a str>,
}

impl<'a> DirectiveArgs<'a> {
    /// Split the raw text between the parentheses into parameters.
    ///
    /// Surrounding noise is trimmed, each parameter is whitespace-trimmed, and an empty
    /// parameter list yields no parameters at all.
    pub fn parse(name: &'a str, raw: &'a str) -> Self {
        let trimmed = raw.trim_matches(is_noise).trim();
        let params = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split(',').map(str::trim).collect()
        };
        Self { name, params }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.params.get(index).copied()
    }

    /// Fail with [`ConvertError::MalformedDirective`] unless at least `min` parameters
    /// are present.
    pub fn require(&self, min: usize) -> Result<(), ConvertError> {
        if self.params.len() < min {
            return Err(ConvertError::malformed(
                self.name,
                format!(
                    "expected at least {min} parameter{}, found {}",
                    if min == 1 { "" } else { "s" },
                    self.params.len()
                ),
            ));
        }
        Ok(())
    }

    /// The first parameter, which every directive needs.
    pub fn first(&self) -> Result<&'a str, ConvertError> {
        self.require(1)?;
        Ok(self.params[0])
    }
}
