//! Bold emphasis
//!
//! Two wiki spellings fold into the same `@<b>{..}` wrapper: quoted spans (`''bold''`)
//! and size directives (`&size(18){''big''};`). Re:VIEW has no font sizes, so a sized
//! span is rendered as bold.
//!
//! Bold runs after the link and color passes, so its payload may already hold a complete
//! wrapper (`''@<href>{..}''`). Only braces and parentheses that have no partner inside
//! the payload are trimmed; a wrapper's own closing brace is never stray.
//!
//! The size pass must run first. Its payload usually carries its own quotes, and letting
//! the quoted-span pass see them would wrap the payload twice.

use crate::error::ConvertError;
use crate::pass::{compile, replace_all, Pass, Stage};
use crate::rules::DialectRules;

const SIZE_PATTERN: &str = r"&size\([^)]*\)\{(.*?)\};*";

fn bold(content: &str) -> String {
    format!("@<b>{{{content}}}")
}

/// Whether the opener at the start of `s` is closed by the closer at its very end.
fn is_enclosed(s: &str, open: char, close: char) -> bool {
    if s.len() < 2 || !s.starts_with(open) || !s.ends_with(close) {
        return false;
    }
    let mut depth = 0usize;
    for (at, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return at + c.len_utf8() == s.len();
            }
        }
    }
    false
}

fn count(s: &str, c: char) -> usize {
    s.matches(c).count()
}

/// Strip quotes, enclosing pairs and unpartnered braces or parentheses from both ends.
fn trim_stray(payload: &str) -> &str {
    let mut s = payload.trim_matches('\'');
    loop {
        let before = s;
        for (open, close) in [('{', '}'), ('(', ')')] {
            if is_enclosed(s, open, close) {
                s = &s[open.len_utf8()..s.len() - close.len_utf8()];
            }
            if s.starts_with(open) && count(s, open) > count(s, close) {
                s = &s[open.len_utf8()..];
            }
            if s.ends_with(close) && count(s, close) > count(s, open) {
                s = &s[..s.len() - close.len_utf8()];
            }
        }
        s = s.trim_matches('\'');
        if s == before {
            return s;
        }
    }
}

/// `&size(N){payload};` → `@<b>{payload}`
#[derive(Default)]
pub struct SizePass;

impl Pass for SizePass {
    fn name(&self) -> &str {
        "size"
    }

    fn description(&self) -> &str {
        "&size(N){..}; directives rendered as bold"
    }

    fn stage(&self) -> Stage {
        Stage::Inner
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        let re = compile(self.name(), SIZE_PATTERN)?;
        replace_all(&re, text, |caps| {
            let payload =
                caps[1].trim_matches(|c: char| matches!(c, '"' | '\'' | '{' | '}' | ';'));
            Ok(bold(payload))
        })
    }
}

/// `''bold''` → `@<b>{bold}`
pub struct BoldPass {
    quote: String,
}

impl BoldPass {
    pub fn new(rules: &DialectRules) -> Self {
        Self {
            quote: rules.emphasis_quote.clone(),
        }
    }
}

impl Default for BoldPass {
    fn default() -> Self {
        Self::new(&DialectRules::default())
    }
}

impl Pass for BoldPass {
    fn name(&self) -> &str {
        "bold"
    }

    fn description(&self) -> &str {
        "Quote-delimited spans rendered as bold"
    }

    fn stage(&self) -> Stage {
        Stage::Inner
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        // An empty delimiter would match between every pair of characters.
        if self.quote.is_empty() {
            return Ok(text.to_string());
        }

        let quote = regex::escape(&self.quote);
        let re = compile(self.name(), &format!("{quote}(.*?){quote}"))?;
        replace_all(&re, text, |caps| Ok(bold(trim_stray(&caps[1]))))
    }
}
