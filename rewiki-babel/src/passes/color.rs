//! Text color
//!
//! `&color(<spec>){payload};` becomes `@<color:<spec>>{payload}`, where `<spec>` is a
//! `#rrggbb` code or one of [`NAMED_COLORS`]. Named colors are emitted in the spelling
//! the source used.
//!
//! # Nesting
//!
//! By the time this pass runs, the size pass may already have produced a wrapper inside
//! the payload: `&color(#0000ff){@<b>{hello}};`. The payload match stops at the first
//! `}`, which belongs to the inner wrapper, so the closing run (`}};` here) is captured
//! as a whole and its braces are counted. The output closes with exactly that many
//! braces: one for the inner wrapper, one for the color wrapper. Semicolons in the run
//! are wiki statement terminators and are dropped.

use crate::error::ConvertError;
use crate::pass::{compile, replace_all, Pass, Stage};

/// Color names recognized by the named sub-pass.
pub const NAMED_COLORS: &[&str] = &[
    "Fuchsia", "fuchsia", "Lime", "lime", "Teal", "teal", "Navy", "navy", "red", "Red", "blue",
    "Blue", "green", "Green",
];

const HEX_SPEC: &str = "#[0-9a-fA-F]{6}";

fn color_pattern(spec: &str) -> String {
    format!(r"&color\((?P<spec>{spec})\)\{{(?P<payload>.*?)(?P<close>\}}[}};]*)")
}

/// Runs the hex sub-pass, then the named one.
#[derive(Default)]
pub struct ColorPass;

impl ColorPass {
    fn rewrite(&self, spec: &str, text: &str) -> Result<String, ConvertError> {
        let re = compile(self.name(), &color_pattern(spec))?;
        replace_all(&re, text, |caps| {
            let payload =
                caps["payload"].trim_matches(|c: char| matches!(c, '{' | '}' | '\'' | ';'));
            let braces = caps["close"].matches('}').count();
            Ok(format!(
                "@<color:{}>{{{payload}{}",
                &caps["spec"],
                "}".repeat(braces)
            ))
        })
    }
}

impl Pass for ColorPass {
    fn name(&self) -> &str {
        "color"
    }

    fn description(&self) -> &str {
        "&color(..){..}; by hex code, then by name"
    }

    fn stage(&self) -> Stage {
        Stage::Inner
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        let text = self.rewrite(HEX_SPEC, text)?;
        self.rewrite(&NAMED_COLORS.join("|"), &text)
    }
}
