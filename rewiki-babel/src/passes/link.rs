//! Links
//!
//! Two sub-passes, in this order:
//!
//! 1. `#link(..)` directives. With two parameters the first one is an attachment id
//!    (`#link(3251,doc.docx)` → `@<href>{attachment://id/3251}`); otherwise the first
//!    parameter is the target itself.
//! 2. Bare `http(s)://` URLs in running text become `@<href>{url}`.
//!
//! The bare URL sub-pass leaves a URL alone when
//! - it is already enclosed in braces, i.e. it is the payload of a wrapper that an earlier
//!   pass (or the directive sub-pass) emitted,
//! - it points at `amazon.` or `youtube.`, which have dedicated embed passes,
//! - it is the argument of a `#amazon(..)` / `#youtube(..)` directive. Those run in the
//!   outer group and need the raw URL to find the product or video id.
//!
//! `~` is a valid URL character, but a `~` ending the line is the wiki's line join marker
//! and stays outside the wrapper.

use crate::directive::{self, DirectiveArgs};
use crate::error::ConvertError;
use crate::pass::{compile, replace_all, Pass, Stage};

const URL_CHARS: &str = r"[0-9A-Za-z_/:%#$&?()~.=+-]";

/// Domains owned by the media embed passes.
pub const EMBED_DOMAINS: &[&str] = &["amazon.", "youtube."];

fn bare_url_pattern() -> String {
    format!(
        r"(?P<directive>#(?:amazon|youtube)\()?(?P<open>\{{*)(?P<url>https?://{URL_CHARS}+)(?P<close>\}}*)"
    )
}

fn href(target: &str) -> String {
    format!("@<href>{{{target}}}")
}

/// Split a trailing `~` line join marker off a URL that ends its line.
fn split_join_marker<'a>(url: &'a str, close: &str, rest: &str) -> (&'a str, &'static str) {
    let ends_line = rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n");
    match url.strip_suffix('~') {
        Some(stripped) if close.is_empty() && ends_line => (stripped, "~"),
        _ => (url, ""),
    }
}

#[derive(Default)]
pub struct LinkPass;

impl LinkPass {
    fn rewrite_directives(&self, text: &str) -> Result<String, ConvertError> {
        let re = compile(self.name(), &directive::pattern("link"))?;
        replace_all(&re, text, |caps| {
            let args = DirectiveArgs::parse("link", caps.get(1).map_or("", |m| m.as_str()));
            let first = args.first()?;
            if args.len() == 2 {
                Ok(href(&format!("attachment://id/{first}")))
            } else {
                Ok(href(first))
            }
        })
    }

    fn rewrite_bare_urls(&self, text: &str) -> Result<String, ConvertError> {
        let re = compile(self.name(), &bare_url_pattern())?;
        replace_all(&re, text, |caps| {
            let whole = &caps[0];
            let open = &caps["open"];
            let close = &caps["close"];
            let end = caps.get(0).map_or(text.len(), |m| m.end());
            let (url, join_marker) = split_join_marker(&caps["url"], close, &text[end..]);

            if caps.name("directive").is_some() {
                return Ok(whole.to_string());
            }
            if !open.is_empty() && !close.is_empty() {
                return Ok(whole.to_string());
            }
            if EMBED_DOMAINS.iter().any(|domain| url.contains(domain)) {
                return Ok(whole.to_string());
            }

            Ok(format!("{open}{}{join_marker}{close}", href(url)))
        })
    }
}

impl Pass for LinkPass {
    fn name(&self) -> &str {
        "link"
    }

    fn description(&self) -> &str {
        "#link(..) directives, then bare URLs"
    }

    fn stage(&self) -> Stage {
        Stage::Inner
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        let text = self.rewrite_directives(text)?;
        self.rewrite_bare_urls(&text)
    }
}
