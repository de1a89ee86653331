//! Media embeds
//!
//! Re:VIEW has no embed syntax, so embeds become `@<href>` wrappers with custom URL
//! schemes that the publishing side resolves:
//!
//! | Wiki directive                    | Output                                      |
//! |-----------------------------------|---------------------------------------------|
//! | `#youtube(..watch?v=ID)`          | `@<href>{youtube://video/ID}`               |
//! | `#youtube(..youtube.com/v/ID)`    | `@<href>{youtube://video/ID}`               |
//! | `#amazon(../dp/ID)`               | `@<href>{amazon://dp/ID}`                   |
//! | `#img(ID,FILE,WIDTH)`             | `@<href>{image://attachment/ID/FILE?width=WIDTH}` |
//! | `#img(ID,FILE)`                   | `@<href>{image://attachment/ID/FILE}`       |
//!
//! A directive that lacks its required parameters or id marker fails the whole
//! conversion.

use crate::directive::{self, DirectiveArgs};
use crate::error::ConvertError;
use crate::pass::{compile, replace_all, Pass, Stage};
use log::trace;

/// Markers preceding a video id, tried in order.
const YOUTUBE_ID_MARKERS: &[&str] = &["watch?v=", "youtube.com/v/"];

const AMAZON_ID_MARKER: &str = "/dp/";

fn href(target: &str) -> String {
    format!("@<href>{{{target}}}")
}

fn rewrite_directive<F>(
    pass: &str,
    name: &'static str,
    text: &str,
    mut rewrite: F,
) -> Result<String, ConvertError>
where
    F: FnMut(DirectiveArgs<'_>) -> Result<String, ConvertError>,
{
    let re = compile(pass, &directive::pattern(name))?;
    replace_all(&re, text, |caps| {
        let raw = caps.get(1).map_or("", |m| m.as_str());
        let out = rewrite(DirectiveArgs::parse(name, raw))?;
        trace!("#{name}({raw}) -> {out}");
        Ok(out)
    })
}

#[derive(Default)]
pub struct YoutubePass;

impl Pass for YoutubePass {
    fn name(&self) -> &str {
        "youtube"
    }

    fn description(&self) -> &str {
        "#youtube(url) video embeds"
    }

    fn stage(&self) -> Stage {
        Stage::Outer
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        rewrite_directive(self.name(), "youtube", text, |args| {
            let url = args.first()?;
            let id = YOUTUBE_ID_MARKERS
                .iter()
                .find_map(|marker| url.find(*marker).map(|at| &url[at + marker.len()..]))
                .filter(|id| !id.is_empty())
                .ok_or_else(|| {
                    ConvertError::malformed("youtube", format!("no video id in '{url}'"))
                })?;
            Ok(href(&format!("youtube://video/{id}")))
        })
    }
}

#[derive(Default)]
pub struct AmazonPass;

impl Pass for AmazonPass {
    fn name(&self) -> &str {
        "amazon"
    }

    fn description(&self) -> &str {
        "#amazon(url) product embeds"
    }

    fn stage(&self) -> Stage {
        Stage::Outer
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        rewrite_directive(self.name(), "amazon", text, |args| {
            let url = args.first()?;
            let id = url
                .find(AMAZON_ID_MARKER)
                .map(|at| &url[at + AMAZON_ID_MARKER.len()..])
                .map(|rest| rest.split(['/', '?']).next().unwrap_or(rest))
                .filter(|id| !id.is_empty())
                .ok_or_else(|| {
                    ConvertError::malformed("amazon", format!("no product id in '{url}'"))
                })?;
            Ok(href(&format!("amazon://dp/{id}")))
        })
    }
}

#[derive(Default)]
pub struct ImagePass;

impl Pass for ImagePass {
    fn name(&self) -> &str {
        "image"
    }

    fn description(&self) -> &str {
        "#img(id,file[,width]) attachments"
    }

    fn stage(&self) -> Stage {
        Stage::Inner
    }

    fn apply(&self, text: &str) -> Result<String, ConvertError> {
        rewrite_directive(self.name(), "img", text, |args| {
            args.require(2)?;
            let id = args.get(0).unwrap_or_default();
            let file = args.get(1).unwrap_or_default();
            let target = match args.get(2) {
                Some(width) => format!("image://attachment/{id}/{file}?width={width}"),
                None => format!("image://attachment/{id}/{file}"),
            };
            Ok(href(&target))
        })
    }
}
