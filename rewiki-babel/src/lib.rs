//! Wiki markup to Re:VIEW conversion
//!
//!     This crate rewrites documents written in a PukiWiki style markup (`*` headings,
//!     `''bold''`, `&color(..){..};`, `#img(..)`, ...) into Re:VIEW markup (`=` headings and
//!     `@<tag>{..}` wrappers). Both sides are plain text.
//!
//!     This is a pure lib, that is, it powers the rewiki cli but is shell agnostic: no code
//!     here reads files, prints, or looks at env vars. Callers hand it one string and get one
//!     string back, or an error.
//!
//! Architecture
//!
//!     The source dialect has no grammar. Instead of parsing it into a tree we run an ordered
//!     list of passes over the text, each one recognizing a single construct with a regular
//!     expression and rewriting it in place. Everything interesting about the conversion is
//!     in the order of those passes (see ./pipeline.rs): inner constructs first (things that
//!     nest inside other things, like bold inside color), outer constructs last (whole lines
//!     and embed directives).
//!
//!     The working text is threaded through the passes as a value: each pass takes the
//!     current text and returns the next one. A [`Document`] only exposes the result once
//!     every pass succeeded.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── pass.rs                 # Pass trait, Stage, regex helpers
//!     ├── directive.rs            # #name(a,b,c) parameter tokenizer
//!     ├── rules.rs                # DialectRules
//!     ├── passes
//!     │   ├── section.rs          # headings, line endings
//!     │   ├── emphasis.rs         # size, bold
//!     │   ├── decoration.rs       # underline, strikethrough
//!     │   ├── color.rs
//!     │   ├── link.rs             # #link, bare urls
//!     │   ├── media.rs            # youtube, amazon, img
//!     │   └── escape.rs           # tilde continuation, triple quotes
//!     ├── pipeline.rs             # pass ordering
//!     ├── document.rs             # one conversion request
//!     └── transforms.rs           # string in, string out helpers
//!
//! Testing
//!
//!     Each pass is unit tested in isolation next to its implementation. Whole documents are
//!     tested through the pipeline in tests/, where fixture pairs are the reference:
//!
//!     tests
//!     ├── lib.rs
//!     ├── pipeline
//!     │   └── <topic>.rs
//!     └── fixtures
//!         ├── <docname>.wiki
//!         └── <docname>.wiki.re
//!
//!     When pass ordering changes, the fixtures decide what is correct, not the comments.
//!
//! Nesting
//!
//!     Arbitrary nesting is not supported. What does nest (size or bold inside color, urls
//!     inside bold) works because of the pass order and, for color, because the closing
//!     brace run is counted (see ./passes/color.rs).

pub mod directive;
pub mod document;
pub mod error;
pub mod pass;
pub mod passes;
pub mod pipeline;
pub mod rules;
pub mod transforms;

pub use document::Document;
pub use error::ConvertError;
pub use pass::{Pass, Stage};
pub use pipeline::{PassTrace, Pipeline};
pub use rules::DialectRules;
