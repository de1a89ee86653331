//! Pass ordering and execution
//!
//! The wiki dialect has no grammar; what makes a conversion correct is the order in which
//! the passes run. That order is spelled out here, with the ambiguity each position
//! resolves:
//!
//! Inner group ([`INNER_PASSES`]), constructs that may be nested in other constructs:
//!
//! | Pass            | Must run                 | Because                                          |
//! |-----------------|--------------------------|--------------------------------------------------|
//! | `triple-quote`  | first, when enabled      | later passes rely on `''` as a delimiter         |
//! | `size`          | before `bold`, `color`   | its quoted payload would be wrapped twice; color payloads may contain the result |
//! | `link`          | before `bold`            | a URL making up a whole bold span would look brace-enclosed, i.e. converted |
//! | `color`         | before `bold`            | `''` inside a color payload is noise, not bold    |
//! | `bold`          | after the directives     | directive payloads carry quotes of their own     |
//! | `underline`     | before `strikethrough`   | `%%` also matches two thirds of `%%%`            |
//! | `strikethrough` | after `underline`        |                                                  |
//! | `image`         | last inner               | file names are emitted verbatim                  |
//!
//! Outer group ([`OUTER_PASSES`]), whole-line constructs and directives that inner
//! substitutions must not disturb:
//!
//! | Pass                 | Because                                                      |
//! |----------------------|--------------------------------------------------------------|
//! | `section`            | normalizes line endings for the passes after it             |
//! | `youtube`, `amazon`  | their `#name(` markers and raw URLs survive the inner group |
//! | `tilde-continuation` | needs the `\n` endings `section` produced                    |
//!
//! New passes go through [`Pipeline::register`], which keeps every inner pass ahead of
//! every outer pass.

use crate::error::ConvertError;
use crate::pass::{Pass, Stage};
use crate::passes::*;
use crate::rules::DialectRules;
use log::debug;
use serde::Serialize;

/// Canonical inner pass order.
pub const INNER_PASSES: &[&str] = &[
    "size",
    "link",
    "color",
    "bold",
    "underline",
    "strikethrough",
    "image",
];

/// Canonical outer pass order.
pub const OUTER_PASSES: &[&str] = &["section", "youtube", "amazon", "tilde-continuation"];

/// Text after one pass ran, as reported by [`Pipeline::trace`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassTrace {
    pub pass: String,
    pub stage: Stage,
    pub output: String,
}

/// Ordered sequence of rewrite passes
///
/// # Examples
///
/// ```ignore
/// let pipeline = Pipeline::default();
/// let review = pipeline.convert("** Title\n''bold''\n")?;
/// assert_eq!(review, "== Title\n@<b>{bold}\n");
/// ```
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    /// Create a pipeline without any passes
    pub fn new() -> Self {
        Pipeline { passes: Vec::new() }
    }

    /// Build the canonical pipeline for the given dialect
    pub fn with_rules(rules: &DialectRules) -> Self {
        let mut pipeline = Self::new();

        if rules.triple_quote_reduction {
            pipeline.register(TripleQuotePass);
        }
        pipeline.register(SizePass);
        pipeline.register(LinkPass);
        pipeline.register(ColorPass);
        pipeline.register(BoldPass::new(rules));
        pipeline.register(UnderlinePass);
        pipeline.register(StrikethroughPass);
        pipeline.register(ImagePass);

        pipeline.register(SectionPass::new(rules));
        pipeline.register(YoutubePass);
        pipeline.register(AmazonPass);
        pipeline.register(TildeContinuationPass);

        pipeline
    }

    /// Build the canonical pipeline with default dialect rules
    pub fn with_defaults() -> Self {
        Self::with_rules(&DialectRules::default())
    }

    /// Register a pass
    ///
    /// A pass with the name and stage of an already registered pass replaces it in place.
    /// Otherwise any pass of that name is dropped, then inner passes are appended to the
    /// inner group and outer passes to the outer group.
    pub fn register<P: Pass + 'static>(&mut self, pass: P) {
        let pass: Box<dyn Pass> = Box::new(pass);

        if let Some(at) = self.passes.iter().position(|p| p.name() == pass.name()) {
            if self.passes[at].stage() == pass.stage() {
                self.passes[at] = pass;
                return;
            }
            self.passes.remove(at);
        }

        match pass.stage() {
            Stage::Inner => {
                let at = self
                    .passes
                    .iter()
                    .position(|p| p.stage() == Stage::Outer)
                    .unwrap_or(self.passes.len());
                self.passes.insert(at, pass);
            }
            Stage::Outer => self.passes.push(pass),
        }
    }

    /// Get a pass by name
    pub fn get(&self, name: &str) -> Option<&dyn Pass> {
        self.passes
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    /// Check if a pass is registered
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Pass names in execution order
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Passes in execution order
    pub fn passes(&self) -> impl Iterator<Item = &dyn Pass> + '_ {
        self.passes.iter().map(|p| {
            let pass: &dyn Pass = p.as_ref();
            pass
        })
    }

    /// Run every pass over `source`, stopping at the first failure
    pub fn convert(&self, source: &str) -> Result<String, ConvertError> {
        let mut text = source.to_string();
        for pass in &self.passes {
            text = run_pass(pass.as_ref(), &text)?;
        }
        Ok(text)
    }

    /// Like [`Pipeline::convert`], but keeps the text produced by every pass
    pub fn trace(&self, source: &str) -> Result<Vec<PassTrace>, ConvertError> {
        let mut steps: Vec<PassTrace> = Vec::with_capacity(self.passes.len());
        for pass in &self.passes {
            let input = steps.last().map_or(source, |step| step.output.as_str());
            let output = run_pass(pass.as_ref(), input)?;
            steps.push(PassTrace {
                pass: pass.name().to_string(),
                stage: pass.stage(),
                output,
            });
        }
        Ok(steps)
    }
}

fn run_pass(pass: &dyn Pass, text: &str) -> Result<String, ConvertError> {
    debug!("running {} pass '{}'", pass.stage(), pass.name());
    pass.apply(text).inspect_err(|err| {
        debug!("pass '{}' failed: {err}", pass.name());
    })
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}
