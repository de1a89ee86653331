//! A single conversion request
//!
//! A [`Document`] pairs the wiki source with its converted text. The converted text only
//! exists once every pass succeeded; a failed conversion leaves nothing behind, so callers
//! can never observe a half-converted buffer.

use crate::error::ConvertError;
use crate::pipeline::Pipeline;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    source: String,
    converted: Option<String>,
}

impl Document {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            converted: None,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether [`Document::convert`] has completed successfully
    pub fn is_done(&self) -> bool {
        self.converted.is_some()
    }

    /// Run `pipeline` over the source.
    ///
    /// Once a conversion has succeeded, further calls return `Ok(())` without running any
    /// pass again.
    pub fn convert(&mut self, pipeline: &Pipeline) -> Result<(), ConvertError> {
        if self.converted.is_some() {
            return Ok(());
        }
        self.converted = Some(pipeline.convert(&self.source)?);
        Ok(())
    }

    /// The converted text, or `None` until a conversion succeeded
    pub fn result(&self) -> Option<&str> {
        self.converted.as_deref()
    }

    pub fn into_result(self) -> Option<String> {
        self.converted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{Pass, Stage};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingPass(Arc<AtomicUsize>);
    impl Pass for CountingPass {
        fn name(&self) -> &str {
            "counting"
        }
        fn stage(&self) -> Stage {
            Stage::Inner
        }
        fn apply(&self, text: &str) -> Result<String, ConvertError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(format!("{text}!"))
        }
    }

    #[test]
    fn test_result_is_absent_before_conversion() {
        let doc = Document::new("''x''");
        assert!(!doc.is_done());
        assert_eq!(doc.result(), None);
    }

    #[test]
    fn test_convert_sets_result() {
        let mut doc = Document::new("''x''");
        doc.convert(&Pipeline::default()).unwrap();
        assert!(doc.is_done());
        assert_eq!(doc.result(), Some("@<b>{x}\n"));
        assert_eq!(doc.source(), "''x''");
    }

    #[test]
    fn test_second_convert_runs_no_pass() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut pipeline = Pipeline::new();
        pipeline.register(CountingPass(calls.clone()));

        let mut doc = Document::new("a");
        doc.convert(&pipeline).unwrap();
        doc.convert(&pipeline).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(doc.result(), Some("a!"));
    }

    #[test]
    fn test_failed_conversion_exposes_nothing() {
        let mut doc = Document::new("before\n#img(onlyone)\nafter");
        let err = doc.convert(&Pipeline::default()).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedDirective { .. }));
        assert!(!doc.is_done());
        assert_eq!(doc.into_result(), None);
    }
}
