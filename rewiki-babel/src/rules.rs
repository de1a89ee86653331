use serde::{Deserialize, Serialize};

/// Tunable surface of the source and target dialects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialectRules {
    /// Heading marker of the wiki dialect (`*` in `** Title`)
    pub source_heading_marker: char,

    /// Heading marker emitted for Re:VIEW (`=` in `== Title`)
    pub target_heading_marker: char,

    /// Delimiter around bold spans (`''bold''`)
    pub emphasis_quote: String,

    /// Whether `'''` runs are collapsed to `'` before the inner passes
    pub triple_quote_reduction: bool,
}

impl Default for DialectRules {
    fn default() -> Self {
        Self {
            source_heading_marker: '*',
            target_heading_marker: '=',
            emphasis_quote: "''".to_string(),
            triple_quote_reduction: false,
        }
    }
}
