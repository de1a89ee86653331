//! Error types for conversion passes

use std::fmt;

/// Errors that can occur while converting a document
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A pass could not compile its matching pattern
    PatternCompilation { pass: String, message: String },
    /// A directive is missing required parameters or markers
    MalformedDirective { directive: String, message: String },
}

impl ConvertError {
    pub fn pattern(pass: &str, err: regex::Error) -> Self {
        ConvertError::PatternCompilation {
            pass: pass.to_string(),
            message: err.to_string(),
        }
    }

    pub fn malformed(directive: &str, message: impl Into<String>) -> Self {
        ConvertError::MalformedDirective {
            directive: directive.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::PatternCompilation { pass, message } => {
                write!(f, "Pattern error in pass '{pass}': {message}")
            }
            ConvertError::MalformedDirective { directive, message } => {
                write!(f, "Malformed #{directive} directive: {message}")
            }
        }
    }
}

impl std::error::Error for ConvertError {}
