//! Recoverable problems collected while reading a decklist.
//!
//! These are not errors: the build keeps going and the caller receives the
//! full list alongside whatever deck could be built, then decides whether a
//! partial result is acceptable.

use serde::{Deserialize, Serialize};

/// One recovered problem from parsing or resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A line did not match the `<amount> <name>` grammar.
    MalformedLine {
        /// 1-based line number in the submitted text.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// A parsed name had no catalog match; the card was omitted.
    UnresolvedName { name: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MalformedLine { line, content } => {
                write!(f, "line {}: invalid line format: {}", line, content)
            }
            Diagnostic::UnresolvedName { name } => {
                write!(f, "card '{}' not found in catalog", name)
            }
        }
    }
}
