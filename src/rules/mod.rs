//! Format rules and the legality engine.
//!
//! Formats are selected by tag and configured as data: `Format::rules()`
//! is a table, and `validate` runs whichever checks the table switched on.
//! The result is a full-diagnostics report, never a single bool.
//!
//! ## Key Types
//!
//! - `Format`: format tag (commander, pioneer)
//! - `FormatRules`: static per-format rule configuration
//! - `ValidationReport`: rule name -> failure message
//! - `validate`: the one entry point for legality checking

pub mod engine;
pub mod format;

pub use engine::{
    validate, ValidationReport, RULE_BANNED, RULE_COLOR_IDENTITY, RULE_COMMANDER,
    RULE_DECK_SIZE, RULE_SINGLETON,
};
pub use format::{is_singleton_exempt, Format, FormatRules, SINGLETON_EXEMPT};
