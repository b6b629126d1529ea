//! Decklist intake: text parsing and catalog resolution.
//!
//! Both stages are pure over their inputs and recover from bad lines and
//! unknown names, returning diagnostics instead of logging and moving on.
//!
//! ## Key Types
//!
//! - `ParseEntry` / `ParsedList`: parsed (quantity, name) lines
//! - `Resolution`: flat multiset of resolved card references
//! - `Diagnostic`: recovered parse/resolve problems

pub mod diagnostic;
pub mod parser;
pub mod resolver;

pub use diagnostic::Diagnostic;
pub use parser::{parse_decklist, ParseEntry, ParsedList};
pub use resolver::{resolve, Resolution};
