//! # deckforge
//!
//! A decklist parsing and format-legality engine for Magic-style card
//! games.
//!
//! ## Design Principles
//!
//! 1. **Formats Are Data**: Construction rules live in a per-format table
//!    (`FormatRules`), not a deck type hierarchy. One `validate` entry
//!    point dispatches on the format tag.
//!
//! 2. **Full Diagnostics**: Validation never short-circuits. One call
//!    returns every rule violation at once, and parse/resolve problems
//!    come back as an explicit diagnostics list instead of being logged
//!    away.
//!
//! 3. **Injected Collaborators**: The card catalog and deck store sit
//!    behind narrow traits, so the whole pipeline is a pure function over
//!    (text, catalog) and unit-testable without I/O.
//!
//! ## Pipeline
//!
//! ```text
//! text -> parser -> resolver -> assembler -> rule engine -> serializer -> store
//! ```
//!
//! Each build is synchronous and owns its deck exclusively; the catalog is
//! the only shared input and is read-only. A build that fails validation
//! is returned in full but never persisted.
//!
//! ## Modules
//!
//! - `cards`: card records, colors, legalities, the catalog seam
//! - `decklist`: text parsing and catalog resolution with diagnostics
//! - `deck`: the deck aggregate and assembly
//! - `rules`: per-format rule tables and the legality engine
//! - `serialize`: canonical deck document, lossless round-trip
//! - `store`: deck persistence seam
//! - `pipeline`: the build/save/load workflow
//! - `error`: crate error taxonomy

pub mod cards;
pub mod deck;
pub mod decklist;
pub mod error;
pub mod pipeline;
pub mod rules;
pub mod serialize;
pub mod store;

// Re-export commonly used types
pub use crate::cards::{
    Card, CardCatalog, Color, ColorSet, Legalities, Legality, LookupMode, MemoryCatalog,
};

pub use crate::decklist::{
    parse_decklist, resolve, Diagnostic, ParseEntry, ParsedList, Resolution,
};

pub use crate::deck::{assemble, Deck};

pub use crate::rules::{
    validate, Format, FormatRules, ValidationReport, RULE_BANNED, RULE_COLOR_IDENTITY,
    RULE_COMMANDER, RULE_DECK_SIZE, RULE_SINGLETON,
};

pub use crate::serialize::{deck_to_doc, doc_to_deck, from_json, to_json, DeckDoc};

pub use crate::store::{DeckStore, MemoryStore};

pub use crate::pipeline::{build_and_save, build_deck, load_deck, DeckBuild, DeckRequest};

pub use crate::error::{CatalogError, DeckError, DecodeError, StoreError};
