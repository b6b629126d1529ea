//! Deck serialization - the canonical persisted representation.
//!
//! A deck serializes to one nested document:
//!
//! ```json
//! {
//!   "name": "...",
//!   "format": "commander",
//!   "formatRules": { ... },
//!   "commander": { <card-dict> } | null,
//!   "cards": [ { <card-dict> }, ... ]
//! }
//! ```
//!
//! where a card-dict enumerates every [`Card`] field. The same document is
//! used for upload validation, save, and load, and round-trips losslessly:
//! `doc_to_deck(deck_to_doc(&d)) == d` for every field.
//!
//! Decoding is strict: a commander or card entry that is not a well-formed
//! card-dict fails the whole document with [`DecodeError`] - no
//! partially-populated card is ever constructed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::error::DecodeError;
use crate::rules::{Format, FormatRules};

/// Canonical deck document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeckDoc {
    pub name: String,
    pub format: Format,
    #[serde(rename = "formatRules")]
    pub format_rules: FormatRules,
    pub commander: Option<Card>,
    pub cards: Vec<Card>,
}

/// Project a deck onto its canonical document.
#[must_use]
pub fn deck_to_doc(deck: &Deck) -> DeckDoc {
    DeckDoc {
        name: deck.name.clone(),
        format: deck.format,
        format_rules: deck.rules.clone(),
        commander: deck.commander.as_deref().cloned(),
        cards: deck.cards.iter().map(|c| Card::clone(c)).collect(),
    }
}

/// Rebuild a deck from its canonical document.
///
/// The stored `formatRules` snapshot is kept verbatim - the deck is
/// revalidated against the rules it was built under, not whatever the
/// current table says.
#[must_use]
pub fn doc_to_deck(doc: DeckDoc) -> Deck {
    Deck {
        name: doc.name,
        format: doc.format,
        cards: doc.cards.into_iter().map(Arc::new).collect(),
        commander: doc.commander.map(Arc::new),
        rules: doc.format_rules,
    }
}

/// Serialize a deck to canonical JSON.
pub fn to_json(deck: &Deck) -> Result<String, DecodeError> {
    Ok(serde_json::to_string_pretty(&deck_to_doc(deck))?)
}

/// Deserialize a deck from canonical JSON.
///
/// Fails with [`DecodeError`] on any structural problem; nothing partial
/// is returned.
pub fn from_json(json: &str) -> Result<Deck, DecodeError> {
    let doc: DeckDoc = serde_json::from_str(json)?;
    Ok(doc_to_deck(doc))
}
