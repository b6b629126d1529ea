//! The deck aggregate and its assembly.
//!
//! A `Deck` is built once per request from resolved catalog cards and is
//! owned by that request: building one never mutates the catalog or any
//! other deck. Cards are shared references into the catalog, one entry per
//! physical copy, in decklist order.
//!
//! The size and commander invariants are *not* enforced at construction -
//! the rule engine checks them so that every violation can be reported at
//! once.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

use crate::cards::Card;
use crate::rules::{Format, FormatRules};

/// A constructed deck with the rule snapshot it was validated under.
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    /// User-supplied deck name; may be empty.
    pub name: String,

    /// Format tag.
    pub format: Format,

    /// One entry per physical copy, in decklist order.
    pub cards: Vec<Arc<Card>>,

    /// Designated commander; present only for commander-style formats and
    /// only when the requested name resolved.
    pub commander: Option<Arc<Card>>,

    /// The rule configuration this deck is validated against.
    pub rules: FormatRules,
}

impl Deck {
    /// Deck name for display; an empty name reads "Unnamed Deck".
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed Deck"
        } else {
            &self.name
        }
    }

    /// Number of physical cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Every card name, one per physical copy, in deck order.
    pub fn card_names(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.name.as_str())
    }

    /// Card names with their copy counts.
    #[must_use]
    pub fn names_and_counts(&self) -> FxHashMap<String, u32> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.name.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Converted-mana-cost histogram for curve displays.
    ///
    /// Zero-cost entries (lands, mostly) are excluded so they do not dwarf
    /// the curve.
    #[must_use]
    pub fn cmc_histogram(&self) -> BTreeMap<u32, u32> {
        let mut histogram = BTreeMap::new();
        for card in &self.cards {
            if card.cmc != 0 {
                *histogram.entry(card.cmc).or_insert(0) += 1;
            }
        }
        histogram
    }

    /// Copy counts grouped by primary card type.
    #[must_use]
    pub fn card_type_histogram(&self) -> BTreeMap<String, u32> {
        let mut histogram = BTreeMap::new();
        for card in &self.cards {
            *histogram.entry(card.card_type.clone()).or_insert(0) += 1;
        }
        histogram
    }

    /// Shuffle the deck deterministically from a seed.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Draw the top card, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Arc<Card>> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Assemble a [`Deck`] from resolved cards and request metadata.
///
/// Commander identification runs only for formats whose rules require one:
/// the first resolved card whose name equals `commander_name` under
/// *case-sensitive* comparison is designated (see DESIGN.md on the
/// case-sensitivity decision). When no card matches, the deck is still
/// assembled with `commander: None` - failing here would hide the size and
/// singleton diagnostics the rule engine can still report.
#[must_use]
pub fn assemble(
    name: impl Into<String>,
    format: Format,
    commander_name: Option<&str>,
    cards: Vec<Arc<Card>>,
) -> Deck {
    let rules = format.rules();

    let commander = if rules.commander {
        commander_name.and_then(|wanted| {
            cards
                .iter()
                .find(|card| card.name == wanted)
                .map(Arc::clone)
        })
    } else {
        None
    };

    Deck {
        name: name.into(),
        format,
        cards,
        commander,
        rules,
    }
}
