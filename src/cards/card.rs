//! Card records - immutable catalog data.
//!
//! A `Card` is the canonical attribute set for one card name, owned by the
//! catalog. Decks hold shared references to catalog cards; nothing in this
//! crate ever mutates one after registration.
//!
//! Field serde names follow the canonical card-dict used by the persisted
//! deck document (`manacost`, `colorIdentity`, `oracleText`, ...), so a
//! `Card` round-trips through the serializer byte-for-byte.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorSet};

/// Legality of a card in one format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Legality {
    Legal,
    Banned,
    Restricted,
    NotLegal,
}

/// Per-format legality map, keyed by the format's legality key
/// (e.g. "commander", "pioneer").
///
/// `BTreeMap` keeps the serialized form deterministic.
pub type Legalities = BTreeMap<String, Legality>;

/// Canonical card record from the catalog.
///
/// Invariant (guaranteed by catalog data, not re-derived here):
/// `color_identity` is a superset of `colors`.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{Card, Color, Legality};
///
/// let bolt = Card::new("Lightning Bolt")
///     .with_mana_cost("{R}")
///     .with_cmc(1)
///     .with_colors([Color::Red])
///     .with_color_identity([Color::Red])
///     .with_type_line("Instant")
///     .with_card_type("Instant")
///     .with_legality("commander", Legality::Legal);
///
/// assert!(bolt.is_legal_in("commander"));
/// assert!(!bolt.is_legal_in("oldschool"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    /// Unique card name; the catalog lookup key.
    pub name: String,

    /// Printed mana cost symbols, e.g. "{1}{U}{U}". Absent on lands.
    #[serde(rename = "manacost")]
    pub mana_cost: Option<String>,

    /// Converted mana cost.
    pub cmc: u32,

    /// Colors of the card's cost.
    pub colors: ColorSet,

    /// Color identity: cost plus rules-text mana symbols.
    #[serde(rename = "colorIdentity")]
    pub color_identity: ColorSet,

    /// Printed power; creature cards only. Kept as a string because
    /// printed values include "*".
    pub power: Option<String>,

    /// Printed toughness; creature cards only.
    pub toughness: Option<String>,

    /// Rules text.
    #[serde(rename = "oracleText")]
    pub oracle_text: Option<String>,

    /// Planeswalker loyalty.
    pub loyalty: Option<String>,

    /// Full type line, e.g. "Legendary Creature - Vampire".
    #[serde(rename = "typeline")]
    pub type_line: String,

    /// Primary card type, e.g. "Creature".
    #[serde(rename = "cardType")]
    pub card_type: String,

    /// Faces of a multi-face card; raw catalog JSON, passed through.
    #[serde(rename = "cardFaces")]
    pub card_faces: Option<serde_json::Value>,

    /// Related parts (tokens, meld pairs); raw catalog JSON.
    #[serde(rename = "allParts")]
    pub all_parts: Option<serde_json::Value>,

    /// Print layout, e.g. "normal", "transform".
    pub layout: Option<String>,

    /// Illustration credit.
    pub artist: Option<String>,

    /// Catalog identifier of the sourced printing.
    #[serde(rename = "scryfallid")]
    pub scryfall_id: Option<String>,

    /// Legality per format key.
    pub legalities: Legalities,

    /// Card image reference.
    pub image: Option<String>,
}

impl Card {
    /// Create a card with the given name and everything else empty.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mana_cost: None,
            cmc: 0,
            colors: ColorSet::new(),
            color_identity: ColorSet::new(),
            power: None,
            toughness: None,
            oracle_text: None,
            loyalty: None,
            type_line: String::new(),
            card_type: String::new(),
            card_faces: None,
            all_parts: None,
            layout: None,
            artist: None,
            scryfall_id: None,
            legalities: Legalities::new(),
            image: None,
        }
    }

    /// Set the mana cost (builder pattern).
    #[must_use]
    pub fn with_mana_cost(mut self, cost: impl Into<String>) -> Self {
        self.mana_cost = Some(cost.into());
        self
    }

    /// Set the converted mana cost.
    #[must_use]
    pub fn with_cmc(mut self, cmc: u32) -> Self {
        self.cmc = cmc;
        self
    }

    /// Set the cost colors.
    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Set the color identity.
    #[must_use]
    pub fn with_color_identity(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.color_identity = colors.into_iter().collect();
        self
    }

    /// Set power and toughness.
    #[must_use]
    pub fn with_stats(mut self, power: impl Into<String>, toughness: impl Into<String>) -> Self {
        self.power = Some(power.into());
        self.toughness = Some(toughness.into());
        self
    }

    /// Set the rules text.
    #[must_use]
    pub fn with_oracle_text(mut self, text: impl Into<String>) -> Self {
        self.oracle_text = Some(text.into());
        self
    }

    /// Set the full type line.
    #[must_use]
    pub fn with_type_line(mut self, line: impl Into<String>) -> Self {
        self.type_line = line.into();
        self
    }

    /// Set the primary card type.
    #[must_use]
    pub fn with_card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self
    }

    /// Record legality under one format key.
    #[must_use]
    pub fn with_legality(mut self, key: impl Into<String>, legality: Legality) -> Self {
        self.legalities.insert(key.into(), legality);
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Legality under the given format key, if the catalog recorded one.
    #[must_use]
    pub fn legality_in(&self, key: &str) -> Option<Legality> {
        self.legalities.get(key).copied()
    }

    /// True only when the catalog marks the card `legal` under `key`.
    ///
    /// Banned, restricted, not_legal, and missing entries all fail.
    #[must_use]
    pub fn is_legal_in(&self, key: &str) -> bool {
        self.legality_in(key) == Some(Legality::Legal)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
