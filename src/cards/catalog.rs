//! Card catalog lookup.
//!
//! The catalog (name -> canonical attributes) is an external service; the
//! engine consumes it through the narrow [`CardCatalog`] trait so parsing
//! and resolution stay pure functions over (text, catalog) and are
//! unit-testable without I/O.
//!
//! [`MemoryCatalog`] is the in-process implementation used by tests and by
//! anything that already holds the card data.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::card::Card;
use crate::error::CatalogError;

/// How a name is matched against the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupMode {
    /// Case-insensitive exact match.
    Strict,
    /// Case-insensitive substring match.
    Fuzzy,
}

/// Catalog collaborator.
///
/// ## Ordering Contract
///
/// `lookup` must return matches in an order that is deterministic across
/// calls - callers take the first fuzzy match as *the* match, and
/// parallelized resolution must not change which card that is.
/// Implementations are expected to order matches lexicographically by name;
/// the resolver never re-sorts.
pub trait CardCatalog {
    /// Look up cards by name.
    ///
    /// An empty result is a normal "no match"; `Err` means the catalog
    /// itself could not be queried and the build must be abandoned.
    fn lookup(&self, name: &str, mode: LookupMode) -> Result<Vec<Arc<Card>>, CatalogError>;
}

/// In-memory catalog with deterministic lookup order.
///
/// Cards are kept sorted lexicographically by lowercased name, so fuzzy
/// matches always come back in the same order.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{Card, LookupMode, MemoryCatalog, CardCatalog};
///
/// let mut catalog = MemoryCatalog::new();
/// catalog.register(Card::new("Sol Ring"));
/// catalog.register(Card::new("Solemn Simulacrum"));
///
/// let strict = catalog.lookup("sol ring", LookupMode::Strict).unwrap();
/// assert_eq!(strict.len(), 1);
///
/// let fuzzy = catalog.lookup("sol", LookupMode::Fuzzy).unwrap();
/// assert_eq!(fuzzy.len(), 2);
/// assert_eq!(fuzzy[0].name, "Sol Ring");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    /// Sorted by lowercased name.
    cards: Vec<Arc<Card>>,
    /// Lowercased name -> index into `cards`.
    by_name: FxHashMap<String, usize>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same name (case-insensitive) is already
    /// registered: card names are the catalog's unique key.
    pub fn register(&mut self, card: Card) {
        let key = card.name.to_lowercase();
        if self.by_name.contains_key(&key) {
            panic!("Card named '{}' already registered", card.name);
        }

        let pos = self
            .cards
            .partition_point(|c| c.name.to_lowercase() < key);
        self.cards.insert(pos, Arc::new(card));

        // Reindex everything at or after the insertion point.
        for (i, c) in self.cards.iter().enumerate().skip(pos) {
            self.by_name.insert(c.name.to_lowercase(), i);
        }
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }
}

impl CardCatalog for MemoryCatalog {
    fn lookup(&self, name: &str, mode: LookupMode) -> Result<Vec<Arc<Card>>, CatalogError> {
        let needle = name.trim().to_lowercase();

        let matches = match mode {
            LookupMode::Strict => self
                .by_name
                .get(&needle)
                .map(|&i| vec![Arc::clone(&self.cards[i])])
                .unwrap_or_default(),
            LookupMode::Fuzzy => self
                .cards
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .map(Arc::clone)
                .collect(),
        };

        Ok(matches)
    }
}
