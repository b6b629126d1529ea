//! Deck persistence seam.
//!
//! The store holds serialized deck documents keyed by deck name; it never
//! sees a live [`Deck`](crate::deck::Deck). Real deployments back this
//! with a database; [`MemoryStore`] backs tests and small tools.

use rustc_hash::FxHashMap;

use crate::error::StoreError;

/// Deck-store collaborator: serialized deck in, serialized deck out.
pub trait DeckStore {
    /// Persist a serialized deck under `name`, replacing any previous one.
    fn save(&mut self, name: &str, document: &str) -> Result<(), StoreError>;

    /// Fetch the serialized deck stored under exactly `name`.
    ///
    /// Fails with [`StoreError::NotFound`] when nothing is stored there.
    fn load(&self, name: &str) -> Result<String, StoreError>;
}

/// In-memory deck store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    decks: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored decks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Names of every stored deck, unordered.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.decks.keys().map(String::as_str)
    }
}

impl DeckStore for MemoryStore {
    fn save(&mut self, name: &str, document: &str) -> Result<(), StoreError> {
        self.decks.insert(name.to_string(), document.to_string());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<String, StoreError> {
        self.decks
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}
