//! Card resolution against the catalog.
//!
//! Turns parsed (name, quantity) entries into a flat multiset of shared
//! card references. An unresolved name contributes zero cards and a
//! diagnostic; only a catalog failure aborts.

use std::sync::Arc;

use log::warn;

use super::diagnostic::Diagnostic;
use super::parser::ParsedList;
use crate::cards::{Card, CardCatalog, LookupMode};
use crate::error::CatalogError;

/// Resolver output: one card reference per physical copy, plus everything
/// that could not be resolved.
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    /// One entry per physical copy, in decklist order.
    pub cards: Vec<Arc<Card>>,
    /// Unresolved-name diagnostics, in decklist order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve every parsed entry against the catalog.
///
/// When `mode` is [`LookupMode::Fuzzy`] and several cards match, the first
/// match in the catalog's (deterministic) order is taken; the resolver
/// never re-sorts. Each resolved name is emitted `quantity` times.
///
/// Lookups for distinct names are independent and read-only; nothing here
/// depends on the order they complete in, only on the catalog's ordering
/// contract.
pub fn resolve(
    parsed: &ParsedList,
    catalog: &dyn CardCatalog,
    mode: LookupMode,
) -> Result<Resolution, CatalogError> {
    let mut resolution = Resolution::default();

    for entry in parsed.entries() {
        let matches = catalog.lookup(&entry.name, mode)?;

        match matches.into_iter().next() {
            Some(card) => {
                for _ in 0..entry.quantity {
                    resolution.cards.push(Arc::clone(&card));
                }
            }
            None => {
                let diagnostic = Diagnostic::UnresolvedName {
                    name: entry.name.clone(),
                };
                warn!("{}", diagnostic);
                resolution.diagnostics.push(diagnostic);
            }
        }
    }

    Ok(resolution)
}
