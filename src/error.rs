//! Crate error taxonomy.
//!
//! Parse- and resolve-level problems are not errors: they are recovered
//! locally and returned as [`Diagnostic`](crate::decklist::Diagnostic)
//! values alongside whatever deck could be built. The types here cover the
//! failures that abort a build or a decode outright.

use thiserror::Error;

use crate::rules::ValidationReport;

/// Catalog collaborator failure.
///
/// Lookups that simply find nothing are not errors (they become
/// `UnresolvedName` diagnostics); this covers the catalog itself being
/// unreachable or broken.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog could not be queried at all.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Deck-store collaborator failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No deck is stored under the requested name.
    #[error("no deck named '{0}'")]
    NotFound(String),

    /// The store could not be reached.
    #[error("deck store unavailable: {0}")]
    Unavailable(String),
}

/// Structural failure while decoding a serialized deck document.
///
/// Decoding is all-or-nothing: a malformed card or commander entry fails
/// the whole document and no partially-populated value is produced.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document is not well-formed against the canonical deck shape.
    #[error("malformed deck document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for the deck build/persist workflow.
#[derive(Debug, Error)]
pub enum DeckError {
    /// External catalog failure; the build is discarded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The deck failed format validation; persistence is blocked.
    ///
    /// Carries the full failure map so the caller sees every violation.
    #[error("deck failed format validation: {0}")]
    Validation(ValidationReport),

    /// Serialized deck document could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Deck store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
