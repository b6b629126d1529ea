//! The deck build workflow.
//!
//! One synchronous pipeline per request: parse -> resolve -> assemble ->
//! validate, then optionally serialize and persist. Each build owns its
//! deck exclusively; the only shared input is the read-only catalog, and a
//! failed build leaves nothing behind - the store never sees a partially
//! validated deck.

use log::debug;

use crate::cards::{CardCatalog, LookupMode};
use crate::deck::{assemble, Deck};
use crate::decklist::{parse_decklist, resolve, Diagnostic};
use crate::error::{CatalogError, DeckError};
use crate::rules::{validate, Format, ValidationReport};
use crate::serialize::{from_json, to_json};
use crate::store::DeckStore;

/// Request-level parameters for one deck build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckRequest {
    /// Deck name; may be empty (displays as "Unnamed Deck").
    pub name: String,

    /// Target format.
    pub format: Format,

    /// Requested commander name; ignored by non-commander formats.
    pub commander: Option<String>,
}

impl DeckRequest {
    /// Request for a non-commander format.
    #[must_use]
    pub fn new(name: impl Into<String>, format: Format) -> Self {
        Self {
            name: name.into(),
            format,
            commander: None,
        }
    }

    /// Set the requested commander name.
    #[must_use]
    pub fn with_commander(mut self, commander: impl Into<String>) -> Self {
        self.commander = Some(commander.into());
        self
    }
}

/// Everything a build produces: the deck, every recovered diagnostic, and
/// the full legality report.
#[derive(Clone, Debug)]
pub struct DeckBuild {
    pub deck: Deck,
    /// Malformed-line and unresolved-name diagnostics, in input order.
    pub diagnostics: Vec<Diagnostic>,
    pub report: ValidationReport,
}

/// Build and validate a deck from decklist text.
///
/// Parse and resolve problems are recovered into `diagnostics`; rule
/// violations land in `report`. The only error is the catalog being
/// unavailable, which discards all work for this build.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{Card, MemoryCatalog};
/// use deckforge::pipeline::{build_deck, DeckRequest};
/// use deckforge::rules::Format;
///
/// let mut catalog = MemoryCatalog::new();
/// catalog.register(Card::new("Llanowar Elves"));
///
/// let request = DeckRequest::new("Elves", Format::Pioneer);
/// let build = build_deck("60 Llanowar Elves", &request, &catalog).unwrap();
///
/// assert_eq!(build.deck.len(), 60);
/// assert!(build.report.is_valid());
/// ```
pub fn build_deck(
    text: &str,
    request: &DeckRequest,
    catalog: &dyn CardCatalog,
) -> Result<DeckBuild, CatalogError> {
    let parsed = parse_decklist(text);
    debug!(
        "parsed {} entries, {} malformed lines",
        parsed.entries().len(),
        parsed.diagnostics.len()
    );

    let resolution = resolve(&parsed, catalog, LookupMode::Strict)?;
    debug!(
        "resolved {} cards, {} unresolved names",
        resolution.cards.len(),
        resolution.diagnostics.len()
    );

    let mut diagnostics = parsed.diagnostics;
    diagnostics.extend(resolution.diagnostics);

    let deck = assemble(
        request.name.clone(),
        request.format,
        request.commander.as_deref(),
        resolution.cards,
    );

    let report = validate(&deck);
    debug!("validated '{}': {}", deck.display_name(), report);

    Ok(DeckBuild {
        deck,
        diagnostics,
        report,
    })
}

/// Build, validate, and persist a deck.
///
/// Persistence is gated on a clean report: any rule failure returns
/// [`DeckError::Validation`] carrying the full failure map, and nothing is
/// stored.
pub fn build_and_save(
    text: &str,
    request: &DeckRequest,
    catalog: &dyn CardCatalog,
    store: &mut dyn DeckStore,
) -> Result<DeckBuild, DeckError> {
    let build = build_deck(text, request, catalog)?;

    if !build.report.is_valid() {
        return Err(DeckError::Validation(build.report));
    }

    let document = to_json(&build.deck)?;
    store.save(&build.deck.name, &document)?;
    debug!("saved '{}'", build.deck.display_name());

    Ok(build)
}

/// Load a previously saved deck by exact name.
pub fn load_deck(name: &str, store: &dyn DeckStore) -> Result<Deck, DeckError> {
    let document = store.load(name)?;
    Ok(from_json(&document)?)
}
