//! Card system: records, colors, and the catalog seam.
//!
//! ## Key Types
//!
//! - `Color` / `ColorSet`: mana colors and subset containment
//! - `Card`: immutable canonical card record
//! - `Legality`: per-format legality status
//! - `CardCatalog`: injected lookup capability (strict/fuzzy)
//! - `MemoryCatalog`: in-process catalog with deterministic ordering

pub mod card;
pub mod catalog;
pub mod color;

pub use card::{Card, Legalities, Legality};
pub use catalog::{CardCatalog, LookupMode, MemoryCatalog};
pub use color::{Color, ColorSet};
