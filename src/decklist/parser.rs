//! Decklist text parsing.
//!
//! Grammar per line: one or more digits (the amount), an optional `x` or
//! `,` separator, at least one whitespace character, then the rest of the
//! line trimmed as the card name. `4 Lightning Bolt`, `4x Lightning Bolt`
//! and `4, Lightning Bolt` all parse to (4, "Lightning Bolt").
//!
//! Lines that do not match become [`Diagnostic::MalformedLine`] and parsing
//! continues - the caller gets every parseable entry plus every problem in
//! one pass.

use log::warn;
use rustc_hash::FxHashMap;

use super::diagnostic::Diagnostic;

/// One parsed decklist line: a positive quantity and the raw card name.
///
/// Transient - produced by the parser, consumed by the resolver, never
/// persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseEntry {
    pub quantity: u32,
    pub name: String,
}

/// The outcome of parsing a decklist: ordered name -> quantity entries plus
/// everything that failed to parse.
#[derive(Clone, Debug, Default)]
pub struct ParsedList {
    entries: Vec<ParseEntry>,
    /// Name -> index into `entries`, for duplicate-line handling.
    index: FxHashMap<String, usize>,
    /// Malformed-line diagnostics, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedList {
    /// Record a parsed entry.
    ///
    /// A later line for a name that already appeared *overwrites* the
    /// earlier quantity rather than summing with it, and the entry keeps
    /// its original position. This replicates the upstream contract for
    /// duplicate decklist lines (see DESIGN.md).
    fn insert(&mut self, name: String, quantity: u32) {
        match self.index.get(&name) {
            Some(&i) => self.entries[i].quantity = quantity,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(ParseEntry { quantity, name });
            }
        }
    }

    /// Parsed entries in first-occurrence order.
    #[must_use]
    pub fn entries(&self) -> &[ParseEntry] {
        &self.entries
    }

    /// Total number of physical cards requested.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// True when nothing parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a decklist line into (quantity, name).
///
/// Returns `None` when the line does not match the grammar.
fn parse_line(line: &str) -> Option<(u32, String)> {
    let line = line.trim();

    let digits_end = line.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let quantity: u32 = line[..digits_end].parse().ok()?;
    if quantity == 0 {
        return None;
    }

    let mut rest = &line[digits_end..];
    if let Some(stripped) = rest.strip_prefix(['x', 'X', ',']) {
        rest = stripped;
    }

    // The separator between amount and name must be whitespace.
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let name = rest.trim();
    if name.is_empty() {
        return None;
    }

    Some((quantity, name.to_string()))
}

/// Parse a whole decklist.
///
/// Whitespace-only lines are skipped. Every other non-matching line is
/// collected as a [`Diagnostic::MalformedLine`]; parsing never aborts.
///
/// ## Example
///
/// ```
/// use deckforge::decklist::parse_decklist;
///
/// let parsed = parse_decklist("4 Lightning Bolt\n1x Sol Ring\nnot a line");
///
/// assert_eq!(parsed.entries().len(), 2);
/// assert_eq!(parsed.entries()[0].quantity, 4);
/// assert_eq!(parsed.entries()[0].name, "Lightning Bolt");
/// assert_eq!(parsed.diagnostics.len(), 1);
/// ```
#[must_use]
pub fn parse_decklist(text: &str) -> ParsedList {
    let mut parsed = ParsedList::default();

    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }

        match parse_line(raw) {
            Some((quantity, name)) => parsed.insert(name, quantity),
            None => {
                let diagnostic = Diagnostic::MalformedLine {
                    line: idx + 1,
                    content: raw.trim().to_string(),
                };
                warn!("{}", diagnostic);
                parsed.diagnostics.push(diagnostic);
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        let parsed = parse_decklist("4 Lightning Bolt");
        assert_eq!(
            parsed.entries(),
            &[ParseEntry {
                quantity: 4,
                name: "Lightning Bolt".to_string()
            }]
        );
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_separator_variants() {
        for line in ["3x Sol Ring", "3X Sol Ring", "3, Sol Ring", "3  Sol Ring"] {
            let parsed = parse_decklist(line);
            assert_eq!(parsed.entries().len(), 1, "line: {line:?}");
            assert_eq!(parsed.entries()[0].quantity, 3);
            assert_eq!(parsed.entries()[0].name, "Sol Ring");
        }
    }

    #[test]
    fn test_missing_quantity_is_malformed() {
        // No default quantity of 1.
        let parsed = parse_decklist("Lightning Bolt");
        assert!(parsed.is_empty());
        assert_eq!(
            parsed.diagnostics,
            vec![Diagnostic::MalformedLine {
                line: 1,
                content: "Lightning Bolt".to_string()
            }]
        );
    }

    #[test]
    fn test_zero_quantity_is_malformed() {
        let parsed = parse_decklist("0 Sol Ring");
        assert!(parsed.is_empty());
        assert_eq!(parsed.diagnostics.len(), 1);
    }

    #[test]
    fn test_separator_must_be_whitespace() {
        // "4xLightning Bolt" has no whitespace after the separator.
        let parsed = parse_decklist("4xLightning Bolt");
        assert!(parsed.is_empty());
        assert_eq!(parsed.diagnostics.len(), 1);
    }

    #[test]
    fn test_bad_lines_do_not_stop_parsing() {
        let parsed = parse_decklist("4 Lightning Bolt\n???\n2 Shock");
        assert_eq!(parsed.entries().len(), 2);
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(
            parsed.diagnostics[0],
            Diagnostic::MalformedLine {
                line: 2,
                content: "???".to_string()
            }
        );
    }

    #[test]
    fn test_blank_lines_skipped() {
        let parsed = parse_decklist("4 Lightning Bolt\n\n   \n2 Shock\n");
        assert_eq!(parsed.entries().len(), 2);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_name_overwrites_quantity() {
        let parsed = parse_decklist("4 Lightning Bolt\n2 Shock\n1 Lightning Bolt");

        // Later line wins; entry keeps its original position.
        assert_eq!(
            parsed.entries(),
            &[
                ParseEntry {
                    quantity: 1,
                    name: "Lightning Bolt".to_string()
                },
                ParseEntry {
                    quantity: 2,
                    name: "Shock".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_total_quantity() {
        let parsed = parse_decklist("4 Lightning Bolt\n2 Shock");
        assert_eq!(parsed.total_quantity(), 6);
    }

    #[test]
    fn test_name_keeps_interior_punctuation() {
        let parsed = parse_decklist("1 Kess, Dissident Mage");
        assert_eq!(parsed.entries()[0].name, "Kess, Dissident Mage");
    }
}
