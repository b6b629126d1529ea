//! Format-legality validation.
//!
//! `validate` is a pure function over a deck: every active rule runs
//! unconditionally and the result is a full failure map, not a single
//! pass/fail - one call surfaces every violation at once. Which rules are
//! active comes from the deck's [`FormatRules`](crate::rules::FormatRules)
//! flags, so formats are table rows, not subclasses.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::rules::format::is_singleton_exempt;

/// Report key for the commander-presence rule.
pub const RULE_COMMANDER: &str = "Commander";
/// Report key for the exact-deck-size rule.
pub const RULE_DECK_SIZE: &str = "Deck Size";
/// Report key for the per-card legality rule.
pub const RULE_BANNED: &str = "Banned Cards";
/// Report key for the singleton rule.
pub const RULE_SINGLETON: &str = "Singleton";
/// Report key for the color-identity containment rule.
pub const RULE_COLOR_IDENTITY: &str = "Color Identity";

/// Outcome of validating a deck: rule name -> failure message.
///
/// Empty means legal. `BTreeMap` keeps report order stable for callers and
/// serialized responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    pub failures: BTreeMap<String, String>,
}

impl ValidationReport {
    /// True when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Message recorded for a rule, if it failed.
    #[must_use]
    pub fn failure(&self, rule: &str) -> Option<&str> {
        self.failures.get(rule).map(String::as_str)
    }

    fn fail(&mut self, rule: &str, message: impl Into<String>) {
        self.failures.insert(rule.to_string(), message.into());
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        let mut first = true;
        for (rule, message) in &self.failures {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", rule, message)?;
            first = false;
        }
        Ok(())
    }
}

type RuleCheck = fn(&Deck, &mut ValidationReport);

/// Validate a deck against its rules snapshot.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use deckforge::cards::Card;
/// use deckforge::deck::assemble;
/// use deckforge::rules::{validate, Format, RULE_DECK_SIZE};
///
/// let cards = vec![Arc::new(Card::new("Llanowar Elves")); 59];
/// let deck = assemble("Short", Format::Pioneer, None, cards);
///
/// let report = validate(&deck);
/// assert!(!report.is_valid());
/// assert!(report.failure(RULE_DECK_SIZE).unwrap().contains("59"));
/// ```
#[must_use]
pub fn validate(deck: &Deck) -> ValidationReport {
    let rules = &deck.rules;

    // Rule table: (active, check). Every active rule runs; no
    // short-circuiting, so the report carries every violation at once.
    let table: [(bool, RuleCheck); 5] = [
        (rules.commander, check_commander),
        (true, check_deck_size),
        (rules.banlist, check_banned),
        (rules.singleton, check_singleton),
        (rules.color_identity, check_color_identity),
    ];

    let mut report = ValidationReport::default();
    for (active, check) in table {
        if active {
            check(deck, &mut report);
        }
    }
    report
}

/// The commander must be designated and its name present in the deck.
fn check_commander(deck: &Deck, report: &mut ValidationReport) {
    let present = deck
        .commander
        .as_ref()
        .is_some_and(|commander| deck.card_names().any(|name| name == commander.name));

    if !present {
        report.fail(RULE_COMMANDER, "Commander not in deck");
    }
}

/// Card count must equal the required size exactly.
fn check_deck_size(deck: &Deck, report: &mut ValidationReport) {
    let required = deck.rules.deck_size;
    let actual = deck.len() as u32;

    if actual != required {
        report.fail(
            RULE_DECK_SIZE,
            format!("Deck has to be: {}, but has {} cards.", required, actual),
        );
    }
}

/// Every card must be marked legal under the format's legality key.
fn check_banned(deck: &Deck, report: &mut ValidationReport) {
    let key = &deck.rules.legality_key;

    let mut offenders: Vec<&str> = Vec::new();
    for card in &deck.cards {
        if !card.is_legal_in(key) && !offenders.contains(&card.name.as_str()) {
            offenders.push(&card.name);
        }
    }

    if !offenders.is_empty() {
        report.fail(
            RULE_BANNED,
            format!("Contains banned cards: {}", offenders.join(", ")),
        );
    }
}

/// No more than one copy per name, except the exempt allowlist.
/// Grouping is case-insensitive; the report shows each name as first seen.
fn check_singleton(deck: &Deck, report: &mut ValidationReport) {
    let mut counts: FxHashMap<String, u32> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();

    for name in deck.card_names() {
        let count = counts.entry(name.to_lowercase()).or_insert(0);
        if *count == 0 {
            order.push(name);
        }
        *count += 1;
    }

    let duplicates: Vec<&str> = order
        .into_iter()
        .filter(|name| counts[name.to_lowercase().as_str()] > 1 && !is_singleton_exempt(name))
        .collect();

    if !duplicates.is_empty() {
        report.fail(
            RULE_SINGLETON,
            format!("Contains duplicates: {}", duplicates.join(", ")),
        );
    }
}

/// Every card's color identity must fit inside the commander's.
///
/// Skipped (without failing) when no commander is designated: the
/// commander rule already reports that state, and there is no identity to
/// test against.
fn check_color_identity(deck: &Deck, report: &mut ValidationReport) {
    let Some(commander) = deck.commander.as_ref() else {
        return;
    };

    let mut offenders: Vec<&str> = Vec::new();
    for card in &deck.cards {
        if !card.color_identity.is_subset(&commander.color_identity)
            && !offenders.contains(&card.name.as_str())
        {
            offenders.push(&card.name);
        }
    }

    if !offenders.is_empty() {
        report.fail(
            RULE_COLOR_IDENTITY,
            format!(
                "Cards with invalid color identity: {}",
                offenders.join(", ")
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::cards::{Card, Color, Legality};
    use crate::deck::assemble;
    use crate::rules::Format;

    fn commander_card(name: &str, identity: &[Color]) -> Arc<Card> {
        Arc::new(
            Card::new(name)
                .with_color_identity(identity.iter().copied())
                .with_type_line("Legendary Creature")
                .with_card_type("Creature")
                .with_legality("commander", Legality::Legal),
        )
    }

    fn filler(name: &str) -> Arc<Card> {
        Arc::new(Card::new(name).with_legality("commander", Legality::Legal))
    }

    /// Commander + distinct legal fillers, `size` cards total.
    fn commander_cards(size: usize) -> Vec<Arc<Card>> {
        let mut cards = vec![commander_card(
            "Kess, Dissident Mage",
            &[Color::Blue, Color::Black, Color::Red],
        )];
        for i in 1..size {
            cards.push(filler(&format!("Filler {}", i)));
        }
        cards
    }

    fn commander_deck(size: usize) -> Deck {
        assemble(
            "Test Deck",
            Format::Commander,
            Some("Kess, Dissident Mage"),
            commander_cards(size),
        )
    }

    #[test]
    fn test_conforming_deck_is_valid() {
        let report = validate(&commander_deck(100));
        assert!(report.is_valid(), "unexpected failures: {}", report);
    }

    #[test]
    fn test_deck_size_must_match_exactly() {
        let report = validate(&commander_deck(99));
        assert_eq!(
            report.failure(RULE_DECK_SIZE),
            Some("Deck has to be: 100, but has 99 cards.")
        );

        let report = validate(&commander_deck(101));
        assert_eq!(
            report.failure(RULE_DECK_SIZE),
            Some("Deck has to be: 100, but has 101 cards.")
        );
    }

    #[test]
    fn test_missing_commander_reported() {
        let mut deck = commander_deck(100);
        deck.commander = None;

        let report = validate(&deck);
        assert_eq!(report.failure(RULE_COMMANDER), Some("Commander not in deck"));
    }

    #[test]
    fn test_no_short_circuit_reports_all_violations() {
        // 99 cards (too small) AND a non-exempt duplicate: both keys must
        // appear in one report.
        let mut cards = commander_cards(97);
        cards.push(filler("Sol Ring"));
        cards.push(filler("Sol Ring"));
        let deck = assemble(
            "Test Deck",
            Format::Commander,
            Some("Kess, Dissident Mage"),
            cards,
        );
        assert_eq!(deck.len(), 99);

        let report = validate(&deck);
        assert!(report.failure(RULE_DECK_SIZE).is_some());
        assert_eq!(
            report.failure(RULE_SINGLETON),
            Some("Contains duplicates: Sol Ring")
        );
    }

    #[test]
    fn test_banned_card_reported_by_name() {
        let mut cards = commander_cards(99);
        cards.push(Arc::new(
            Card::new("Black Lotus").with_legality("commander", Legality::Banned),
        ));
        let deck = assemble(
            "Test Deck",
            Format::Commander,
            Some("Kess, Dissident Mage"),
            cards,
        );

        let report = validate(&deck);
        assert_eq!(
            report.failure(RULE_BANNED),
            Some("Contains banned cards: Black Lotus")
        );
    }

    #[test]
    fn test_missing_legality_entry_counts_as_banned() {
        let mut cards = commander_cards(99);
        cards.push(Arc::new(Card::new("Unrecorded Card")));
        let deck = assemble(
            "Test Deck",
            Format::Commander,
            Some("Kess, Dissident Mage"),
            cards,
        );

        let report = validate(&deck);
        assert!(report
            .failure(RULE_BANNED)
            .unwrap()
            .contains("Unrecorded Card"));
    }

    #[test]
    fn test_restricted_counts_as_not_legal() {
        let mut cards = commander_cards(99);
        cards.push(Arc::new(
            Card::new("Brainstorm").with_legality("commander", Legality::Restricted),
        ));
        let deck = assemble(
            "Test Deck",
            Format::Commander,
            Some("Kess, Dissident Mage"),
            cards,
        );

        assert!(validate(&deck).failure(RULE_BANNED).is_some());
    }

    #[test]
    fn test_basic_lands_exempt_from_singleton() {
        // Five Plains, everything else singleton: passes.
        let mut cards = commander_cards(95);
        for _ in 0..5 {
            cards.push(filler("Plains"));
        }
        let deck = assemble(
            "Basics",
            Format::Commander,
            Some("Kess, Dissident Mage"),
            cards,
        );
        assert_eq!(deck.len(), 100);

        let report = validate(&deck);
        assert_eq!(report.failure(RULE_SINGLETON), None);
        assert!(report.is_valid(), "unexpected failures: {}", report);
    }

    #[test]
    fn test_singleton_groups_case_insensitively() {
        let mut cards = commander_cards(98);
        cards.push(filler("Sol Ring"));
        cards.push(filler("SOL RING"));
        let deck = assemble(
            "Case",
            Format::Commander,
            Some("Kess, Dissident Mage"),
            cards,
        );

        // Grouped across casings; reported as first seen.
        let report = validate(&deck);
        assert_eq!(
            report.failure(RULE_SINGLETON),
            Some("Contains duplicates: Sol Ring")
        );
    }

    #[test]
    fn test_color_identity_names_offending_card() {
        // Commander identity {U, B}; the mono-red card must be named.
        let mut cards = vec![commander_card(
            "Wrexial, the Risen Deep",
            &[Color::Blue, Color::Black],
        )];
        cards.push(Arc::new(
            Card::new("Lightning Bolt")
                .with_colors([Color::Red])
                .with_color_identity([Color::Red])
                .with_legality("commander", Legality::Legal),
        ));
        for i in 0..98 {
            cards.push(filler(&format!("Filler {}", i)));
        }
        let deck = assemble(
            "Wrexial",
            Format::Commander,
            Some("Wrexial, the Risen Deep"),
            cards,
        );

        let report = validate(&deck);
        assert_eq!(
            report.failure(RULE_COLOR_IDENTITY),
            Some("Cards with invalid color identity: Lightning Bolt")
        );
    }

    #[test]
    fn test_color_identity_skipped_without_commander() {
        let mut deck = commander_deck(100);
        deck.commander = None;

        let report = validate(&deck);
        assert!(report.failure(RULE_COMMANDER).is_some());
        assert_eq!(report.failure(RULE_COLOR_IDENTITY), None);
    }

    #[test]
    fn test_pioneer_checks_size_only() {
        // 15 playsets of 4, no legality entries at all: valid at 60.
        let mut cards = Vec::new();
        for i in 0..15 {
            let card = Arc::new(Card::new(format!("Playset {}", i)));
            for _ in 0..4 {
                cards.push(Arc::clone(&card));
            }
        }
        let deck = assemble("Playsets", Format::Pioneer, None, cards);

        let report = validate(&deck);
        assert!(report.is_valid(), "unexpected failures: {}", report);

        let short = assemble("Short", Format::Pioneer, None, deck.cards[..59].to_vec());
        let report = validate(&short);
        assert_eq!(
            report.failure(RULE_DECK_SIZE),
            Some("Deck has to be: 60, but has 59 cards.")
        );
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn test_report_display() {
        let report = validate(&commander_deck(99));
        assert!(format!("{}", report).contains("Deck Size"));

        assert_eq!(format!("{}", validate(&commander_deck(100))), "valid");
    }
}
