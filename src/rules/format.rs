//! Format tags and per-format rule configuration.
//!
//! Formats are data, not a type hierarchy: each tag maps to a
//! [`FormatRules`] value in one table, and the rule engine reads the flags
//! to decide which checks run. Adding a format means adding a table row.

use serde::{Deserialize, Serialize};

/// Supported construction formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// 100-card singleton with a commander bounding color identity.
    Commander,
    /// 60-card constructed; size and banlist checks only.
    Pioneer,
}

impl Format {
    /// Canonical lowercase tag, also the key into a card's legality map.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Format::Commander => "commander",
            Format::Pioneer => "pioneer",
        }
    }

    /// The rule configuration for this format.
    #[must_use]
    pub fn rules(self) -> FormatRules {
        match self {
            Format::Commander => FormatRules {
                commander: true,
                deck_size: 100,
                singleton: true,
                color_identity: true,
                banlist: true,
                legality_key: "commander".to_string(),
            },
            Format::Pioneer => FormatRules {
                commander: false,
                deck_size: 60,
                singleton: false,
                color_identity: false,
                banlist: false,
                legality_key: "pioneer".to_string(),
            },
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static rule configuration for one format.
///
/// Part of the persisted deck document: a deck carries the snapshot it was
/// validated under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRules {
    /// Whether the format requires a designated commander.
    pub commander: bool,

    /// Exact required deck size (not a minimum or maximum).
    pub deck_size: u32,

    /// Whether each non-exempt name is limited to one copy.
    pub singleton: bool,

    /// Whether every card's color identity must fit the commander's.
    pub color_identity: bool,

    /// Whether per-card legality is checked.
    pub banlist: bool,

    /// Key into a card's legality map for the banlist check.
    pub legality_key: String,
}

/// Names exempt from the singleton rule: basic lands and cards whose rules
/// text allows any number of copies.
pub const SINGLETON_EXEMPT: &[&str] = &[
    "plains",
    "island",
    "swamp",
    "mountain",
    "forest",
    "snow-covered plains",
    "snow-covered island",
    "snow-covered swamp",
    "snow-covered mountain",
    "snow-covered forest",
    "persistent petitioners",
    "dragon's approach",
    "rat colony",
    "relentless rats",
    "shadowborn apostle",
];

/// Case-insensitive membership test against [`SINGLETON_EXEMPT`].
#[must_use]
pub fn is_singleton_exempt(name: &str) -> bool {
    let lower = name.to_lowercase();
    SINGLETON_EXEMPT.contains(&lower.as_str())
}
