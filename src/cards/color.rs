//! Mana colors and color sets.
//!
//! A card carries two color sets: `colors` (the colors of its cost) and
//! `color_identity` (cost plus rules-text mana symbols). Color identity is
//! what commander formats bound deck composition by, so the only operation
//! the rule engine needs is subset containment.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the five mana colors.
///
/// Serializes to the canonical single-letter symbol ("W", "U", "B", "R",
/// "G") used by catalog data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// Canonical single-letter symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Small ordered set of colors.
///
/// At most five entries, so this stays inline. Serializes as a list of
/// symbols (`["U", "B"]`), matching catalog data.
///
/// ## Example
///
/// ```
/// use deckforge::cards::{Color, ColorSet};
///
/// let dimir: ColorSet = [Color::Blue, Color::Black].into_iter().collect();
/// let mono_blue: ColorSet = [Color::Blue].into_iter().collect();
///
/// assert!(mono_blue.is_subset(&dimir));
/// assert!(!dimir.is_subset(&mono_blue));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSet(SmallVec<[Color; 5]>);

impl ColorSet {
    /// Create an empty (colorless) set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a color. Duplicates are ignored; order of first insertion is kept.
    pub fn insert(&mut self, color: Color) {
        if !self.0.contains(&color) {
            self.0.push(color);
        }
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    /// True when every color in `self` also appears in `other`.
    ///
    /// The empty (colorless) set is a subset of everything.
    #[must_use]
    pub fn is_subset(&self, other: &ColorSet) -> bool {
        self.0.iter().all(|c| other.contains(*c))
    }

    /// Number of colors in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a colorless set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the colors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::new();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl std::fmt::Display for ColorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for color in self.iter() {
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut set = ColorSet::new();
        set.insert(Color::Red);
        set.insert(Color::Red);
        set.insert(Color::Green);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Color::Red));
        assert!(set.contains(Color::Green));
        assert!(!set.contains(Color::White));
    }

    #[test]
    fn test_subset() {
        let dimir: ColorSet = [Color::Blue, Color::Black].into_iter().collect();
        let blue: ColorSet = [Color::Blue].into_iter().collect();
        let red: ColorSet = [Color::Red].into_iter().collect();

        assert!(blue.is_subset(&dimir));
        assert!(!red.is_subset(&dimir));
        assert!(dimir.is_subset(&dimir));
    }

    #[test]
    fn test_colorless_is_subset_of_everything() {
        let empty = ColorSet::new();
        let blue: ColorSet = [Color::Blue].into_iter().collect();

        assert!(empty.is_subset(&blue));
        assert!(empty.is_subset(&empty));
        assert!(!blue.is_subset(&empty));
    }

    #[test]
    fn test_serde_symbols() {
        let set: ColorSet = [Color::White, Color::Green].into_iter().collect();

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["W","G"]"#);

        let back: ColorSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, back);
    }

    #[test]
    fn test_display() {
        let set: ColorSet = [Color::Blue, Color::Black].into_iter().collect();
        assert_eq!(format!("{}", set), "UB");
    }
}
