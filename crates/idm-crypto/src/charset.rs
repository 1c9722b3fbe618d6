//! ASCII character classes.

use std::collections::BTreeSet;

/// An ASCII character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `a-z`
    Lowercase,
    /// `A-Z`
    Uppercase,
    /// `0-9`
    Digit,
    /// Printable ASCII punctuation and symbols.
    Symbol,
}

impl CharClass {
    /// Every class, in display order.
    pub const ALL: [Self; 4] = [Self::Lowercase, Self::Uppercase, Self::Digit, Self::Symbol];

    /// Returns the class members in ascending order.
    #[must_use]
    pub fn chars(self) -> Vec<char> {
        match self {
            Self::Lowercase => ('a'..='z').collect(),
            Self::Uppercase => ('A'..='Z').collect(),
            Self::Digit => ('0'..='9').collect(),
            Self::Symbol => ('!'..='~').filter(char::is_ascii_punctuation).collect(),
        }
    }

    /// Checks whether `c` belongs to this class.
    #[must_use]
    pub const fn contains(self, c: char) -> bool {
        match self {
            Self::Lowercase => c.is_ascii_lowercase(),
            Self::Uppercase => c.is_ascii_uppercase(),
            Self::Digit => c.is_ascii_digit(),
            Self::Symbol => c.is_ascii_punctuation(),
        }
    }

    /// Returns the class of `c`, or `None` for characters outside printable ASCII.
    #[must_use]
    pub fn of(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    /// Counts the characters of `s` in this class.
    #[must_use]
    pub fn count_in(self, s: &str) -> usize {
        s.chars().filter(|&c| self.contains(c)).count()
    }
}

/// Builds a sampling pool from `classes`, leaving out `excluded` characters.
///
/// The pool is sorted and free of duplicates.
#[must_use]
pub fn pool(classes: &[CharClass], excluded: &BTreeSet<char>) -> Vec<char> {
    let members: BTreeSet<char> = classes
        .iter()
        .flat_map(|class| class.chars())
        .filter(|c| !excluded.contains(c))
        .collect();
    members.into_iter().collect()
}
