//! Surname-initial handling: letter ranges and surname-to-weekday rules.

use std::str::FromStr;

use cd_core::errors::{Error, Result};
use cd_core::{ensure, fail};
use cd_time::Weekday;
use serde::{Deserialize, Serialize};

/// Upper-case and check a surname initial.
///
/// # Errors
/// Returns an input-validation error unless `initial` is an ASCII letter.
pub fn normalize_initial(initial: char) -> Result<char> {
    ensure!(
        initial.is_ascii_alphabetic(),
        InputValidation,
        "Please enter a valid letter (A-Z), got '{initial}'."
    );
    Ok(initial.to_ascii_uppercase())
}

/// Take the initial from free text (the first non-space character).
pub fn parse_initial(text: &str) -> Result<char> {
    match text.trim().chars().next() {
        Some(c) => normalize_initial(c),
        None => fail!(
            InputValidation,
            "Please enter the first letter of the last name."
        ),
    }
}

/// An inclusive range of upper-case initials, written `"A-K"` (or `"Q"` for
/// a single letter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LetterRange {
    first: char,
    last: char,
}

impl LetterRange {
    /// Build a range from its bounds.
    pub fn new(first: char, last: char) -> Result<Self> {
        let first = normalize_initial(first).map_err(|_| bad_range(first, last))?;
        let last = normalize_initial(last).map_err(|_| bad_range(first, last))?;
        if first > last {
            return Err(bad_range(first, last));
        }
        Ok(Self { first, last })
    }

    /// Return `true` if the (already upper-cased) initial is in range.
    pub fn contains(&self, initial: char) -> bool {
        (self.first..=self.last).contains(&initial)
    }

    /// First letter of the range.
    pub fn first(&self) -> char {
        self.first
    }

    /// Last letter of the range.
    pub fn last(&self) -> char {
        self.last
    }
}

fn bad_range(first: char, last: char) -> Error {
    Error::ReferenceData(format!("invalid letter range '{first}-{last}'"))
}

impl FromStr for LetterRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars().filter(|c| !c.is_whitespace());
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(c), None, None, None) => Self::new(c, c),
            (Some(a), Some('-' | '–'), Some(b), None) => Self::new(a, b),
            _ => Err(Error::ReferenceData(format!("invalid letter range '{s}'"))),
        }
    }
}

impl TryFrom<String> for LetterRange {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<LetterRange> for String {
    fn from(r: LetterRange) -> String {
        r.to_string()
    }
}

impl std::fmt::Display for LetterRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

/// Maps a range of initials to a court weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurnameRule {
    /// Initials covered by this rule.
    pub letters: LetterRange,
    /// Weekday the court sits for these initials.
    pub weekday: Weekday,
}

/// Ordered surname rules; the first matching range wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurnameRules(Vec<SurnameRule>);

impl SurnameRules {
    /// Wrap an ordered list of rules.
    pub fn new(rules: Vec<SurnameRule>) -> Self {
        Self(rules)
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[SurnameRule] {
        &self.0
    }

    /// Weekday for a surname initial.
    ///
    /// # Errors
    /// An input-validation error for a non-letter, and a configuration error
    /// when no rule covers the letter: a hole in the table is a data bug, so
    /// no weekday is guessed.
    pub fn weekday_for(&self, initial: char) -> Result<Weekday> {
        let initial = normalize_initial(initial)?;
        match self.0.iter().find(|r| r.letters.contains(initial)) {
            Some(rule) => Ok(rule.weekday),
            None => fail!(
                Configuration,
                "no surname rule covers initial '{initial}' (rules: {})",
                self.describe()
            ),
        }
    }

    /// Letters A–Z that no rule covers.
    pub fn uncovered_letters(&self) -> Vec<char> {
        ('A'..='Z')
            .filter(|&c| !self.0.iter().any(|r| r.letters.contains(c)))
            .collect()
    }

    fn describe(&self) -> String {
        self.0
            .iter()
            .map(|r| format!("{} → {}", r.letters, r.weekday))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
