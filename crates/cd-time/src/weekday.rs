//! `Weekday`: day-of-week enum.

use std::str::FromStr;

use cd_core::errors::Error;
use serde::{Deserialize, Serialize};

/// A named day, Monday through Sunday.
///
/// The discriminant is the ISO day number, so Monday is 1 and Sunday is 7.
/// Reference tables that count from Sunday = 0 go through
/// [`Weekday::from_sunday_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Weekday {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

const NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

impl Weekday {
    /// Monday to Sunday in order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Day for an ISO number in `1..=7`.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Day for a Sunday-first index in `0..=6`.
    pub fn from_sunday_index(n: u8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Sunday),
            1..=6 => Self::from_ordinal(n),
            _ => None,
        }
    }

    /// Sunday-first index, Sunday being 0.
    pub fn sunday_index(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        self.ordinal() >= 6
    }

    /// Monday to Friday.
    pub fn is_weekday(&self) -> bool {
        self.ordinal() <= 5
    }

    /// ISO day number.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Days to move forward from `self` to reach `other` (0–6).
    pub fn days_until(&self, other: Weekday) -> u8 {
        (7 + other.ordinal() - self.ordinal()) % 7
    }

    /// Days to move backward from `self` to reach `other` (0–6).
    pub fn days_since(&self, other: Weekday) -> u8 {
        other.days_until(*self)
    }

    /// English name.
    pub fn name(&self) -> &'static str {
        NAMES[usize::from(self.ordinal() - 1)]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    /// Accepts full or three-letter names in any case (`"wed"`, `"Wednesday"`).
    fn from_str(s: &str) -> Result<Self, Error> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|w| {
                let name = w.name().to_ascii_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| Error::InputValidation(format!("unknown weekday '{s}'")))
    }
}
