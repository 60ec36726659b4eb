//! Published court rotation tables.
//!
//! Some courts publish their sitting dates ahead of time, split by surname
//! initial (e.g. `A-K` on alternate Tuesdays, `L-Z` on the Tuesdays in
//! between).  The table only covers a finite horizon and is republished
//! periodically; dates beyond it are never extrapolated.

use cd_core::errors::{Error, Result};
use cd_time::Date;
use serde::{Deserialize, Serialize};

use crate::surname::{normalize_initial, LetterRange};

/// Default distance (days) a target may lie outside a partition's published
/// dates and still be served from it.
pub const DEFAULT_HORIZON_TOLERANCE_DAYS: i32 = 14;

fn default_tolerance() -> i32 {
    DEFAULT_HORIZON_TOLERANCE_DAYS
}

/// The published dates for one range of initials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPartition {
    /// Initials served on these dates.
    pub letters: LetterRange,
    /// Sitting dates in ascending order.
    pub dates: Vec<Date>,
}

impl RotationPartition {
    /// First and last published date, or `None` if nothing is published.
    pub fn horizon(&self) -> Option<(Date, Date)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }

    /// Index of the published date closest to `target`.
    ///
    /// Ties go to the earlier entry in the list.
    pub fn closest_index(&self, target: Date) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (i, d) in self.dates.iter().enumerate() {
            let distance = (*d - target).abs();
            if best.map_or(true, |(_, b)| distance < b) {
                best = Some((i, distance));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Return `true` if `date` is one of the published dates.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    fn is_sorted(&self) -> bool {
        self.dates.windows(2).all(|w| w[0] < w[1])
    }
}

/// A named, published rotation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRotationTable {
    /// Table name referenced by calendar policies, e.g. `"richmond-2025"`.
    pub name: String,
    /// How far (days) a target may fall outside the published dates.
    #[serde(default = "default_tolerance")]
    pub horizon_tolerance_days: i32,
    /// One partition per range of initials.
    pub partitions: Vec<RotationPartition>,
}

impl CalendarRotationTable {
    /// The partition serving `initial`.
    ///
    /// # Errors
    /// Input-validation error for a non-letter; configuration error if no
    /// partition covers the letter.
    pub fn partition_for(&self, initial: char) -> Result<&RotationPartition> {
        let initial = normalize_initial(initial)?;
        self.partitions
            .iter()
            .find(|p| p.letters.contains(initial))
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "rotation table '{}' has no partition for initial '{initial}'",
                    self.name
                ))
            })
    }

    /// The partition that published `date`, if any.
    pub fn partition_of(&self, date: Date) -> Option<&RotationPartition> {
        self.partitions.iter().find(|p| p.contains(date))
    }

    /// Check table integrity: every partition non-empty and ascending, and
    /// partitions covering A–Z.
    pub fn validate(&self) -> Result<()> {
        for p in &self.partitions {
            if p.dates.is_empty() {
                return Err(Error::Configuration(format!(
                    "rotation table '{}' partition {} has no dates",
                    self.name, p.letters
                )));
            }
            if !p.is_sorted() {
                return Err(Error::Configuration(format!(
                    "rotation table '{}' partition {} dates are not strictly ascending",
                    self.name, p.letters
                )));
            }
        }
        let uncovered: String = ('A'..='Z')
            .filter(|&c| !self.partitions.iter().any(|p| p.letters.contains(c)))
            .collect();
        if !uncovered.is_empty() {
            return Err(Error::Configuration(format!(
                "rotation table '{}' does not cover initials {uncovered}",
                self.name
            )));
        }
        Ok(())
    }
}
