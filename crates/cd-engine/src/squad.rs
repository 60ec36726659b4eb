//! Duty squads and the 8-day squad rotation.
//!
//! Four squads work in two pairs.  A and B are on duty for four days, then C
//! and D for four days, and the cycle repeats.  A and C work the day shift,
//! B and D the night shift.

use std::str::FromStr;

use cd_core::errors::{Error, Result};
use cd_time::Date;
use serde::{Deserialize, Serialize};

/// Length of the rotation cycle in days.
pub const ROTATION_CYCLE_DAYS: i32 = 8;

/// Days each squad pair stays on duty before handing over.
pub const ROTATION_HALF_DAYS: i32 = 4;

/// A duty squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Squad {
    /// Squad A (day).
    A,
    /// Squad B (night).
    B,
    /// Squad C (day).
    C,
    /// Squad D (night).
    D,
}

/// The shift a squad works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// Daytime appointments (0900hrs).
    Day,
    /// Evening appointments (1800hrs).
    Night,
}

impl Squad {
    /// The shift this squad works.
    pub fn shift(&self) -> Shift {
        match self {
            Squad::A | Squad::C => Shift::Day,
            Squad::B | Squad::D => Shift::Night,
        }
    }
}

impl Shift {
    /// Fingerprint appointment time for squads on this shift.
    pub fn appointment_time(&self) -> &'static str {
        match self {
            Shift::Day => "0900hrs",
            Shift::Night => "1800hrs",
        }
    }
}

impl std::fmt::Display for Squad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Squad::A => "A",
            Squad::B => "B",
            Squad::C => "C",
            Squad::D => "D",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Squad {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Squad::A),
            "B" => Ok(Squad::B),
            "C" => Ok(Squad::C),
            "D" => Ok(Squad::D),
            _ => Err(Error::InputValidation(format!(
                "unknown squad '{s}', expected A, B, C or D"
            ))),
        }
    }
}

/// The squads on duty on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkingSquads {
    /// Squad on the day shift.
    pub day: Squad,
    /// Squad on the night shift.
    pub night: Squad,
}

impl WorkingSquads {
    /// The squad working `shift`.
    pub fn on_shift(&self, shift: Shift) -> Squad {
        match shift {
            Shift::Day => self.day,
            Shift::Night => self.night,
        }
    }
}

/// The fixed 8-day rotation, anchored on a date when A (day) and B (night)
/// were confirmed on duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquadRotation {
    anchor: Date,
}

impl SquadRotation {
    /// The published anchor: Monday 28 April 2025, A/B on duty.
    pub const REFERENCE_ANCHOR: (u16, u8, u8) = (2025, 4, 28);

    /// Rotation anchored at `anchor`.
    pub fn new(anchor: Date) -> Self {
        Self { anchor }
    }

    /// Rotation anchored at [`Self::REFERENCE_ANCHOR`].
    pub fn reference() -> Result<Self> {
        let (y, m, d) = Self::REFERENCE_ANCHOR;
        Ok(Self::new(Date::from_ymd(y, m, d)?))
    }

    /// The anchor date.
    pub fn anchor(&self) -> Date {
        self.anchor
    }

    /// Position of `date` in the cycle, in `[0, 8)`.
    ///
    /// Dates are whole days, so the difference to the anchor is exact.
    pub fn cycle_position(&self, date: Date) -> i32 {
        (date - self.anchor).rem_euclid(ROTATION_CYCLE_DAYS)
    }

    /// The squads on duty on `date`.
    pub fn working_squads(&self, date: Date) -> WorkingSquads {
        if self.cycle_position(date) < ROTATION_HALF_DAYS {
            WorkingSquads {
                day: Squad::A,
                night: Squad::B,
            }
        } else {
            WorkingSquads {
                day: Squad::C,
                night: Squad::D,
            }
        }
    }
}
