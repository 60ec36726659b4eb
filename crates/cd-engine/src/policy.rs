//! Court scheduling policies.
//!
//! Each `(city, case type)` pair has one [`CourtPolicy`].  How the court
//! picks its sitting day is a [`DaySchedule`]: a published calendar, a fixed
//! weekday, a weekday chosen by surname initial, or the closest of a set of
//! permitted weekdays.

use std::str::FromStr;

use cd_core::errors::{Error, Result};
use cd_time::Weekday;
use serde::{Deserialize, Serialize};

use crate::surname::SurnameRules;

/// Adult or youth proceedings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    /// Adult court.
    Adult,
    /// Youth court.
    Youth,
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseType::Adult => write!(f, "adult"),
            CaseType::Youth => write!(f, "youth"),
        }
    }
}

impl FromStr for CaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adult" => Ok(CaseType::Adult),
            "youth" => Ok(CaseType::Youth),
            _ => Err(Error::InputValidation(format!(
                "unknown case type '{s}', expected adult or youth"
            ))),
        }
    }
}

/// The scheduling rule of a court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "day_type", rename_all = "lowercase")]
pub enum DaySchedule {
    /// Dates come from a published rotation table, partitioned by initial.
    Calendar {
        /// Name of the [`CalendarRotationTable`](crate::rotation_table::CalendarRotationTable).
        table: String,
    },
    /// The court always sits on one weekday.
    Fixed {
        /// The sitting weekday.
        weekday: Weekday,
    },
    /// The sitting weekday depends on the surname initial.
    Surname {
        /// Ordered letter-range rules.
        rules: SurnameRules,
    },
    /// Any of several weekdays; the one closest to the target is used.
    Flexible {
        /// Permitted weekdays.
        days: Vec<Weekday>,
    },
}

/// Discriminant of [`DaySchedule`], for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// See [`DaySchedule::Calendar`].
    Calendar,
    /// See [`DaySchedule::Fixed`].
    Fixed,
    /// See [`DaySchedule::Surname`].
    Surname,
    /// See [`DaySchedule::Flexible`].
    Flexible,
}

impl DaySchedule {
    /// The kind of schedule.
    pub fn day_type(&self) -> DayType {
        match self {
            DaySchedule::Calendar { .. } => DayType::Calendar,
            DaySchedule::Fixed { .. } => DayType::Fixed,
            DaySchedule::Surname { .. } => DayType::Surname,
            DaySchedule::Flexible { .. } => DayType::Flexible,
        }
    }

    /// Return `true` if resolving this schedule needs the surname initial.
    pub fn needs_surname_initial(&self) -> bool {
        matches!(
            self,
            DaySchedule::Calendar { .. } | DaySchedule::Surname { .. }
        )
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DayType::Calendar => "calendar",
            DayType::Fixed => "fixed",
            DayType::Surname => "surname",
            DayType::Flexible => "flexible",
        };
        write!(f, "{s}")
    }
}

/// Scheduling rule and display data for one `(city, case type)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtPolicy {
    /// City identifier, e.g. `"new-westminster"`.
    pub city: String,
    /// Case type this policy applies to.
    pub case_type: CaseType,
    /// Appearance time, e.g. `"0900hrs"`.
    pub time: String,
    /// Court address.
    pub address: String,
    /// Optional note shown with the result.
    #[serde(default)]
    pub note: Option<String>,
    /// Whether the note is appended to the copy-paste line.
    #[serde(default)]
    pub copy_note: bool,
    /// How the sitting day is chosen.
    pub schedule: DaySchedule,
}

impl CourtPolicy {
    /// Return `true` if this policy is for `city` and `case_type`.
    pub fn matches(&self, city: &str, case_type: CaseType) -> bool {
        self.case_type == case_type && self.city.eq_ignore_ascii_case(city)
    }
}
