//! Holiday set: a calendar backed by a published list of dates.

use std::collections::BTreeSet;

use crate::calendar::Calendar;
use crate::date::Date;
use cd_core::errors::Result;

/// An immutable set of holidays for one jurisdiction.
///
/// Membership is by calendar identity: the set stores [`Date`] values, which
/// have no time-of-day component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    name: String,
    holidays: BTreeSet<Date>,
}

impl HolidaySet {
    /// Create a holiday set from a list of dates.  Duplicates collapse.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Materialise the holidays of a rule-based calendar for one year.
    pub fn from_calendar(calendar: &dyn Calendar, year: u16) -> Result<Self> {
        let from = Date::from_ymd(year, 1, 1)?;
        let to = Date::from_ymd(year, 12, 31)?;
        Ok(Self::new(
            format!("{} {year}", calendar.name()),
            calendar.holidays_between(from, to),
        ))
    }

    /// Return a copy of this set with the holidays of `other` added.
    pub fn merged(&self, other: &HolidaySet) -> Self {
        Self {
            name: self.name.clone(),
            holidays: self.holidays.union(&other.holidays).copied().collect(),
        }
    }

    /// Number of listed holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if no holidays are listed.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterate over the holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }

    /// Return `true` if any listed holiday falls in `year`.
    pub fn covers_year(&self, year: u16) -> bool {
        self.holidays.iter().any(|d| d.year() == year)
    }

    /// Years with at least one listed holiday.
    pub fn years(&self) -> BTreeSet<u16> {
        self.holidays.iter().map(Date::year).collect()
    }
}

impl Calendar for HolidaySet {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }
}
