//! `Date` type.
//!
//! A `Date` is a count of whole days, so it has no time-of-day and two dates
//! compare equal exactly when they name the same calendar day.  Day 1 is
//! 1900-01-01 and the last representable day is 2199-12-31; day 0 is kept as
//! a null value for defaults.

use std::str::FromStr;

use crate::weekday::Weekday;
use cd_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// A calendar day.
///
/// Serialises as an ISO `YYYY-MM-DD` string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(i32);

/// Proleptic day count of 1899-12-31, so that 1900-01-01 becomes day 1.
const EPOCH_OFFSET: i32 = 693_900;

const FIRST_YEAR: u16 = 1900;
const LAST_YEAR: u16 = 2199;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Date {
    /// Day 0, used as an unset value.
    pub const NULL: Date = Date(0);

    /// 2199-12-31.
    pub const MAX: Date = Date(109_573);

    /// Wrap a raw day number.
    ///
    /// # Errors
    /// Day numbers outside `1..=Date::MAX.serial()` are rejected.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(1..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "day number {serial} is outside 1..={}",
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Build a date from its calendar fields.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} is outside {FIRST_YEAR}-{LAST_YEAR}"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("no month {month}")));
        }
        let last = days_in_month(year, month);
        if !(1..=last).contains(&day) {
            return Err(Error::Date(format!(
                "{year}-{month:02} has no day {day} (it has {last})"
            )));
        }
        Ok(Date(civil_to_days(year, month, day) - EPOCH_OFFSET))
    }

    /// The raw day number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Whether this is [`Date::NULL`].
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Calendar year.
    pub fn year(&self) -> u16 {
        self.civil().0
    }

    /// Month, 1 for January.
    pub fn month(&self) -> u8 {
        self.civil().1
    }

    /// Day of the month.
    pub fn day_of_month(&self) -> u8 {
        self.civil().2
    }

    /// Ordinal day within the year, 1 for January 1st.
    pub fn day_of_year(&self) -> u16 {
        let start = civil_to_days(self.year(), 1, 1) - EPOCH_OFFSET;
        (self.0 - start + 1) as u16
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        // Day 1 (1900-01-01) was a Monday
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    /// Move `n` days (negative moves back).
    ///
    /// # Errors
    /// Fails if the result leaves the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Date::from_serial(self.0 + n).map_err(|_| {
            Error::Date(format!("{self} {n:+} days is outside the supported range"))
        })
    }

    /// Move `n` weeks.
    pub fn add_weeks(self, n: i32) -> Result<Self> {
        self.add_days(n * 7)
    }

    /// Signed day distance to `other` (positive when `other` is later).
    pub fn days_between(self, other: Date) -> i32 {
        other - self
    }

    /// The `n`-th `weekday` of a month, counting from 1.
    ///
    /// `nth_weekday(3, Weekday::Monday, 2025, 2)` is BC Family Day 2025,
    /// 2025-02-17.
    ///
    /// # Errors
    /// Fails for `n == 0` and when the month has fewer than `n` such days.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("weekday occurrences count from 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let day = 1 + u16::from(first.weekday().days_until(weekday)) + 7 * (u16::from(n) - 1);
        if day > u16::from(days_in_month(year, month)) {
            return Err(Error::Date(format!(
                "{year}-{month:02} has no occurrence {n} of {weekday}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Spelled-out form for copy text, e.g. `"Tuesday October 14 2025"`.
    pub fn long_form(&self) -> String {
        let (y, m, d) = self.civil();
        format!(
            "{} {} {d} {y}",
            self.weekday(),
            MONTH_NAMES[usize::from(m) - 1]
        )
    }

    fn civil(&self) -> (u16, u8, u8) {
        days_to_civil(self.0 + EPOCH_OFFSET)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::Date(format!("'{s}' is not a YYYY-MM-DD date"));
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [y, m, d] = parts.as_slice() else {
            return Err(malformed());
        };
        let y: u16 = y.parse().map_err(|_| malformed())?;
        let m: u8 = m.parse().map_err(|_| malformed())?;
        let d: u8 = d.parse().map_err(|_| malformed())?;
        Date::from_ymd(y, m, d)
    }
}

impl TryFrom<String> for Date {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Date> for String {
    fn from(d: Date) -> String {
        d.to_string()
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return f.write_str("null date");
        }
        let (y, m, d) = self.civil();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of a month in days.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// Day counts below use a year starting on March 1st, which puts the leap
// day at the end of the year.  A 400-year era has 146_097 days.

/// Days from 0000-03-01 to the given date.
fn civil_to_days(year: u16, month: u8, day: u8) -> i32 {
    let (month, day) = (i32::from(month), i32::from(day));
    let y = i32::from(year) - i32::from(month <= 2);
    let era = y.div_euclid(400);
    let year_of_era = y - era * 400;
    let shifted_month = (month + 9) % 12; // March = 0
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era
}

/// Inverse of [`civil_to_days`].
fn days_to_civil(days: i32) -> (u16, u8, u8) {
    let era = days.div_euclid(146_097);
    let day_of_era = days - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = (shifted_month + 2) % 12 + 1;
    let year = year_of_era + era * 400 + i32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}
