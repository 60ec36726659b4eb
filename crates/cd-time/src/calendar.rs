//! `Calendar` trait.
//!
//! A calendar knows which dates are holidays.  Weekends are a separate
//! question: a court may sit on a date that is not a holiday but the
//! fingerprint office only works Monday to Friday, so both are exposed.

use crate::date::Date;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"British Columbia"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a listed holiday.  Weekends are not
    /// holidays unless the calendar lists them explicitly.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Collect the holidays in the inclusive range `[from, to]`.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<Date> {
        let mut out = Vec::new();
        let mut d = from;
        while d <= to {
            if self.is_holiday(d) {
                out.push(d);
            }
            match d.add_days(1) {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        out
    }
}

/// A calendar with no holidays at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl Calendar for NoHolidays {
    fn name(&self) -> &str {
        "No holidays"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
