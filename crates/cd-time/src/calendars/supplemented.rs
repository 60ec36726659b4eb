//! Published holidays with a rule-based calendar for the remaining years.

use std::collections::BTreeSet;

use crate::calendar::Calendar;
use crate::calendars::holiday_set::HolidaySet;
use crate::date::Date;

/// Answers from the published [`HolidaySet`] for every year it lists and
/// from `rules` for every other year.
///
/// A published table is authoritative for its years, including any one-off
/// days it adds.
#[derive(Debug)]
pub struct SupplementedHolidays<'a, R: Calendar + ?Sized> {
    published: &'a HolidaySet,
    rules: &'a R,
    years: BTreeSet<u16>,
}

impl<'a, R: Calendar + ?Sized> SupplementedHolidays<'a, R> {
    /// Fill the gaps of `published` with `rules`.
    pub fn new(published: &'a HolidaySet, rules: &'a R) -> Self {
        Self {
            published,
            rules,
            years: published.years(),
        }
    }

    /// Whether `year` is answered by the published table.
    pub fn is_published(&self, year: u16) -> bool {
        self.years.contains(&year)
    }
}

impl<R: Calendar + ?Sized> Calendar for SupplementedHolidays<'_, R> {
    fn name(&self) -> &str {
        self.published.name()
    }

    fn is_holiday(&self, date: Date) -> bool {
        if self.is_published(date.year()) {
            self.published.is_holiday(date)
        } else {
            self.rules.is_holiday(date)
        }
    }
}
