//! Court closures and the per-city court calendar.
//!
//! A [`ClosureSet`] lists days on which courts do not sit although they are
//! not public holidays.  [`CourtCalendar`] joins a holiday calendar with the
//! closures that apply to one city: a day is blocked if it is blocked in
//! either.

use std::collections::{BTreeMap, BTreeSet};

use crate::calendar::Calendar;
use crate::date::Date;

/// General (all-court) closures plus closures specific to one city.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosureSet {
    general: BTreeSet<Date>,
    by_city: BTreeMap<String, BTreeSet<Date>>,
}

impl ClosureSet {
    /// Create a closure set with the given general closures.
    pub fn new(general: impl IntoIterator<Item = Date>) -> Self {
        Self {
            general: general.into_iter().collect(),
            by_city: BTreeMap::new(),
        }
    }

    /// Add closures that only apply to `city`.  City names are matched
    /// case-insensitively.
    pub fn with_city(mut self, city: impl AsRef<str>, dates: impl IntoIterator<Item = Date>) -> Self {
        self.by_city
            .entry(city.as_ref().to_lowercase())
            .or_default()
            .extend(dates);
        self
    }

    /// Return `true` if courts are closed on `date`.
    ///
    /// General closures apply to every city.  City-specific closures are
    /// only consulted when `city` is given; an unknown city simply has none.
    pub fn is_closure(&self, date: Date, city: Option<&str>) -> bool {
        if self.general.contains(&date) {
            return true;
        }
        city.and_then(|c| self.by_city.get(&c.to_lowercase()))
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Return `true` if no closures are listed at all.
    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.by_city.values().all(BTreeSet::is_empty)
    }
}

/// Holidays plus the closures of one city, seen as a single [`Calendar`].
#[derive(Debug)]
pub struct CourtCalendar<'a, C: Calendar + ?Sized> {
    holidays: &'a C,
    closures: &'a ClosureSet,
    city: &'a str,
}

impl<'a, C: Calendar + ?Sized> CourtCalendar<'a, C> {
    /// Combine `holidays` and the closures for `city`.
    pub fn new(holidays: &'a C, closures: &'a ClosureSet, city: &'a str) -> Self {
        Self {
            holidays,
            closures,
            city,
        }
    }

    /// The city whose closures are applied.
    pub fn city(&self) -> &str {
        self.city
    }

    /// Return `true` if `date` is a court closure (not a holiday) for the city.
    pub fn is_closure(&self, date: Date) -> bool {
        self.closures.is_closure(date, Some(self.city))
    }
}

impl<C: Calendar + ?Sized> Clone for CourtCalendar<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Calendar + ?Sized> Copy for CourtCalendar<'_, C> {}

impl<C: Calendar + ?Sized> Calendar for CourtCalendar<'_, C> {
    fn name(&self) -> &str {
        self.holidays.name()
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays.is_holiday(date) || self.is_closure(date)
    }
}
