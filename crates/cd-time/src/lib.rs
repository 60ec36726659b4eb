//! # cd-time
//!
//! Date, weekday, holiday-calendar and weekday-search types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait.
pub mod calendar;

/// Holiday sets, court closures and rule-based calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Weekday`: day of the week.
pub mod weekday;

/// Next / closest occurrence of a weekday.
pub mod weekday_search;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, NoHolidays};
pub use calendars::{
    BritishColumbia, ClosureSet, CourtCalendar, HolidaySet, SupplementedHolidays,
};
pub use date::Date;
pub use weekday::Weekday;
pub use weekday_search::{closest_weekday_from, next_occurrence, previous_occurrence};
