//! Concrete calendars: published holiday lists, court closures, and the
//! rule-based British Columbia calendar.

/// Rule-based British Columbia holidays.
pub mod british_columbia;

/// General and city-specific court closures.
pub mod closures;

/// Holiday set backed by a published list of dates.
pub mod holiday_set;

/// Published holidays backed by rules for unlisted years.
pub mod supplemented;

pub use british_columbia::BritishColumbia;
pub use closures::{ClosureSet, CourtCalendar};
pub use holiday_set::HolidaySet;
pub use supplemented::SupplementedHolidays;
