//! British Columbia court holidays.
//!
//! Used to generate a holiday table for years that have no published list.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::weekday::Weekday;

/// British Columbia provincial court holidays.
///
/// The following holidays are observed:
/// * New Year's Day (Jan 1, moved to Monday when on a weekend)
/// * Family Day (3rd Monday of February since 2019, 2nd Monday 2013–2018)
/// * Good Friday and Easter Monday
/// * Victoria Day (Monday on or before May 24)
/// * Canada Day (Jul 1, moved to Monday when on a weekend)
/// * British Columbia Day (1st Monday of August)
/// * Labour Day (1st Monday of September)
/// * National Day for Truth and Reconciliation (Sep 30, since 2021, moved)
/// * Thanksgiving (2nd Monday of October)
/// * Remembrance Day (Nov 11, moved to Monday when on a weekend)
/// * Christmas and Boxing Day (Dec 25/26, moved past the weekend)
#[derive(Debug, Clone, Copy, Default)]
pub struct BritishColumbia;

impl Calendar for BritishColumbia {
    fn name(&self) -> &str {
        "British Columbia"
    }

    fn is_holiday(&self, date: Date) -> bool {
        let w = date.weekday();
        let y = date.year();
        let m = date.month();
        let d = date.day_of_month();
        let monday = w == Weekday::Monday;
        let (easter_m, easter_d) = easter_sunday(y);
        let easter_offset = Date::from_ymd(y, easter_m, easter_d)
            .map(|easter| easter - date)
            .unwrap_or(i32::MAX);

        // New Year's Day
        (m == 1 && (d == 1 || ((d == 2 || d == 3) && monday)))
            // Family Day
            || (y >= 2019 && monday && m == 2 && (15..=21).contains(&d))
            || ((2013..2019).contains(&y) && monday && m == 2 && (8..=14).contains(&d))
            // Good Friday / Easter Monday
            || easter_offset == 2
            || easter_offset == -1
            // Victoria Day
            || (monday && m == 5 && (18..=24).contains(&d))
            // Canada Day
            || (m == 7 && (d == 1 || ((d == 2 || d == 3) && monday)))
            // British Columbia Day
            || (monday && m == 8 && d <= 7)
            // Labour Day
            || (monday && m == 9 && d <= 7)
            // National Day for Truth and Reconciliation
            || (y >= 2021 && m == 9 && d == 30)
            || (y >= 2021 && m == 10 && (d == 1 || d == 2) && monday)
            // Thanksgiving
            || (monday && m == 10 && (8..=14).contains(&d))
            // Remembrance Day
            || (m == 11 && (d == 11 || ((d == 12 || d == 13) && monday)))
            // Christmas / Boxing Day
            || (m == 12 && (d == 25 || d == 26))
            || (m == 12 && (d == 27 || d == 28) && (monday || w == Weekday::Tuesday))
    }
}

/// Month and day of Easter Sunday (Gregorian computus).
pub fn easter_sunday(year: u16) -> (u8, u8) {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    (month as u8, day as u8)
}
