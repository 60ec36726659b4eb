//! Integration tests for holiday sets, closures and the British Columbia
//! calendar.

use cd_time::{BritishColumbia, Calendar, ClosureSet, CourtCalendar, Date, HolidaySet};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// The published 2025 British Columbia court holiday list.
fn bc_2025() -> Vec<Date> {
    vec![
        date(2025, 1, 1),
        date(2025, 2, 17),
        date(2025, 4, 18),
        date(2025, 4, 21),
        date(2025, 5, 19),
        date(2025, 7, 1),
        date(2025, 8, 4),
        date(2025, 9, 1),
        date(2025, 9, 30),
        date(2025, 10, 13),
        date(2025, 11, 11),
        date(2025, 12, 25),
        date(2025, 12, 26),
    ]
}

/// Assert that the holidays of `cal` in `[from, to]` are exactly `expected`.
fn check_holidays(cal: &dyn Calendar, from: Date, to: Date, expected: &[Date]) {
    let calculated = cal.holidays_between(from, to);
    for d in &calculated {
        assert!(
            expected.contains(d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for d in expected {
        assert!(
            calculated.contains(d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

// ─── British Columbia ────────────────────────────────────────────────────────

#[test]
fn test_bc_rules_match_published_2025_list() {
    check_holidays(
        &BritishColumbia,
        date(2025, 1, 1),
        date(2025, 12, 31),
        &bc_2025(),
    );
}

#[test]
fn test_generated_holiday_set() {
    let generated = HolidaySet::from_calendar(&BritishColumbia, 2025).unwrap();
    let published = HolidaySet::new("BC 2025", bc_2025());
    assert_eq!(generated.name(), "British Columbia 2025");
    assert_eq!(
        generated.iter().collect::<Vec<_>>(),
        published.iter().collect::<Vec<_>>()
    );
}

#[test]
fn test_bc_2026_holidays() {
    let expected = vec![
        date(2026, 1, 1),
        date(2026, 2, 16),
        date(2026, 4, 3),
        date(2026, 4, 6),
        date(2026, 5, 18),
        date(2026, 7, 1),
        date(2026, 8, 3),
        date(2026, 9, 7),
        date(2026, 9, 30),
        date(2026, 10, 12),
        date(2026, 11, 11),
        date(2026, 12, 25),
        // Boxing Day 2026 is a Saturday: the Saturday and the Monday after
        date(2026, 12, 26),
        date(2026, 12, 28),
    ];
    check_holidays(&BritishColumbia, date(2026, 1, 1), date(2026, 12, 31), &expected);
}

// ─── Closures ────────────────────────────────────────────────────────────────

#[test]
fn test_court_calendar_blocks_closures_for_its_city_only() {
    let holidays = HolidaySet::new("BC 2025", bc_2025());
    let closures = ClosureSet::new([date(2025, 12, 24)])
        .with_city("north-vancouver", [date(2025, 10, 22)]);

    let north_van = CourtCalendar::new(&holidays, &closures, "north-vancouver");
    let surrey = CourtCalendar::new(&holidays, &closures, "surrey");

    assert!(north_van.is_holiday(date(2025, 10, 22)));
    assert!(!surrey.is_holiday(date(2025, 10, 22)));
    assert!(surrey.is_holiday(date(2025, 12, 24)));
    assert!(surrey.is_holiday(date(2025, 12, 25)));
    assert!(closures.is_closure(date(2025, 12, 24), Some("unknown-city")));
    assert!(!closures.is_closure(date(2025, 10, 22), Some("unknown-city")));
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_holiday_lookup_depends_only_on_the_day(serial in 44_000i32..50_000) {
        let holidays = HolidaySet::new("BC 2025", bc_2025());
        let d = Date::from_serial(serial).unwrap();
        let same_day: Date = d.to_string().parse().unwrap();
        prop_assert_eq!(holidays.is_holiday(d), holidays.is_holiday(same_day));
        prop_assert_eq!(
            holidays.is_holiday(d),
            bc_2025().iter().any(|h| {
                (h.year(), h.month(), h.day_of_month())
                    == (d.year(), d.month(), d.day_of_month())
            })
        );
    }
}
