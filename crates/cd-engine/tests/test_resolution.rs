//! End-to-end resolution against the bundled Lower Mainland data.

use cd_core::errors::Error;
use cd_engine::{
    resolve_dates, CaseType, DateRequest, DayType, ReferenceData, Squad, SquadRotation,
    WorkingSquads,
};
use cd_time::{BritishColumbia, Calendar, Date, HolidaySet, Weekday};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn data() -> ReferenceData {
    ReferenceData::bundled().unwrap()
}

fn request(city: &str, case_type: CaseType, initial: Option<char>, weeks_out: u32) -> DateRequest {
    DateRequest {
        city: city.into(),
        case_type,
        surname_initial: initial,
        weeks_out,
        issuing_squad: Squad::A,
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn fixed_wednesday_exactly_one_week_out() {
    let r = resolve_dates(
        &request("new-westminster", CaseType::Adult, None, 1),
        &data(),
        date(2025, 10, 8),
    )
    .unwrap();
    assert_eq!(r.court.date, date(2025, 10, 15));
    assert_eq!(r.court.day_type, DayType::Fixed);
    assert_eq!(r.fingerprint.date, date(2025, 10, 9));
    assert_eq!(
        r.copy_text,
        "Court date: Wednesday October 15 2025 at 0900hrs - New Westminster Law Courts: \
         651 Carnarvon Street, New Westminster, BC V3M 1C9 (Client needs to check docket \
         for court room number.) // Fingerprint date: Thursday October 9 2025 at 0900hrs - \
         MVTP HQ: 300-287 Nelson's Court, New Westminster, BC V3L 0E7"
    );
}

#[test]
fn surname_h_sits_on_tuesday() {
    // Target Wednesday 2025-10-15; G-L sits Tuesdays → 2025-10-21
    let r = resolve_dates(
        &request("vancouver", CaseType::Adult, Some('h'), 1),
        &data(),
        date(2025, 10, 8),
    )
    .unwrap();
    assert_eq!(r.court.date, date(2025, 10, 21));
    assert_eq!(r.court.date.weekday(), Weekday::Tuesday);
    assert_eq!(r.court_time, "1400hrs");
    assert_eq!(r.fingerprint.date, date(2025, 10, 16));
    // Vancouver's note stays off the copy line
    assert!(!r.copy_text.contains("covers"));
}

#[test]
fn thursday_court_gets_tuesday_fingerprint() {
    let r = resolve_dates(
        &request("vancouver", CaseType::Youth, None, 1),
        &data(),
        date(2025, 10, 9),
    )
    .unwrap();
    assert_eq!(r.court.date, date(2025, 10, 16));
    assert_eq!(r.fingerprint.date, date(2025, 10, 14));
    assert_eq!(r.fingerprint.target_weekday, Weekday::Tuesday);
    assert_eq!(r.fingerprint.days_before, 2);
}

#[test]
fn holiday_court_date_moves_a_week() {
    // North Vancouver youth sits Mondays; 2025-10-13 is Thanksgiving
    let r = resolve_dates(
        &request("north-vancouver", CaseType::Youth, None, 1),
        &data(),
        date(2025, 10, 6),
    )
    .unwrap();
    assert_eq!(r.court.target, date(2025, 10, 13));
    assert_eq!(r.court.date, date(2025, 10, 20));
    assert_eq!(r.court.adjustments, 1);
}

#[test]
fn flexible_holiday_moves_to_next_allowed_day() {
    let r = resolve_dates(
        &request("coquitlam", CaseType::Adult, None, 1),
        &data(),
        date(2025, 10, 6),
    )
    .unwrap();
    assert_eq!(r.court.date, date(2025, 10, 15));
    assert_eq!(r.court.day_type, DayType::Flexible);
}

#[test]
fn richmond_uses_the_published_table() {
    let d = data();
    let r = resolve_dates(
        &request("richmond", CaseType::Adult, Some('b'), 1),
        &d,
        date(2025, 10, 7),
    )
    .unwrap();
    assert_eq!(r.court.date, date(2025, 10, 14));
    assert_eq!(r.court.partition.as_deref(), Some("A-K"));
    assert_eq!(
        r.court_note.as_deref(),
        Some("This date is for last names A-K.")
    );

    let r = resolve_dates(
        &request("richmond", CaseType::Youth, Some('s'), 1),
        &d,
        date(2025, 10, 7),
    )
    .unwrap();
    assert_eq!(r.court.date, date(2025, 10, 21));
    assert_eq!(
        r.court_note.as_deref(),
        Some("This date is for last names L-Z. Youth attend the same court.")
    );
}

#[test]
fn richmond_beyond_the_table_is_a_resolution_error() {
    let err = resolve_dates(
        &request("richmond", CaseType::Adult, Some('b'), 8),
        &data(),
        date(2026, 1, 5),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Resolution { .. }));
    assert!(err.to_string().contains("richmond-2025"));
    assert!(!err.is_user_fixable());
}

#[test]
fn richmond_never_returns_a_past_date() {
    // L-Z ends 2025-12-23; from 2025-12-28 the closest listed date has passed
    let err = resolve_dates(
        &request("richmond", CaseType::Adult, Some('z'), 1),
        &data(),
        date(2025, 12, 28),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Resolution { .. }));
}

#[test]
fn closures_block_court_but_not_fingerprint_dates() {
    let data = ReferenceData::from_toml_str(
        r#"
        fingerprint_location = "HQ"

        [holidays]
        name = "none"
        dates = []

        [closures]
        general = ["2025-10-16"]
        cities = { surrey = ["2025-10-15"] }

        [[policies]]
        city = "surrey"
        case_type = "youth"
        time = "0930hrs"
        address = "Surrey"
        schedule = { day_type = "fixed", weekday = "Wednesday" }
        "#,
    )
    .unwrap();
    let r = resolve_dates(
        &request("surrey", CaseType::Youth, None, 1),
        &data,
        date(2025, 10, 8),
    )
    .unwrap();
    assert_eq!(r.court.date, date(2025, 10, 22));
    // Closures only block court; fingerprinting still lands on the closed Oct 16
    assert_eq!(r.fingerprint.date, date(2025, 10, 16));
    assert!(!r.fingerprint.is_holiday);
}

#[test]
fn bundled_holidays_agree_with_bc_rules() {
    let d = data();
    let generated = HolidaySet::from_calendar(&BritishColumbia, 2025).unwrap();
    assert_eq!(
        d.holidays().iter().collect::<Vec<_>>(),
        generated.iter().collect::<Vec<_>>()
    );
}

#[test]
fn unpublished_year_uses_bc_statutory_holidays() {
    // Surrey S-Z sits Fridays; target 2026-12-21 → Christmas, then New Year's Day
    let r = resolve_dates(
        &request("surrey", CaseType::Adult, Some('s'), 9),
        &data(),
        date(2026, 10, 19),
    )
    .unwrap();
    assert_eq!(r.court.target, date(2026, 12, 21));
    assert_eq!(r.court.date, date(2027, 1, 8));
    assert_eq!(r.court.adjustments, 2);
    assert!(!BritishColumbia.is_holiday(r.court.date));
    assert_eq!(r.fingerprint.date, date(2027, 1, 6));
    assert!(!r.fingerprint.is_holiday);
}

#[test]
fn unpublished_year_fingerprint_avoids_holidays() {
    // Monday court 2026-10-12 is Thanksgiving 2026, not in the 2025 table
    let r = resolve_dates(
        &request("north-vancouver", CaseType::Youth, None, 1),
        &data(),
        date(2026, 10, 5),
    )
    .unwrap();
    assert_eq!(r.court.date, date(2026, 10, 19));
    assert_eq!(r.court.adjustments, 1);
    assert_eq!(r.fingerprint.date, date(2026, 10, 15));
    assert!(BritishColumbia.is_business_day(r.fingerprint.date));
}

// ── Input validation ──────────────────────────────────────────────────────────

#[test]
fn input_errors() {
    let d = data();
    let today = date(2025, 10, 8);
    for (req, needle) in [
        (request("choose", CaseType::Adult, None, 1), "court city"),
        (request("", CaseType::Adult, None, 1), "court city"),
        (request("surrey", CaseType::Adult, None, 1), "first letter"),
        (request("surrey", CaseType::Adult, Some('7'), 1), "valid letter"),
        (request("surrey", CaseType::Youth, None, 0), "number of weeks"),
        (request("surrey", CaseType::Youth, None, 53), "number of weeks"),
    ] {
        let err = resolve_dates(&req, &d, today).unwrap_err();
        assert!(err.is_user_fixable(), "{err}");
        assert!(err.to_string().contains(needle), "{err}");
    }
}

#[test]
fn weeks_are_checked_before_the_policy_lookup() {
    let err = resolve_dates(
        &request("nowhere", CaseType::Youth, None, 0),
        &data(),
        date(2025, 10, 8),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InputValidation(_)), "{err}");
    assert!(err.is_user_fixable());
}

#[test]
fn unknown_city_is_a_configuration_error() {
    let err = resolve_dates(
        &request("victoria", CaseType::Adult, None, 1),
        &data(),
        date(2025, 10, 8),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn serialises_to_json() {
    let r = resolve_dates(
        &request("surrey", CaseType::Adult, Some('d'), 2),
        &data(),
        date(2025, 10, 8),
    )
    .unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["court"]["day_type"], "surname");
    assert_eq!(json["court"]["date"], r.court.date.to_string());
    assert_eq!(json["fingerprint"]["time"], "0900hrs");
}

// ── Properties ────────────────────────────────────────────────────────────────

const COURTS: [(&str, CaseType); 10] = [
    ("vancouver", CaseType::Adult),
    ("vancouver", CaseType::Youth),
    ("burnaby", CaseType::Adult),
    ("surrey", CaseType::Adult),
    ("surrey", CaseType::Youth),
    ("new-westminster", CaseType::Adult),
    ("coquitlam", CaseType::Adult),
    ("coquitlam", CaseType::Youth),
    ("north-vancouver", CaseType::Adult),
    ("north-vancouver", CaseType::Youth),
];

fn any_squad() -> impl Strategy<Value = Squad> {
    prop_oneof![Just(Squad::A), Just(Squad::B), Just(Squad::C), Just(Squad::D)]
}

fn any_request() -> impl Strategy<Value = DateRequest> {
    (0..COURTS.len(), prop::char::range('a', 'z'), 1u32..=52, any_squad()).prop_map(
        |(i, initial, weeks_out, issuing_squad)| DateRequest {
            city: COURTS[i].0.into(),
            case_type: COURTS[i].1,
            surname_initial: Some(initial),
            weeks_out,
            issuing_squad,
        },
    )
}

/// Any day from 2025 through 2028, mostly outside the published holiday year.
fn any_today() -> impl Strategy<Value = Date> {
    (0i32..4 * 365).prop_map(|n| date(2025, 1, 1).add_days(n).unwrap())
}

proptest! {
    #[test]
    fn prop_fingerprint_precedes_court(req in any_request(), today in any_today()) {
        let r = resolve_dates(&req, &data(), today).unwrap();
        let fp = &r.fingerprint;
        prop_assert!(r.court.date - fp.date >= 2);
        prop_assert!(fp.date.weekday().is_weekday());
        prop_assert!(!BritishColumbia.is_holiday(r.court.date), "court on {}", r.court.date);
        prop_assert!(fp.is_holiday || BritishColumbia.is_business_day(fp.date));
        prop_assert_eq!(fp.time.as_str(), req.issuing_squad.shift().appointment_time());
    }

    #[test]
    fn prop_richmond_is_published_or_stale(
        initial in prop::char::range('a', 'z'),
        weeks_out in 1u32..=52,
        n in 0i32..500,
    ) {
        let d = data();
        let today = date(2024, 12, 1).add_days(n).unwrap();
        let req = DateRequest {
            city: "richmond".into(),
            case_type: CaseType::Adult,
            surname_initial: Some(initial),
            weeks_out,
            issuing_squad: Squad::B,
        };
        match resolve_dates(&req, &d, today) {
            Ok(r) => {
                let partition = d.tables()[0].partition_for(initial).unwrap();
                prop_assert!(partition.contains(r.court.date));
                prop_assert!(r.court.date > today);
                prop_assert!(!BritishColumbia.is_holiday(r.court.date));
                prop_assert!(r.court.date - r.fingerprint.date >= 2);
            }
            Err(err) => prop_assert!(matches!(err, Error::Resolution { .. }), "{}", err),
        }
    }

    #[test]
    fn prop_resolution_is_idempotent(req in any_request(), today in any_today()) {
        let d = data();
        prop_assert_eq!(
            resolve_dates(&req, &d, today).unwrap(),
            resolve_dates(&req, &d, today).unwrap()
        );
    }

    #[test]
    fn prop_working_squads_have_period_eight(n in -2_000i32..2_000) {
        let rotation = SquadRotation::reference().unwrap();
        let d = rotation.anchor().add_days(n).unwrap();
        prop_assert_eq!(
            rotation.working_squads(d),
            rotation.working_squads(d.add_days(8).unwrap())
        );
        let expected = if n.rem_euclid(8) < 4 {
            WorkingSquads { day: Squad::A, night: Squad::B }
        } else {
            WorkingSquads { day: Squad::C, night: Squad::D }
        };
        prop_assert_eq!(rotation.working_squads(d), expected);
    }
}
