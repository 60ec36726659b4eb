//! Fingerprint appointment dates.
//!
//! Fingerprinting is booked on a fixed weekday that depends on the court
//! weekday, at least [`MIN_LEAD_DAYS`] days before court.  Holidays push the
//! appointment back a week at a time.

use cd_core::errors::Result;
use cd_time::{previous_occurrence, Calendar, Date, Weekday};
use serde::Serialize;
use tracing::{debug, warn};

use crate::squad::{Squad, SquadRotation};

/// Minimum number of days between fingerprinting and court.
pub const MIN_LEAD_DAYS: i32 = 2;

/// Number of weekly candidates tried before giving up.
pub const MAX_CANDIDATES: u32 = 8;

/// Fingerprint weekday for a court sitting on `court_day`.
pub fn fingerprint_target_weekday(court_day: Weekday) -> Weekday {
    match court_day {
        Weekday::Monday | Weekday::Tuesday | Weekday::Wednesday => Weekday::Thursday,
        Weekday::Thursday => Weekday::Tuesday,
        Weekday::Friday => Weekday::Wednesday,
        Weekday::Saturday | Weekday::Sunday => Weekday::Thursday,
    }
}

/// A computed fingerprint appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FingerprintResult {
    /// Appointment date.
    pub date: Date,
    /// Appointment time, `0900hrs` or `1800hrs`.
    pub time: String,
    /// Where to attend.
    pub location: String,
    /// Set when no holiday-free candidate was found.
    pub is_holiday: bool,
    /// Days between the appointment and court.
    pub days_before: i32,
    /// Weekday the appointment was aimed at.
    pub target_weekday: Weekday,
    /// Squad that issued the paperwork.
    pub issuing_squad: Squad,
    /// Squad on the issuing squad's shift on the appointment date.
    pub working_squad: Squad,
    /// Whether the issuing squad itself is on duty that day.
    pub is_issuing_squad_on_duty: bool,
}

/// Computes fingerprint dates from a court date.
#[derive(Debug, Clone, Copy)]
pub struct FingerprintCalculator<'a> {
    holidays: &'a dyn Calendar,
    rotation: SquadRotation,
    location: &'a str,
}

impl<'a> FingerprintCalculator<'a> {
    /// Only holidays (not court closures) block fingerprint dates.
    pub fn new(holidays: &'a dyn Calendar, rotation: SquadRotation, location: &'a str) -> Self {
        Self {
            holidays,
            rotation,
            location,
        }
    }

    /// Fingerprint appointment for a court date.
    pub fn calculate(&self, court_date: Date, issuing_squad: Squad) -> Result<FingerprintResult> {
        let target_weekday = fingerprint_target_weekday(court_date.weekday());
        let first = previous_occurrence(court_date.add_days(-MIN_LEAD_DAYS)?, target_weekday)?;

        let mut candidate = first;
        let mut found = None;
        for attempt in 0..MAX_CANDIDATES {
            if self.holidays.is_business_day(candidate) {
                found = Some(candidate);
                break;
            }
            debug!(%candidate, attempt, "fingerprint candidate is not a business day");
            candidate = candidate.add_weeks(-1)?;
        }

        let (date, is_holiday) = match found {
            Some(date) => (date, false),
            None => {
                warn!(
                    %court_date,
                    first = %first,
                    "no business day among {MAX_CANDIDATES} fingerprint candidates, using the first"
                );
                (first, true)
            }
        };

        let shift = issuing_squad.shift();
        let working_squad = self.rotation.working_squads(date).on_shift(shift);
        debug!(%date, %working_squad, %issuing_squad, "fingerprint date resolved");
        Ok(FingerprintResult {
            date,
            time: shift.appointment_time().to_string(),
            location: self.location.to_string(),
            is_holiday,
            days_before: court_date - date,
            target_weekday,
            issuing_squad,
            working_squad,
            is_issuing_squad_on_duty: working_squad == issuing_squad,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cd_time::{HolidaySet, NoHolidays};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn calculator(holidays: &dyn Calendar) -> FingerprintCalculator<'_> {
        FingerprintCalculator::new(holidays, SquadRotation::reference().unwrap(), "HQ")
    }

    #[test]
    fn target_weekdays() {
        assert_eq!(fingerprint_target_weekday(Weekday::Monday), Weekday::Thursday);
        assert_eq!(fingerprint_target_weekday(Weekday::Wednesday), Weekday::Thursday);
        assert_eq!(fingerprint_target_weekday(Weekday::Thursday), Weekday::Tuesday);
        assert_eq!(fingerprint_target_weekday(Weekday::Friday), Weekday::Wednesday);
        assert_eq!(fingerprint_target_weekday(Weekday::Sunday), Weekday::Thursday);
    }

    #[test]
    fn thursday_court_is_printed_on_the_tuesday_before() {
        // Thursday 2025-10-16: Tuesday two days earlier is exactly the lead
        let r = calculator(&NoHolidays)
            .calculate(date(2025, 10, 16), Squad::A)
            .unwrap();
        assert_eq!(r.date, date(2025, 10, 14));
        assert_eq!(r.days_before, 2);
        assert_eq!(r.time, "0900hrs");
        assert!(!r.is_holiday);
    }

    #[test]
    fn wednesday_court_uses_previous_week_thursday() {
        let r = calculator(&NoHolidays)
            .calculate(date(2025, 10, 15), Squad::B)
            .unwrap();
        assert_eq!(r.date, date(2025, 10, 9));
        assert_eq!(r.time, "1800hrs");
        assert_eq!(r.days_before, 6);
    }

    #[test]
    fn holiday_steps_back_a_week() {
        // Court Tue 2025-11-18 → Thu Nov 13; make Nov 13 a holiday
        let holidays = HolidaySet::new("test", [date(2025, 11, 13)]);
        let r = calculator(&holidays)
            .calculate(date(2025, 11, 18), Squad::C)
            .unwrap();
        assert_eq!(r.date, date(2025, 11, 6));
        assert!(!r.is_holiday);
    }

    #[test]
    fn exhausted_search_flags_the_first_candidate() {
        let first = date(2025, 11, 13);
        let blocked: Vec<Date> = (0..MAX_CANDIDATES as i32)
            .map(|i| first.add_weeks(-i).unwrap())
            .collect();
        let holidays = HolidaySet::new("test", blocked);
        let r = calculator(&holidays)
            .calculate(date(2025, 11, 18), Squad::A)
            .unwrap();
        assert_eq!(r.date, first);
        assert!(r.is_holiday);
    }

    #[test]
    fn working_squad_follows_the_rotation() {
        let calc = calculator(&NoHolidays);
        // Thursday court 2025-05-01 → Tuesday 2025-04-29
        let r = calc.calculate(date(2025, 5, 1), Squad::A).unwrap();
        assert_eq!(r.date, date(2025, 4, 29));
        assert_eq!(r.working_squad, Squad::A);
        assert!(r.is_issuing_squad_on_duty);

        // Monday court 2025-05-05 → Thursday 2025-05-01 (anchor + 3): A/B
        let r = calc.calculate(date(2025, 5, 5), Squad::D).unwrap();
        assert_eq!(r.date, date(2025, 5, 1));
        assert_eq!(r.working_squad, Squad::B);
        assert!(!r.is_issuing_squad_on_duty);
    }
}
