//! `resolve_dates`: one request in, court and fingerprint dates out.

use cd_core::errors::Result;
use cd_time::{BritishColumbia, Calendar, CourtCalendar, Date, SupplementedHolidays};
use serde::{Deserialize, Serialize};
use tracing::{info_span, warn};

use crate::assembler::{assemble, DateResolution};
use crate::fingerprint::FingerprintCalculator;
use crate::policy::CaseType;
use crate::reference::ReferenceData;
use crate::resolver::{CourtDateResolver, LookaheadWeeks};
use crate::squad::Squad;

/// What the operator asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRequest {
    /// Court city identifier.
    pub city: String,
    /// Adult or youth.
    pub case_type: CaseType,
    /// First letter of the last name; required by calendar and surname courts.
    pub surname_initial: Option<char>,
    /// Weeks from today to aim the court date at, 1 to 52.
    pub weeks_out: u32,
    /// Squad issuing the appearance notice.
    pub issuing_squad: Squad,
}

/// Resolve the court and fingerprint dates for `request`.
///
/// Court dates avoid holidays and the closures of the court's city;
/// fingerprint dates only avoid holidays.  Years missing from the published
/// holiday table use the British Columbia statutory rules.  With a fixed
/// `today` the result is deterministic.
pub fn resolve_dates(
    request: &DateRequest,
    data: &ReferenceData,
    today: Date,
) -> Result<DateResolution> {
    let _span = info_span!(
        "resolve_dates",
        city = %request.city,
        case_type = %request.case_type,
        squad = %request.issuing_squad,
    )
    .entered();

    let weeks = LookaheadWeeks::new(request.weeks_out)?;
    let policy = data.policy(&request.city, request.case_type)?;

    let holidays = SupplementedHolidays::new(data.holidays(), &BritishColumbia);
    let target = weeks.target_from(today)?;
    let mut years = vec![today.year(), target.year()];
    years.dedup();
    for year in years {
        if !holidays.is_published(year) {
            warn!(
                year,
                table = %data.holidays().name(),
                "holiday table does not list this year, using BC statutory rules"
            );
        }
    }

    let court_calendar = CourtCalendar::new(&holidays, data.closures(), &policy.city);
    let court = CourtDateResolver::new(&court_calendar, data.tables()).resolve(
        policy,
        request.surname_initial,
        today,
        weeks,
    )?;

    let fingerprint = FingerprintCalculator::new(
        &holidays,
        data.rotation(),
        data.fingerprint_location(),
    )
    .calculate(court.date, request.issuing_squad)?;

    Ok(assemble(policy, court, fingerprint))
}
