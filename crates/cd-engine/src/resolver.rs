//! Court date resolver.
//!
//! The target date is `today + weeks_out` weeks.  The court's
//! [`DaySchedule`] turns the target into a sitting date, which is then
//! moved off holidays and closures:
//!
//! * **Fixed / Surname**: the next occurrence of the court weekday; a
//!   blocked date moves a week at a time.
//! * **Flexible**: the closest permitted weekday; a blocked date moves to
//!   the next permitted, unblocked day within [`FLEXIBLE_LOOKAHEAD_DAYS`].
//! * **Calendar**: the published date closest to the target; a blocked date
//!   moves to the next published date in the same partition.

use cd_core::errors::{Error, Result};
use cd_core::{ensure, fail};
use cd_time::{closest_weekday_from, next_occurrence, Calendar, Date, Weekday};
use serde::Serialize;
use tracing::{debug, warn};

use crate::policy::{CourtPolicy, DaySchedule, DayType};
use crate::rotation_table::CalendarRotationTable;
use crate::surname::normalize_initial;

/// Smallest accepted lookahead.
pub const MIN_WEEKS_OUT: u32 = 1;

/// Largest accepted lookahead.
pub const MAX_WEEKS_OUT: u32 = 52;

/// How many one-week steps a fixed-weekday court may be moved off holidays.
pub const MAX_HOLIDAY_WEEK_STEPS: u32 = 52;

/// Days scanned after a blocked flexible-court date.
pub const FLEXIBLE_LOOKAHEAD_DAYS: i32 = 14;

/// A validated lookahead in weeks, within `[1, 52]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LookaheadWeeks(u32);

impl LookaheadWeeks {
    /// Validate a lookahead.
    pub fn new(weeks: u32) -> Result<Self> {
        ensure!(
            (MIN_WEEKS_OUT..=MAX_WEEKS_OUT).contains(&weeks),
            InputValidation,
            "Please enter a valid number of weeks ({MIN_WEEKS_OUT}-{MAX_WEEKS_OUT})."
        );
        Ok(Self(weeks))
    }

    /// Number of weeks.
    pub fn weeks(&self) -> u32 {
        self.0
    }

    /// `today` moved forward by this many weeks.
    pub fn target_from(&self, today: Date) -> Result<Date> {
        today.add_weeks(self.0 as i32)
    }
}

/// A resolved court date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourtDateResult {
    /// The sitting date.
    pub date: Date,
    /// `today + weeks_out`: what the search started from.
    pub target: Date,
    /// Kind of schedule that produced the date.
    pub day_type: DayType,
    /// Rotation partition (e.g. `"A-K"`) for calendar courts.
    pub partition: Option<String>,
    /// Number of holiday/closure adjustments applied.
    pub adjustments: u32,
}

/// Resolves court dates against a holiday/closure calendar and the
/// published rotation tables.
#[derive(Debug, Clone, Copy)]
pub struct CourtDateResolver<'a> {
    calendar: &'a dyn Calendar,
    rotation_tables: &'a [CalendarRotationTable],
}

impl<'a> CourtDateResolver<'a> {
    /// `calendar` decides which dates are blocked (holidays and closures).
    pub fn new(calendar: &'a dyn Calendar, rotation_tables: &'a [CalendarRotationTable]) -> Self {
        Self {
            calendar,
            rotation_tables,
        }
    }

    /// Resolve the court date for `policy`.
    ///
    /// `initial` is required for calendar and surname courts.
    pub fn resolve(
        &self,
        policy: &CourtPolicy,
        initial: Option<char>,
        today: Date,
        weeks_out: LookaheadWeeks,
    ) -> Result<CourtDateResult> {
        let target = weeks_out.target_from(today)?;
        debug!(
            city = %policy.city,
            case_type = %policy.case_type,
            day_type = %policy.schedule.day_type(),
            %today,
            %target,
            "resolving court date"
        );
        let initial = if policy.schedule.needs_surname_initial() {
            match initial {
                Some(c) => Some(normalize_initial(c)?),
                None => fail!(
                    InputValidation,
                    "Please enter the first letter of the last name."
                ),
            }
        } else {
            None
        };

        let (date, partition, adjustments) = match (&policy.schedule, initial) {
            (DaySchedule::Calendar { table }, Some(initial)) => {
                let (date, partition, adjustments) = self.from_table(table, initial, today, target)?;
                (date, Some(partition), adjustments)
            }
            (DaySchedule::Fixed { weekday }, _) => {
                let (date, adjustments) = self.weekly(next_occurrence(target, *weekday)?)?;
                (date, None, adjustments)
            }
            (DaySchedule::Surname { rules }, Some(initial)) => {
                let weekday = rules.weekday_for(initial)?;
                debug!(%initial, %weekday, "surname rule matched");
                let (date, adjustments) = self.weekly(next_occurrence(target, weekday)?)?;
                (date, None, adjustments)
            }
            (DaySchedule::Flexible { days }, _) => {
                let (date, adjustments) = self.flexible(target, days)?;
                (date, None, adjustments)
            }
            (DaySchedule::Calendar { .. } | DaySchedule::Surname { .. }, None) => {
                fail!(
                    InputValidation,
                    "Please enter the first letter of the last name."
                )
            }
        };

        debug!(%date, adjustments, "court date resolved");
        Ok(CourtDateResult {
            date,
            target,
            day_type: policy.schedule.day_type(),
            partition,
            adjustments,
        })
    }

    /// Step a fixed weekday forward a week at a time until it is not blocked.
    fn weekly(&self, mut date: Date) -> Result<(Date, u32)> {
        let mut steps = 0;
        while self.calendar.is_holiday(date) {
            if steps == MAX_HOLIDAY_WEEK_STEPS {
                return Err(Error::resolution(
                    "court date",
                    format!(
                        "every {} for {MAX_HOLIDAY_WEEK_STEPS} weeks is a holiday or closure in {}",
                        date.weekday(),
                        self.calendar.name()
                    ),
                ));
            }
            warn!(%date, "court date falls on a holiday or closure, moving one week");
            date = date.add_weeks(1)?;
            steps += 1;
        }
        Ok((date, steps))
    }

    /// Closest permitted weekday; if blocked, the next permitted day that is
    /// not, within the lookahead.
    fn flexible(&self, target: Date, days: &[Weekday]) -> Result<(Date, u32)> {
        let first = closest_weekday_from(target, days)?;
        if !self.calendar.is_holiday(first) {
            return Ok((first, 0));
        }
        warn!(date = %first, "flexible court date is blocked, scanning forward");
        for offset in 1..=FLEXIBLE_LOOKAHEAD_DAYS {
            let candidate = first.add_days(offset)?;
            if days.contains(&candidate.weekday()) && !self.calendar.is_holiday(candidate) {
                return Ok((candidate, 1));
            }
        }
        Err(Error::resolution(
            "flexible court day",
            format!(
                "{FLEXIBLE_LOOKAHEAD_DAYS}-day lookahead after {first} exhausted \
                 (permitted days: {})",
                days.iter()
                    .map(Weekday::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        ))
    }

    /// Closest published date after `today`; if blocked, the next published
    /// date that is not.
    fn from_table(
        &self,
        name: &str,
        initial: char,
        today: Date,
        target: Date,
    ) -> Result<(Date, String, u32)> {
        let table = self
            .rotation_tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| {
                Error::Configuration(format!("rotation table '{name}' is not loaded"))
            })?;
        let partition = table.partition_for(initial)?;
        let label = partition.letters.to_string();

        let stale = |detail: String| Error::resolution("published court date", detail);
        let (first, last) = partition
            .horizon()
            .ok_or_else(|| stale(format!("table '{name}' partition {label} lists no dates")))?;
        let tolerance = table.horizon_tolerance_days;
        if target < first.add_days(-tolerance)? || target > last.add_days(tolerance)? {
            return Err(stale(format!(
                "target {target} is outside table '{name}' partition {label} \
                 (covers {first} to {last}); the table needs republishing"
            )));
        }

        let mut start = partition
            .closest_index(target)
            .ok_or_else(|| stale(format!("table '{name}' partition {label} lists no dates")))?;
        // Never hand out a date that has already passed.
        while start < partition.dates.len() && partition.dates[start] <= today {
            start += 1;
        }
        if start == partition.dates.len() {
            return Err(stale(format!(
                "table '{name}' partition {label} has no dates after {today}; \
                 the table needs republishing"
            )));
        }
        let closest = partition.dates[start];
        debug!(table = name, partition = %label, %closest, "published date selected");

        for (steps, &date) in partition.dates[start..].iter().enumerate() {
            if !self.calendar.is_holiday(date) {
                return Ok((date, label, steps as u32));
            }
            warn!(%date, "published court date is a holiday or closure, taking the next listed date");
        }
        Err(stale(format!(
            "every date in table '{name}' partition {label} from {} is a holiday or closure; \
             the table needs republishing",
            partition.dates[start]
        )))
    }
}
