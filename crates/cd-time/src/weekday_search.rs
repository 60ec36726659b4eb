//! Weekday arithmetic: finding the next or closest occurrence of a weekday.
//!
//! Both searches only ever move forward from their starting date.  The
//! closest-weekday search looks backward when *choosing* a weekday, but the
//! date it returns is always the next occurrence of that weekday.

use crate::date::Date;
use crate::weekday::Weekday;
use cd_core::errors::Result;
use cd_core::fail;

/// Return the first date on or after `from` that falls on `weekday`.
///
/// Returns `from` unchanged when it already falls on `weekday`; otherwise
/// advances 1–6 days.
pub fn next_occurrence(from: Date, weekday: Weekday) -> Result<Date> {
    let ahead = from.weekday().days_until(weekday);
    from.add_days(ahead as i32)
}

/// Return the most recent date on or before `from` that falls on `weekday`.
pub fn previous_occurrence(from: Date, weekday: Weekday) -> Result<Date> {
    let back = from.weekday().days_since(weekday);
    from.add_days(-(back as i32))
}

/// Pick the allowed weekday closest to the weekday of `target`.
///
/// Distance is circular over the week, `min(forward, backward)`.  When a
/// forward and a backward candidate are equally close, the forward one
/// wins.  When the weekday of `target` is itself allowed it is returned.
///
/// # Errors
/// Returns a configuration error if `allowed` is empty.
pub fn closest_allowed_weekday(target: Weekday, allowed: &[Weekday]) -> Result<Weekday> {
    if allowed.is_empty() {
        fail!(Configuration, "no permitted weekdays configured");
    }
    if allowed.contains(&target) {
        return Ok(target);
    }
    // Key: (distance, reached backward); forward sorts first on ties.
    let best = allowed
        .iter()
        .map(|&w| {
            let forward = target.days_until(w);
            let backward = target.days_since(w);
            (forward.min(backward), backward < forward, w)
        })
        .min_by_key(|&(distance, backward, _)| (distance, backward));
    match best {
        Some((_, _, w)) => Ok(w),
        None => fail!(Configuration, "no permitted weekdays configured"),
    }
}

/// Resolve `target` to a date whose weekday is in `allowed`.
///
/// Returns `target` if its weekday is allowed.  Otherwise picks the closest
/// allowed weekday (see [`closest_allowed_weekday`]) and returns its next
/// occurrence on or after `target`.
pub fn closest_weekday_from(target: Date, allowed: &[Weekday]) -> Result<Date> {
    let weekday = closest_allowed_weekday(target.weekday(), allowed)?;
    next_occurrence(target, weekday)
}
