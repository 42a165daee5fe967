//! Free functions over [`PersianDate`]: comparison, differences, Iranian
//! holidays, business-day stepping, seasons, age, ranges and month bounds.
//!
//! All functions are pure apart from [`calculate_age_today`], which reads
//! [`PersianDate::today`].  None of them validate their inputs beyond what
//! `PersianDate` arithmetic already reports.

use pd_core::errors::Result;
use tracing::debug;

use crate::calendar::Calendar;
use crate::calendars::Iran;
use crate::date::PersianDate;
use crate::season::Season;

// ── Comparison ────────────────────────────────────────────────────────────────

/// Return `true` if `a` falls strictly after `b`.
pub fn is_after(a: PersianDate, b: PersianDate) -> bool {
    a.to_gregorian() > b.to_gregorian()
}

/// Return `true` if `a` falls strictly before `b`.
pub fn is_before(a: PersianDate, b: PersianDate) -> bool {
    a.to_gregorian() < b.to_gregorian()
}

/// Return `true` if `a` and `b` are the same day.
pub fn is_equal(a: PersianDate, b: PersianDate) -> bool {
    a.to_gregorian() == b.to_gregorian()
}

// ── Differences ───────────────────────────────────────────────────────────────

/// Whole days from `start` to `end`; negative if `end` precedes `start`.
pub fn days_between(start: PersianDate, end: PersianDate) -> i64 {
    (end.to_gregorian() - start.to_gregorian()).num_days()
}

/// Calendar months from `start` to `end`, counted on the year and month
/// fields only.
///
/// The day of the month is ignored, so Farvardin 31 to Ordibehesht 1 is one
/// month.
pub fn months_between(start: PersianDate, end: PersianDate) -> i64 {
    let (sy, sm, _) = start.ymd();
    let (ey, em, _) = end.ymd();
    (ey as i64 - sy as i64) * 12 + (em as i64 - sm as i64)
}

/// Difference of the year fields.  Not a count of elapsed full years; see
/// [`calculate_age`] for that.
pub fn years_between(start: PersianDate, end: PersianDate) -> i64 {
    end.year() as i64 - start.year() as i64
}

// ── Holidays and business days ────────────────────────────────────────────────

/// Return `true` if `date` is a Friday or one of the fixed Iranian holidays.
pub fn is_holiday(date: PersianDate) -> bool {
    Iran.is_holiday(date)
}

/// Step `n` business days from `start` on the [`Iran`] calendar.
///
/// Moves forward for positive `n` and backward for negative `n`.  Only days
/// that are neither Fridays nor holidays are counted; the date landed on is
/// returned.  `n == 0` returns `start` unchanged.
pub fn add_business_days(start: PersianDate, n: i32) -> Result<PersianDate> {
    add_business_days_in(&Iran, start, n)
}

/// Like [`add_business_days`], with the holidays supplied by `calendar`.
///
/// Fridays are never counted, whatever `calendar` reports for them.
pub fn add_business_days_in<C>(calendar: &C, start: PersianDate, n: i32) -> Result<PersianDate>
where
    C: Calendar + ?Sized,
{
    let step: i32 = if n >= 0 { 1 } else { -1 };
    let mut remaining = n.unsigned_abs();
    let mut end = start;
    while remaining > 0 {
        end = end.add_days(step)?;
        if !end.weekday().is_friday() && calendar.is_business_day(end) {
            remaining -= 1;
        }
    }
    debug!(calendar = calendar.name(), %start, n, %end, "advanced business days");
    Ok(end)
}

// ── Season ────────────────────────────────────────────────────────────────────

/// Return the season of `date`.
pub fn season(date: PersianDate) -> Season {
    Season::of_month(date.month())
}

/// Return the Persian name of the season of `date`: `"بهار"`, `"تابستان"`,
/// `"پاییز"` or `"زمستان"`.
pub fn season_name(date: PersianDate) -> &'static str {
    season(date).persian_name()
}

// ── Age ───────────────────────────────────────────────────────────────────────

/// Age in full years on `today` of someone born on `birth`.
///
/// One is subtracted from the year difference when the birthday has not
/// yet come around in `today`'s year.
pub fn calculate_age(birth: PersianDate, today: PersianDate) -> i32 {
    let (by, bm, bd) = birth.ymd();
    let (ty, tm, td) = today.ymd();
    let mut age = ty as i32 - by as i32;
    if tm < bm || (tm == bm && td < bd) {
        age -= 1;
    }
    age
}

/// [`calculate_age`] against [`PersianDate::today`].
pub fn calculate_age_today(birth: PersianDate) -> Result<i32> {
    Ok(calculate_age(birth, PersianDate::today()?))
}

// ── Ranges and month bounds ───────────────────────────────────────────────────

/// Every date from `start` through `end` inclusive, in order.
///
/// Empty when `start` is after `end`.
pub fn date_range(start: PersianDate, end: PersianDate) -> Vec<PersianDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while !is_after(current, end) {
        dates.push(current);
        match current.add_days(1) {
            Ok(next) => current = next,
            // `end` is the last supported date.
            Err(_) => break,
        }
    }
    debug!(%start, %end, len = dates.len(), "generated date range");
    dates
}

/// The first day of the month containing `date`.
pub fn first_day_of_month(date: PersianDate) -> PersianDate {
    let (y, m, _) = date.ymd();
    PersianDate::from_ymd_unchecked(y, m, 1)
}

/// The last day of the month containing `date`.
pub fn last_day_of_month(date: PersianDate) -> PersianDate {
    let (y, m, _) = date.ymd();
    PersianDate::from_ymd_unchecked(y, m, date.days_in_month())
}
