//! `Calendar` trait.
//!
//! A calendar knows which dates are business days and can adjust or step
//! dates according to a [`BusinessDayConvention`].  Every calendar in this
//! crate follows the Iranian week, where Friday is the weekly day of rest.

use pd_core::errors::Result;
use tracing::trace;

use crate::business_day_convention::BusinessDayConvention;
use crate::date::PersianDate;

/// A business-day calendar over Persian dates.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Iran"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: PersianDate) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: PersianDate) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// The default weekend is Friday alone.
    fn is_weekend(&self, date: PersianDate) -> bool {
        date.weekday().is_friday()
    }

    /// Return the last business day of the month containing `date`.
    fn end_of_month(&self, date: PersianDate) -> Result<PersianDate> {
        let (y, m, _) = date.ymd();
        let last = PersianDate::from_ymd_unchecked(y, m, date.days_in_month());
        self.adjust(last, BusinessDayConvention::Preceding)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: PersianDate, convention: BusinessDayConvention) -> Result<PersianDate> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d.add_days(1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::Preceding => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d.add_days(-1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::ModifiedFollowing => {
                match self.adjust(date, BusinessDayConvention::Following) {
                    Ok(adjusted) if adjusted.month() == date.month() => Ok(adjusted),
                    _ => self.adjust(date, BusinessDayConvention::Preceding),
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                match self.adjust(date, BusinessDayConvention::Preceding) {
                    Ok(adjusted) if adjusted.month() == date.month() => Ok(adjusted),
                    _ => self.adjust(date, BusinessDayConvention::Following),
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date) {
                    return Ok(date);
                }
                // A side that runs off the supported range loses to the other.
                let fwd = self.adjust(date, BusinessDayConvention::Following);
                let bwd = self.adjust(date, BusinessDayConvention::Preceding);
                match (fwd, bwd) {
                    (Ok(f), Ok(b)) if f - date <= date - b => Ok(f),
                    (Ok(_), Ok(b)) => Ok(b),
                    (Ok(f), Err(_)) => Ok(f),
                    (Err(_), Ok(b)) => Ok(b),
                    (Err(e), Err(_)) => Err(e),
                }
            }
        }
    }

    /// Advance `date` by `n` business days.
    ///
    /// Steps one calendar day at a time in the direction of `n` and counts
    /// only the business days landed on.  `n == 0` returns `date` unchanged,
    /// even if it is a holiday.
    fn advance_business_days(&self, date: PersianDate, n: i32) -> Result<PersianDate> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        let mut d = date;
        while remaining > 0 {
            d = d.add_days(step)?;
            if self.is_business_day(d) {
                remaining -= 1;
            } else {
                trace!(calendar = self.name(), date = %d, "skipping non-business day");
            }
        }
        Ok(d)
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: PersianDate, d2: PersianDate) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| PersianDate::from_serial(s).ok())
            .filter(|&d| self.is_business_day(d))
            .count() as i32;
        sign * count
    }

    /// All holidays (weekends included) in the inclusive range `[from, to]`.
    fn holiday_list(&self, from: PersianDate, to: PersianDate) -> Vec<PersianDate> {
        (from.serial()..=to.serial())
            .filter_map(|s| PersianDate::from_serial(s).ok())
            .filter(|&d| self.is_holiday(d))
            .collect()
    }
}

/// A calendar that treats only Fridays as non-business days, with no
/// additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct FridaysOnly;

impl Calendar for FridaysOnly {
    fn name(&self) -> &str {
        "Fridays Only"
    }

    fn is_business_day(&self, date: PersianDate) -> bool {
        !self.is_weekend(date)
    }
}
