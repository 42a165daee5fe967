//! Bespoke calendar — a calendar with user-defined holidays.

use std::collections::BTreeSet;

use pd_core::ensure;
use pd_core::errors::Result;

use crate::calendar::Calendar;
use crate::calendars::iran::FIXED_HOLIDAYS;
use crate::date::PersianDate;

/// A calendar where holidays are added manually at run time.
///
/// Fridays are always non-business days.  Start from
/// [`BespokeCalendar::iran`] to extend the fixed Iranian holidays with
/// moving ones, such as those of the lunar Hijri calendar.
#[derive(Debug, Clone)]
pub struct BespokeCalendar {
    name: String,
    holidays: BTreeSet<PersianDate>,
    recurring: BTreeSet<(u8, u8)>,
}

impl BespokeCalendar {
    /// Create a new bespoke calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
            recurring: BTreeSet::new(),
        }
    }

    /// Create a calendar pre-loaded with the fixed Iranian holidays as
    /// recurring (month, day) entries.
    pub fn iran(name: impl Into<String>) -> Self {
        let mut cal = Self::new(name);
        cal.recurring
            .extend(FIXED_HOLIDAYS.iter().map(|&(m, d, _)| (m, d)));
        cal
    }

    /// Add a one-off holiday.
    pub fn add_holiday(&mut self, date: PersianDate) {
        self.holidays.insert(date);
    }

    /// Remove a previously added one-off holiday.
    pub fn remove_holiday(&mut self, date: PersianDate) {
        self.holidays.remove(&date);
    }

    /// Add a holiday recurring every year on the given month and day.
    ///
    /// Esfand 30 is accepted and only applies in leap years.
    pub fn add_recurring_holiday(&mut self, month: u8, day: u8) -> Result<()> {
        ensure!((1..=12).contains(&month), "month {month} out of range [1, 12]");
        let max_day = if month <= 6 { 31 } else { 30 };
        ensure!(
            (1..=max_day).contains(&day),
            "day {day} out of range [1, {max_day}] for month {month}"
        );
        self.recurring.insert((month, day));
        Ok(())
    }

    /// Remove a recurring holiday.
    pub fn remove_recurring_holiday(&mut self, month: u8, day: u8) {
        self.recurring.remove(&(month, day));
    }

    /// Return the number of explicitly-added holidays, one-off and recurring.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len() + self.recurring.len()
    }
}

impl Calendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: PersianDate) -> bool {
        if self.is_weekend(date) || self.holidays.contains(&date) {
            return false;
        }
        let (_, m, d) = date.ymd();
        !self.recurring.contains(&(m, d))
    }
}
