//! # pd-time
//!
//! Persian (Jalali) dates, the Iranian business-day calendar, and the
//! utility functions built on them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and the Friday-only base calendar.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `PersianDate` type.
pub mod date;

/// ASCII / Persian digit transliteration.
pub mod digits;

/// `Month` — Farvardin to Esfand.
pub mod month;

/// `Season` — spring, summer, autumn, winter.
pub mod season;

/// Comparison, difference, holiday, range and age helpers.
pub mod utils;

/// `Weekday` — day of the week, Saturday first.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, FridaysOnly};
pub use calendars::{BespokeCalendar, Iran};
pub use date::PersianDate;
pub use digits::{to_english_digits, to_persian_digits};
pub use month::Month;
pub use season::Season;
pub use weekday::Weekday;
