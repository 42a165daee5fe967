//! `PersianDate` type.
//!
//! Dates are stored as a serial number of days on the proleptic Gregorian
//! calendar, with serial 1 = January 1, year 1 (the same count as
//! `chrono::Datelike::num_days_from_ce`).  Ordering, equality and day
//! differences therefore come straight from the serial, and the Persian
//! fields are derived on demand.
//!
//! # Leap years
//! Persian leap years follow the 33-year cycle, corrected by a table of
//! break years (Borkowski's algorithm).  The break table is valid for Persian
//! years −61 to 3177; this type supports years 1 to 3176 so that every
//! supported serial also has a valid following Gregorian year.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use pd_core::errors::{Error, Result};
use pd_core::Settings;
use tracing::{debug, warn};

use crate::digits::to_english_digits;
use crate::month::Month;
use crate::weekday::Weekday;

/// A date on the Persian (Jalali) solar calendar.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersianDate(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl PersianDate {
    /// First supported Persian year.
    pub const MIN_YEAR: u16 = 1;

    /// Last supported Persian year.
    pub const MAX_YEAR: u16 = 3176;

    /// Minimum supported date: 0001/01/01 (March 22, 622).
    pub const MIN: PersianDate = PersianDate(226_896);

    /// Maximum supported date: 3176/12/29.
    pub const MAX: PersianDate = PersianDate(1_386_904);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a day serial (day 1 = 0001-01-01 Gregorian).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(PersianDate(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}/{month:02}"
            )));
        }
        serial_from_ymd(year, month, day)
            .map(PersianDate)
            .ok_or_else(|| Error::Date(format!("cannot convert {year}/{month:02}/{day:02}")))
    }

    /// Create a date from fields already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: u16, month: u8, day: u8) -> Self {
        debug_assert!(
            (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month),
            "invalid date {year}/{month}/{day}"
        );
        PersianDate(
            serial_from_ymd(year, month, day).expect("fields of a valid date always convert"),
        )
    }

    /// Convert a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self> {
        Self::from_serial(date.num_days_from_ce())
    }

    /// The current date.
    ///
    /// Uses the evaluation date pinned in [`Settings`] when there is one,
    /// otherwise the local wall clock.
    pub fn today() -> Result<Self> {
        if let Some(serial) = Settings::instance().evaluation_date_serial() {
            match Self::from_serial(serial) {
                Ok(date) => {
                    debug!(%date, "using pinned evaluation date");
                    return Ok(date);
                }
                Err(err) => warn!(%err, "ignoring invalid evaluation date"),
            }
        }
        let now = chrono::Local::now().date_naive();
        debug!(%now, "using wall clock for today");
        Self::from_gregorian(now)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0).expect("serial of a constructed date is always in range")
    }

    /// Return the Persian year.
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("month is always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (_, m, d) = self.ymd();
        let m = m as u16;
        if m <= 6 {
            (m - 1) * 31 + d as u16
        } else {
            186 + (m - 7) * 30 + d as u16
        }
    }

    /// Return the day of the week, 0 = Saturday … 6 = Friday.
    pub fn day_of_week(&self) -> u8 {
        self.weekday().index()
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_chrono(self.to_gregorian().weekday())
    }

    /// Return the number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        let (y, m, _) = self.ymd();
        days_in_month(y, m)
    }

    /// Return `true` if this date's year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Return the Gregorian date of the same day.
    pub fn to_gregorian(&self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.0)
            .expect("supported serials are within chrono's range")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backwards).  Returns an error if
    /// the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {} + {n} overflows", self.0))
        })?;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(PersianDate(serial))
    }

    /// Return the number of days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: PersianDate) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for PersianDate {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for PersianDate {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<PersianDate> for PersianDate {
    type Output = i32;
    fn sub(self, rhs: PersianDate) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for PersianDate {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for PersianDate {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

impl TryFrom<NaiveDate> for PersianDate {
    type Error = Error;
    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::from_gregorian(date)
    }
}

impl From<PersianDate> for NaiveDate {
    fn from(date: PersianDate) -> NaiveDate {
        date.to_gregorian()
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for PersianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}/{m:02}/{d:02}")
    }
}

impl std::fmt::Debug for PersianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "PersianDate({y:04}-{m:02}-{d:02})")
    }
}

/// Parses `YYYY/MM/DD` or `YYYY-MM-DD`, in ASCII or Persian digits.
impl FromStr for PersianDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = to_english_digits(s.trim());
        let sep = if s.contains('/') { '/' } else { '-' };
        let parts: Vec<&str> = s.split(sep).collect();
        if parts.len() != 3 {
            return Err(Error::Parse(format!(
                "expected YYYY/MM/DD or YYYY-MM-DD, got {s:?}"
            )));
        }
        let year: u16 = parse_field(parts[0], "year")?;
        let month: u8 = parse_field(parts[1], "month")?;
        let day: u8 = parse_field(parts[2], "day")?;
        Self::from_ymd(year, month, day)
    }
}

fn parse_field<T: FromStr>(s: &str, what: &str) -> Result<T> {
    s.parse()
        .map_err(|_| Error::Parse(format!("invalid {what} {s:?}")))
}

#[cfg(feature = "serde")]
impl serde::Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given Persian year is a leap year (Esfand has 30 days).
///
/// Years outside the supported range are reported as non-leap.
pub fn is_leap_year(year: u16) -> bool {
    year_info(year as i32).is_some_and(|info| info.leap == 0)
}

/// Number of days in a given Persian month.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1..=6 => 31,
        7..=11 => 30,
        _ => {
            if is_leap_year(year) {
                30
            } else {
                29
            }
        }
    }
}

/// Persian years at which the 33-year leap cycle is re-anchored.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

struct YearInfo {
    /// Years since the last leap year (0 means this year is leap).
    leap: i32,
    /// Gregorian year in which this Persian year begins.
    gregorian_year: i32,
    /// Day of March on which Farvardin 1 falls.
    march_day: i32,
}

fn year_info(jy: i32) -> Option<YearInfo> {
    if jy < BREAKS[0] || jy >= BREAKS[BREAKS.len() - 1] {
        return None;
    }
    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }
    let mut n = jy - jp;

    // Leap days since the start of the cycle, Persian and Gregorian.
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }
    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }
    Some(YearInfo {
        leap,
        gregorian_year: gy,
        march_day: 20 + leap_j - leap_g,
    })
}

/// Serial of Farvardin 1.
fn nowruz_serial(info: &YearInfo) -> Option<i32> {
    NaiveDate::from_ymd_opt(info.gregorian_year, 3, info.march_day as u32)
        .map(|d| d.num_days_from_ce())
}

fn serial_from_ymd(year: u16, month: u8, day: u8) -> Option<i32> {
    let info = year_info(year as i32)?;
    let m = month as i32;
    Some(nowruz_serial(&info)? + (m - 1) * 31 - m / 7 * (m - 7) + day as i32 - 1)
}

fn ymd_from_serial(serial: i32) -> Option<(u16, u8, u8)> {
    let gy = NaiveDate::from_num_days_from_ce_opt(serial)?.year();
    let mut jy = gy - 621;
    let info = year_info(jy)?;
    let mut k = serial - nowruz_serial(&info)?;
    if k >= 0 {
        if k <= 185 {
            return to_fields(jy, 1 + k / 31, k % 31 + 1);
        }
        k -= 186;
    } else {
        // Before Nowruz: the tail of the previous Persian year.
        jy -= 1;
        k += 179;
        if info.leap == 1 {
            k += 1;
        }
    }
    to_fields(jy, 7 + k / 30, k % 30 + 1)
}

fn to_fields(y: i32, m: i32, d: i32) -> Option<(u16, u8, u8)> {
    Some((
        u16::try_from(y).ok()?,
        u8::try_from(m).ok()?,
        u8::try_from(d).ok()?,
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds() {
        assert_eq!(PersianDate::from_ymd(1, 1, 1).unwrap(), PersianDate::MIN);
        assert_eq!(PersianDate::from_ymd(3176, 12, 29).unwrap(), PersianDate::MAX);
        assert_eq!(PersianDate::MIN.to_gregorian(), greg(622, 3, 22));
        assert!(PersianDate::from_serial(PersianDate::MIN.serial() - 1).is_err());
        assert!(PersianDate::from_serial(PersianDate::MAX.serial() + 1).is_err());
    }

    #[test]
    fn test_known_conversions() {
        let cases = [
            ((1403, 1, 1), greg(2024, 3, 20)),
            ((1402, 12, 29), greg(2024, 3, 19)),
            ((1403, 12, 30), greg(2025, 3, 20)),
            ((1404, 1, 1), greg(2025, 3, 21)),
            ((1399, 12, 30), greg(2021, 3, 20)),
            ((1402, 10, 11), greg(2024, 1, 1)),
        ];
        for ((y, m, d), g) in cases {
            let date = PersianDate::from_ymd(y, m, d).unwrap();
            assert_eq!(date.to_gregorian(), g, "{y}/{m}/{d}");
            assert_eq!(PersianDate::from_gregorian(g).unwrap(), date);
            assert_eq!(date.ymd(), (y, m, d));
        }
    }

    #[test]
    fn test_leap_years() {
        let leaps: Vec<u16> = (1390..1420).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(leaps, vec![1391, 1395, 1399, 1403, 1408, 1412, 1416]);
        assert_eq!(days_in_month(1403, 12), 30);
        assert_eq!(days_in_month(1402, 12), 29);
        assert!(PersianDate::from_ymd(1402, 12, 30).is_err());
    }

    #[test]
    fn test_field_validation() {
        assert!(PersianDate::from_ymd(0, 1, 1).is_err());
        assert!(PersianDate::from_ymd(3177, 1, 1).is_err());
        assert!(PersianDate::from_ymd(1403, 0, 1).is_err());
        assert!(PersianDate::from_ymd(1403, 13, 1).is_err());
        assert!(PersianDate::from_ymd(1403, 7, 31).is_err());
        assert!(PersianDate::from_ymd(1403, 6, 31).is_ok());
        assert!(matches!(
            PersianDate::from_ymd(1403, 1, 0),
            Err(Error::Date(_))
        ));
    }

    #[test]
    fn test_weekday() {
        // 2024-03-20 was a Wednesday.
        let d = PersianDate::from_ymd(1403, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Wednesday);
        assert_eq!(d.day_of_week(), 4);
        // 2024-03-22 was a Friday.
        assert_eq!(PersianDate::from_ymd(1403, 1, 3).unwrap().day_of_week(), 6);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(PersianDate::from_ymd(1403, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(PersianDate::from_ymd(1403, 6, 31).unwrap().day_of_year(), 186);
        assert_eq!(PersianDate::from_ymd(1403, 7, 1).unwrap().day_of_year(), 187);
        assert_eq!(PersianDate::from_ymd(1403, 12, 30).unwrap().day_of_year(), 366);
    }

    #[test]
    fn test_arithmetic() {
        let d = PersianDate::from_ymd(1402, 12, 29).unwrap();
        assert_eq!(d + 1, PersianDate::from_ymd(1403, 1, 1).unwrap());
        assert_eq!((d + 1) - 1, d);
        assert_eq!(PersianDate::from_ymd(1403, 1, 1).unwrap() - d, 1);
        assert_eq!(d.days_between(d + 10), 10);
        assert!(PersianDate::MAX.add_days(1).is_err());
        assert!(PersianDate::MIN.add_days(-1).is_err());
        assert!(PersianDate::MIN.add_days(i32::MIN).is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let d = PersianDate::from_ymd(1403, 1, 9).unwrap();
        assert_eq!(d.to_string(), "1403/01/09");
        assert_eq!(format!("{d:?}"), "PersianDate(1403-01-09)");
        assert_eq!("1403/01/09".parse::<PersianDate>().unwrap(), d);
        assert_eq!("1403-1-9".parse::<PersianDate>().unwrap(), d);
        assert_eq!("۱۴۰۳/۰۱/۰۹".parse::<PersianDate>().unwrap(), d);
        assert!(matches!("1403/01".parse::<PersianDate>(), Err(Error::Parse(_))));
        assert!(matches!("abcd/01/01".parse::<PersianDate>(), Err(Error::Parse(_))));
        assert!(matches!("1403/13/01".parse::<PersianDate>(), Err(Error::Date(_))));
    }

    #[test]
    fn test_every_serial_roundtrips_across_cycle_breaks() {
        // Covers the 2456 break and the Gregorian new year inside Dey.
        let start = PersianDate::from_ymd(2450, 1, 1).unwrap();
        let end = PersianDate::from_ymd(2462, 12, 29).unwrap();
        for serial in start.serial()..=end.serial() {
            let d = PersianDate::from_serial(serial).unwrap();
            let (y, m, dd) = d.ymd();
            assert_eq!(PersianDate::from_ymd(y, m, dd).unwrap(), d);
        }
    }
}
