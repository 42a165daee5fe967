//! Iran calendar.

use crate::calendar::Calendar;
use crate::date::PersianDate;

/// Iran calendar.
///
/// The weekend is Friday.
///
/// Fixed holidays:
/// * Nowruz (Farvardin 1–4)
/// * Nature Day (Farvardin 12)
/// * Sizdah Bedar (Farvardin 13)
/// * Khordad Uprising (Khordad 14)
/// * Islamic Revolution Day (Bahman 22)
/// * Oil Nationalization Day (Esfand 29)
///
/// Holidays tied to the lunar Hijri calendar move every year and are not
/// included; use a [`BespokeCalendar`](crate::calendars::BespokeCalendar)
/// to add them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iran;

impl Iran {
    /// Return the name of the fixed holiday falling on `date`, if any.
    ///
    /// Fridays that are not otherwise holidays return `None`.
    pub fn holiday_name(date: PersianDate) -> Option<&'static str> {
        let (_, m, d) = date.ymd();
        fixed_holiday(m, d)
    }
}

impl Calendar for Iran {
    fn name(&self) -> &str {
        "Iran"
    }

    fn is_business_day(&self, date: PersianDate) -> bool {
        if self.is_weekend(date) {
            return false;
        }
        let (_, m, d) = date.ymd();
        fixed_holiday(m, d).is_none()
    }
}

/// The fixed Iranian public holidays as `(month, day, name)`.
pub const FIXED_HOLIDAYS: [(u8, u8, &str); 9] = [
    (1, 1, "Nowruz"),
    (1, 2, "Nowruz"),
    (1, 3, "Nowruz"),
    (1, 4, "Nowruz"),
    (1, 12, "Nature Day"),
    (1, 13, "Sizdah Bedar"),
    (3, 14, "Khordad Uprising"),
    (11, 22, "Islamic Revolution Day"),
    (12, 29, "Oil Nationalization Day"),
];

fn fixed_holiday(m: u8, d: u8) -> Option<&'static str> {
    FIXED_HOLIDAYS
        .iter()
        .find(|&&(hm, hd, _)| hm == m && hd == d)
        .map(|&(_, _, name)| name)
}
