//! `Weekday` — day-of-week enum in the Persian week order.

/// Day of the week.
///
/// The Persian week starts on Saturday, so variants are indexed 0–6
/// (Saturday = 0, Friday = 6).  Friday is the weekly day of rest in Iran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Saturday (0), شنبه.
    Saturday = 0,
    /// Sunday (1), یکشنبه.
    Sunday = 1,
    /// Monday (2), دوشنبه.
    Monday = 2,
    /// Tuesday (3), سه‌شنبه.
    Tuesday = 3,
    /// Wednesday (4), چهارشنبه.
    Wednesday = 4,
    /// Thursday (5), پنجشنبه.
    Thursday = 5,
    /// Friday (6), جمعه.
    Friday = 6,
}

impl Weekday {
    /// Construct from the Persian week index (0 = Saturday … 6 = Friday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Saturday),
            1 => Some(Weekday::Sunday),
            2 => Some(Weekday::Monday),
            3 => Some(Weekday::Tuesday),
            4 => Some(Weekday::Wednesday),
            5 => Some(Weekday::Thursday),
            6 => Some(Weekday::Friday),
            _ => None,
        }
    }

    /// Convert from `chrono`'s weekday.
    pub fn from_chrono(w: chrono::Weekday) -> Self {
        // chrono counts from Monday = 0; the Persian week is shifted by two.
        let idx = (w.num_days_from_monday() + 2) % 7;
        Self::from_index(idx as u8).unwrap_or(Weekday::Saturday)
    }

    /// Return the Persian week index (0 = Saturday … 6 = Friday).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Return `true` for Friday.
    pub fn is_friday(&self) -> bool {
        matches!(self, Weekday::Friday)
    }

    /// Return the Persian name (`"شنبه"`, `"یکشنبه"`, …).
    pub fn persian_name(&self) -> &'static str {
        match self {
            Weekday::Saturday => "شنبه",
            Weekday::Sunday => "یکشنبه",
            Weekday::Monday => "دوشنبه",
            Weekday::Tuesday => "سه‌شنبه",
            Weekday::Wednesday => "چهارشنبه",
            Weekday::Thursday => "پنجشنبه",
            Weekday::Friday => "جمعه",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        };
        write!(f, "{name}")
    }
}
