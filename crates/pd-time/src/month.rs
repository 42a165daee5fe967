//! `Month` — month-of-year enum of the Persian solar calendar.

use crate::season::Season;

/// Month of the Persian year.
///
/// Variants are numbered 1–12 (Farvardin = 1, Esfand = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// Farvardin (1).
    Farvardin = 1,
    /// Ordibehesht (2).
    Ordibehesht = 2,
    /// Khordad (3).
    Khordad = 3,
    /// Tir (4).
    Tir = 4,
    /// Mordad (5).
    Mordad = 5,
    /// Shahrivar (6).
    Shahrivar = 6,
    /// Mehr (7).
    Mehr = 7,
    /// Aban (8).
    Aban = 8,
    /// Azar (9).
    Azar = 9,
    /// Dey (10).
    Dey = 10,
    /// Bahman (11).
    Bahman = 11,
    /// Esfand (12).
    Esfand = 12,
}

impl Month {
    /// Construct from a number (1 = Farvardin … 12 = Esfand).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Month::Farvardin),
            2 => Some(Month::Ordibehesht),
            3 => Some(Month::Khordad),
            4 => Some(Month::Tir),
            5 => Some(Month::Mordad),
            6 => Some(Month::Shahrivar),
            7 => Some(Month::Mehr),
            8 => Some(Month::Aban),
            9 => Some(Month::Azar),
            10 => Some(Month::Dey),
            11 => Some(Month::Bahman),
            12 => Some(Month::Esfand),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the transliterated name (`"Farvardin"`, `"Ordibehesht"`, …).
    pub fn latin_name(&self) -> &'static str {
        match self {
            Month::Farvardin => "Farvardin",
            Month::Ordibehesht => "Ordibehesht",
            Month::Khordad => "Khordad",
            Month::Tir => "Tir",
            Month::Mordad => "Mordad",
            Month::Shahrivar => "Shahrivar",
            Month::Mehr => "Mehr",
            Month::Aban => "Aban",
            Month::Azar => "Azar",
            Month::Dey => "Dey",
            Month::Bahman => "Bahman",
            Month::Esfand => "Esfand",
        }
    }

    /// Return the Persian name (`"فروردین"`, `"اردیبهشت"`, …).
    pub fn persian_name(&self) -> &'static str {
        match self {
            Month::Farvardin => "فروردین",
            Month::Ordibehesht => "اردیبهشت",
            Month::Khordad => "خرداد",
            Month::Tir => "تیر",
            Month::Mordad => "مرداد",
            Month::Shahrivar => "شهریور",
            Month::Mehr => "مهر",
            Month::Aban => "آبان",
            Month::Azar => "آذر",
            Month::Dey => "دی",
            Month::Bahman => "بهمن",
            Month::Esfand => "اسفند",
        }
    }

    /// Return the season this month belongs to.
    pub fn season(&self) -> Season {
        Season::of_month(self.number())
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.latin_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}
