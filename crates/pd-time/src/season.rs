//! `Season` — the four seasons of the Persian year, three months each.

/// Season of the Persian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// Farvardin to Khordad.
    Spring,
    /// Tir to Shahrivar.
    Summer,
    /// Mehr to Azar.
    Autumn,
    /// Dey to Esfand.
    Winter,
}

impl Season {
    /// Season for a month number.  Anything outside 1–9 maps to winter.
    pub fn of_month(month: u8) -> Self {
        match month {
            1..=3 => Season::Spring,
            4..=6 => Season::Summer,
            7..=9 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// The Persian name: `"بهار"`, `"تابستان"`, `"پاییز"` or `"زمستان"`.
    pub fn persian_name(&self) -> &'static str {
        match self {
            Season::Spring => "بهار",
            Season::Summer => "تابستان",
            Season::Autumn => "پاییز",
            Season::Winter => "زمستان",
        }
    }

    /// The English name.
    pub fn english_name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.persian_name())
    }
}
