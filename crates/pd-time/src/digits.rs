//! Transliteration between ASCII digits and Persian digits (`۰`–`۹`).
//!
//! Both directions substitute digits character by character and pass every
//! other character through verbatim.

/// Persian digits, indexed by their value.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace ASCII digits `0`–`9` with Persian digits.
///
/// ```
/// use pd_time::digits::to_persian_digits;
/// assert_eq!(to_persian_digits("1403/01/01"), "۱۴۰۳/۰۱/۰۱");
/// ```
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(v) => PERSIAN_DIGITS[v as usize],
            None => c,
        })
        .collect()
}

/// Replace Persian digits `۰`–`۹` with ASCII digits.
///
/// ```
/// use pd_time::digits::to_english_digits;
/// assert_eq!(to_english_digits("۱۴۰۳/۰۱/۰۱"), "1403/01/01");
/// ```
pub fn to_english_digits(input: &str) -> String {
    input.chars().map(persian_to_ascii).collect()
}

fn persian_to_ascii(c: char) -> char {
    match PERSIAN_DIGITS.iter().position(|&p| p == c) {
        Some(v) => (b'0' + v as u8) as char,
        None => c,
    }
}
