//! Holiday tables and business-day stepping on the Iranian calendars.

use std::collections::HashSet;

use pd_time::calendar::Calendar;
use pd_time::utils::{add_business_days, add_business_days_in, is_holiday};
use pd_time::{BespokeCalendar, BusinessDayConvention, Iran, PersianDate, Weekday};

fn date(y: u16, m: u8, d: u8) -> PersianDate {
    PersianDate::from_ymd(y, m, d).unwrap()
}

/// Holidays in `[from, to]` that are not Fridays.
fn holiday_list_without_fridays(cal: &dyn Calendar, from: PersianDate, to: PersianDate) -> Vec<PersianDate> {
    cal.holiday_list(from, to)
        .into_iter()
        .filter(|&d| !cal.is_weekend(d))
        .collect()
}

/// Assert that the calculated non-Friday holidays are exactly `expected`.
fn check_holidays(cal: &dyn Calendar, from: PersianDate, to: PersianDate, expected: &[PersianDate]) {
    let calculated = holiday_list_without_fridays(cal, from, to);
    let calc_set: HashSet<_> = calculated.iter().copied().collect();
    let exp_set: HashSet<_> = expected.iter().copied().collect();

    for &d in &calculated {
        assert!(
            exp_set.contains(&d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for &d in expected {
        assert!(
            calc_set.contains(&d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

// ─── Iran holidays ────────────────────────────────────────────────────────────

#[test]
fn test_iran_holidays_1403() {
    // Fixed holidays of 1403 that do not fall on a Friday.  1403/01/03 is a
    // Friday and drops out of this list.
    let expected = vec![
        date(1403, 1, 1),
        date(1403, 1, 2),
        date(1403, 1, 4),
        date(1403, 1, 12),
        date(1403, 1, 13),
        date(1403, 3, 14),
        date(1403, 11, 22),
        date(1403, 12, 29),
    ];
    check_holidays(&Iran, date(1403, 1, 1), date(1403, 12, 30), &expected);
}

#[test]
fn test_every_friday_is_a_holiday() {
    let cal = Iran;
    let list = cal.holiday_list(date(1400, 1, 1), date(1405, 12, 29));
    let mut d = date(1400, 1, 1);
    while d <= date(1405, 12, 29) {
        if d.weekday() == Weekday::Friday {
            assert!(list.contains(&d), "{d} is a Friday but not listed");
            assert!(is_holiday(d));
        }
        d += 1;
    }
}

#[test]
fn test_fixed_holidays_in_any_year() {
    for year in [1300u16, 1357, 1403, 1404, 1500, 2000] {
        for (m, d) in [(1, 1), (1, 2), (1, 3), (1, 4), (1, 12), (1, 13), (3, 14), (11, 22), (12, 29)] {
            assert!(is_holiday(date(year, m, d)), "{year}/{m}/{d}");
        }
    }
}

#[test]
fn test_holiday_count_per_year() {
    // In 1404 both Farvardin 1 and Esfand 29 fall on a Friday.
    let cal = Iran;
    let holidays = cal.holiday_list(date(1404, 1, 1), date(1404, 12, 29));
    let fridays = holidays.iter().filter(|d| d.weekday().is_friday()).count();
    let fixed_not_friday = holidays.len() - fridays;
    assert_eq!(fixed_not_friday, 7);
}

// ─── Business days ────────────────────────────────────────────────────────────

#[test]
fn test_business_days_between_matches_advance() {
    let cal = Iran;
    let start = date(1402, 12, 20);
    for n in 0..40 {
        let end = add_business_days(start, n).unwrap();
        assert_eq!(cal.business_days_between(start, end), n, "n = {n}");
        if n > 0 {
            assert!(cal.is_business_day(end));
        }
    }
}

#[test]
fn test_backward_stepping_over_new_year() {
    // Sunday 1403/01/05 back one business day lands on Monday 1402/12/28.
    assert_eq!(
        add_business_days(date(1403, 1, 5), -1).unwrap(),
        date(1402, 12, 28)
    );
    assert_eq!(
        add_business_days(date(1403, 1, 5), -2).unwrap(),
        date(1402, 12, 27)
    );
}

#[test]
fn test_bespoke_calendar_with_moving_holiday() {
    let mut cal = BespokeCalendar::iran("Iran with Eid al-Fitr 1403");
    // Eid al-Fitr 1403 fell on Wednesday 1403/01/22.
    cal.add_holiday(date(1403, 1, 22));
    let start = date(1403, 1, 21); // Tuesday
    assert_eq!(add_business_days_in(&cal, start, 1).unwrap(), date(1403, 1, 23));
    assert_eq!(add_business_days(start, 1).unwrap(), date(1403, 1, 22));
}

#[test]
fn test_adjust_out_of_nowruz() {
    let cal = Iran;
    assert_eq!(
        cal.adjust(date(1403, 1, 2), BusinessDayConvention::Following).unwrap(),
        date(1403, 1, 5)
    );
    assert_eq!(
        cal.adjust(date(1403, 1, 2), BusinessDayConvention::Preceding).unwrap(),
        date(1402, 12, 28)
    );
    // Preceding leaves Farvardin, so the modified rule goes forward.
    assert_eq!(
        cal.adjust(date(1403, 1, 2), BusinessDayConvention::ModifiedPreceding).unwrap(),
        date(1403, 1, 5)
    );
    // Three days either way; ties go forward.
    assert_eq!(
        cal.adjust(date(1403, 1, 2), BusinessDayConvention::Nearest).unwrap(),
        date(1403, 1, 5)
    );
}
