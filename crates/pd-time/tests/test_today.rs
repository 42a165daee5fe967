//! "Today" resolution through the evaluation date in `Settings`.
//!
//! Kept in its own test binary: it mutates the process-wide settings.

use pd_core::{ScopedEvaluationDate, Settings};
use pd_time::utils::calculate_age_today;
use pd_time::PersianDate;

#[test]
fn today_follows_evaluation_date() {
    let pinned = PersianDate::from_ymd(1403, 6, 15).unwrap();
    let birth = PersianDate::from_ymd(1370, 6, 16).unwrap();

    {
        let _guard = ScopedEvaluationDate::new(pinned.serial());
        assert_eq!(PersianDate::today().unwrap(), pinned);
        assert_eq!(calculate_age_today(birth).unwrap(), 32);
    }
    assert_eq!(Settings::instance().evaluation_date_serial(), None);

    // An unusable pinned date falls back to the clock.
    {
        let _guard = ScopedEvaluationDate::new(1);
        let today = PersianDate::today().unwrap();
        assert!(today.year() >= 1403);
    }

    // Without a pinned date the wall clock is used.
    let before = chrono::Local::now().date_naive();
    let today = PersianDate::today().unwrap().to_gregorian();
    let after = chrono::Local::now().date_naive();
    assert!(before <= today && today <= after);
}
