//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**, the date that "today" resolves
//! to.  It is a process-wide singleton accessed via a `std::sync::OnceLock`.
//! When no evaluation date is set, callers fall back to the wall clock.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Tests that pin the date should use
//! [`ScopedEvaluationDate`] so the previous value is restored.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process-wide settings used by the persiandate library.
pub struct Settings {
    /// The pinned evaluation date as a day serial (day 1 = 0001-01-01 Gregorian).
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Option<i32>> {
        // The guarded value is a plain `Option<i32>`; a poisoned lock still
        // holds a consistent value.
        self.evaluation_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the pinned evaluation date serial, or `None` to use the clock.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self.lock()
    }

    /// Pin the evaluation date to the given day serial.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self.lock() = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use the clock".
    pub fn reset_evaluation_date(&self) {
        *self.lock() = None;
    }
}

/// RAII guard that pins the evaluation date and restores the previous value
/// when dropped.
///
/// ```
/// use pd_core::{ScopedEvaluationDate, Settings};
///
/// {
///     let _guard = ScopedEvaluationDate::new(738_965);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(738_965));
/// }
/// ```
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Pin the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}
