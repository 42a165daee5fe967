//! # persiandate
//!
//! Persian (Jalali) calendar dates, Iranian holidays, and business-day
//! utilities.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.
//!
//! ```rust
//! use persiandate::time::{utils, PersianDate};
//!
//! let nowruz = PersianDate::from_ymd(1403, 1, 1).unwrap();
//! assert!(utils::is_holiday(nowruz));
//! assert_eq!(utils::season_name(nowruz), "بهار");
//! assert_eq!(nowruz.to_gregorian().to_string(), "2024-03-20");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and process-wide settings.
pub use pd_core as core;

/// Persian dates, calendars, and date utilities.
pub use pd_time as time;

pub use pd_core::{Error, Result};
pub use pd_time::{utils, Calendar, Iran, PersianDate};
