//! Error types for persiandate.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The [`ensure!`] macro
//! is shorthand for an early return on a violated precondition.
//!
//! [`ensure!`]: crate::ensure

use thiserror::Error;

/// The top-level error type used throughout persiandate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date could not be constructed, or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A string could not be parsed into a date.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand `Result` type used throughout persiandate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pd_core::{ensure, errors::Error};
/// fn month(m: u8) -> pd_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(7).is_ok());
/// assert_eq!(
///     month(13),
///     Err(Error::Precondition("month 13 out of range".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
