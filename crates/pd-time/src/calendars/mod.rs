//! Concrete calendar implementations.

/// Calendar with user-defined holidays.
pub mod bespoke_calendar;

/// Iran, with its fixed solar-calendar public holidays.
pub mod iran;

pub use bespoke_calendar::BespokeCalendar;
pub use iran::Iran;
