//! # pd-core
//!
//! Error definitions and process-wide settings for persiandate.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the error hierarchy with its `ensure!` macro, and
//! the `Settings` singleton that pins the evaluation date.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
