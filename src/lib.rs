#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Age-Core computes approximate ages in whole years from birth instants.
//!
//! A birth instant is measured against the current wall clock and the
//! elapsed duration is divided by a fixed 365-day year, floored. Calendar
//! semantics (leap years, month and day boundaries, time zones) are
//! deliberately out of scope, so the result drifts by roughly one day
//! every four years relative to the civil calendar.

// Module for common, shared data types (EpochMillis, AgeYears).
pub mod types;

// Module for core primitive data structures (Birthdate).
pub mod primitives;

// Re-export all core primitives for easier access at the crate root.
pub use primitives::*;

// Module for the estimation arithmetic.
pub mod estimator;

// Module for wall-clock abstractions.
pub mod time;

// Module for error types.
pub mod error;

pub use estimator::estimate_age_in_years;
