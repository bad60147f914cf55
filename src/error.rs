//!
//! Defines error types for age-core.

/// Represents errors that can occur while constructing time values.
///
/// The estimation itself never fails; only the fallible `Birthdate`
/// constructors produce these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The year/month/day triple does not name a date the proleptic
    /// Gregorian calendar contains.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
}
