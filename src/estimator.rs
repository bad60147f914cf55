//!
//! Age estimation arithmetic.
//!
//! Maps a birth instant to a whole-year count by dividing the elapsed
//! duration by a fixed 365-day year. The quotient is floored, so a birth
//! instant in the future reads back as a negative count.

use crate::primitives::Birthdate;
use crate::time::{Clock, SystemClock};
use crate::types::{AgeYears, EpochMillis};

/// Fixed unit durations used by the estimator.
pub mod units {
    use crate::types::EpochMillis;

    /// Milliseconds in one day.
    pub const MILLIS_PER_DAY: EpochMillis = 24 * 60 * 60 * 1000;
    /// Days in one approximate year. Leap years are not accounted for.
    pub const DAYS_PER_APPROX_YEAR: EpochMillis = 365;
    /// Milliseconds in one approximate year (31,536,000 seconds).
    pub const MILLIS_PER_APPROX_YEAR: EpochMillis = DAYS_PER_APPROX_YEAR * MILLIS_PER_DAY;
}

/// Computes the whole approximate years elapsed between a birth instant
/// and `now`.
///
/// The elapsed duration is divided by a fixed 365-day year and the
/// quotient is floored (toward negative infinity), so a birth instant one
/// millisecond after `now` yields `-1`. The subtraction saturates at the
/// `i64` extremes instead of overflowing.
///
/// # Arguments
/// * `birthdate` - The birth instant.
/// * `now` - The instant to measure against, as milliseconds since the Unix epoch.
///
/// # Returns
/// The floored quotient of the elapsed milliseconds over one approximate year.
#[inline]
pub fn age_in_years_at(birthdate: Birthdate, now: EpochMillis) -> AgeYears {
    let elapsed = now.saturating_sub(birthdate.timestamp_millis());
    elapsed.div_euclid(units::MILLIS_PER_APPROX_YEAR)
}

/// Estimates the age for `birthdate` at the instant supplied by `clock`.
#[inline]
pub fn estimate_age_in_years_with<C: Clock + ?Sized>(clock: &C, birthdate: Birthdate) -> AgeYears {
    let now = clock.now_millis();
    let years = age_in_years_at(birthdate, now);
    tracing::trace!(
        birth_ms = birthdate.timestamp_millis(),
        now_ms = now,
        years,
        "estimated age"
    );
    years
}

/// Estimates the age for `birthdate` against the host system clock.
#[inline]
pub fn estimate_age_in_years(birthdate: Birthdate) -> AgeYears {
    estimate_age_in_years_with(&SystemClock, birthdate)
}
