use crate::error::TimeError;
use crate::types::EpochMillis;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

// --- Birth instant ----------------------------------------------------------

/// An instant of birth, stored as milliseconds since the Unix epoch.
///
/// Valid by construction: unlike date types with an "invalid" sentinel,
/// every `Birthdate` value is a real instant. Serializes transparently as
/// the inner integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Birthdate(pub EpochMillis);

impl Birthdate {
    /// Builds a birthdate from a raw epoch-millisecond timestamp.
    pub const fn from_timestamp_millis(millis: EpochMillis) -> Self {
        Birthdate(millis)
    }

    /// Builds a birthdate from a calendar date, taken at midnight UTC.
    ///
    /// Rejects triples the proleptic Gregorian calendar does not contain
    /// (e.g. month 13, or February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidCalendarDate { year, month, day })?;
        let midnight = date.and_time(NaiveTime::MIN);
        Ok(Birthdate(midnight.and_utc().timestamp_millis()))
    }

    /// Milliseconds since the Unix epoch.
    pub const fn timestamp_millis(&self) -> EpochMillis {
        self.0
    }
}

impl From<DateTime<Utc>> for Birthdate {
    fn from(value: DateTime<Utc>) -> Self {
        Birthdate(value.timestamp_millis())
    }
}
