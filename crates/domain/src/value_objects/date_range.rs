use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Closed datetime interval for a series request.
///
/// Construction rejects inverted intervals, so a held value always
/// satisfies `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    /// # Errors
    /// Returns `DomainError::InvalidRange` when `start > end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Combines the date and time-of-day selections into a range.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidRange` when the combined start lies
    /// after the combined end.
    pub fn from_parts(
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_date: NaiveDate,
        end_time: NaiveTime,
    ) -> Result<Self, DomainError> {
        Self::new(start_date.and_time(start_time), end_date.and_time(end_time))
    }

    #[must_use]
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Interval bounds as unix seconds (UTC) for provider queries.
    #[must_use]
    pub fn unix_bounds(&self) -> (i64, i64) {
        (
            self.start.and_utc().timestamp(),
            self.end.and_utc().timestamp(),
        )
    }
}
