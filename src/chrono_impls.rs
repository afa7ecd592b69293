//! `ClockValue` implementations for `chrono` types.
//!
//! Only hour, minute and second are read. Dates, nanoseconds (including
//! chrono's leap-second representation) and offsets are ignored.

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike};

use crate::clock::ClockValue;
use crate::duration::{ClockDuration, DurationError};

// Timelike guarantees hour < 24 and minute, second < 60.
#[inline]
fn triple<T: Timelike>(value: &T) -> (i32, i32, i32) {
    (
        value.hour() as i32,
        value.minute() as i32,
        value.second() as i32,
    )
}

impl ClockValue for NaiveTime {
    #[inline]
    fn clock(&self) -> (i32, i32, i32) {
        triple(self)
    }
}

impl ClockValue for NaiveDateTime {
    #[inline]
    fn clock(&self) -> (i32, i32, i32) {
        triple(self)
    }
}

/// Uses the local time of the value's own time zone.
impl<Tz: TimeZone> ClockValue for DateTime<Tz> {
    #[inline]
    fn clock(&self) -> (i32, i32, i32) {
        triple(self)
    }
}

impl TryFrom<ClockDuration> for TimeDelta {
    type Error = DurationError;

    fn try_from(value: ClockDuration) -> Result<Self, Self::Error> {
        TimeDelta::try_seconds(value.as_secs()).ok_or(DurationError::OutOfRange)
    }
}

/// Sub-second parts of the source are truncated toward zero.
impl From<TimeDelta> for ClockDuration {
    fn from(value: TimeDelta) -> Self {
        ClockDuration::from_secs(value.num_seconds())
    }
}
