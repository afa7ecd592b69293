//! `ClockValue` implementations for `time` types.

use time::{OffsetDateTime, PrimitiveDateTime, Time};

use crate::clock::ClockValue;
use crate::duration::ClockDuration;

impl ClockValue for Time {
    #[inline]
    fn clock(&self) -> (i32, i32, i32) {
        (self.hour().into(), self.minute().into(), self.second().into())
    }
}

impl ClockValue for PrimitiveDateTime {
    #[inline]
    fn clock(&self) -> (i32, i32, i32) {
        self.time().clock()
    }
}

/// Uses the wall-clock time at the value's own offset.
impl ClockValue for OffsetDateTime {
    #[inline]
    fn clock(&self) -> (i32, i32, i32) {
        self.time().clock()
    }
}

impl From<ClockDuration> for time::Duration {
    fn from(value: ClockDuration) -> Self {
        time::Duration::seconds(value.as_secs())
    }
}

/// Sub-second parts of the source are truncated toward zero.
impl From<time::Duration> for ClockDuration {
    fn from(value: time::Duration) -> Self {
        ClockDuration::from_secs(value.whole_seconds())
    }
}
