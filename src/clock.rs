//! The clock value capability and its normalization to seconds since midnight.

/// Number of seconds in one nominal clock cycle.
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Trait for anything that can report its wall-clock time.
///
/// Implement this for your own types to compare them with [`after`](crate::after),
/// [`before`](crate::before), [`equals`](crate::equals) and friends. Only the
/// returned triple takes part in comparisons; dates, sub-second fields and
/// offsets the type may carry are never looked at.
///
/// Values are not range checked. A triple such as `(0, 90, 0)` is folded
/// arithmetically and compares equal to `(1, 30, 0)`.
pub trait ClockValue {
    /// Returns the `(hours, minutes, seconds)` of this value.
    fn clock(&self) -> (i32, i32, i32);
}

impl<C: ClockValue + ?Sized> ClockValue for &C {
    #[inline]
    fn clock(&self) -> (i32, i32, i32) {
        (**self).clock()
    }
}

impl ClockValue for (i32, i32, i32) {
    #[inline]
    fn clock(&self) -> (i32, i32, i32) {
        *self
    }
}

/// Normalizes a clock value to seconds since midnight.
///
/// Computed in `i64`, so any `i32` triple fits without overflow.
#[inline]
pub fn seconds_since_midnight<C: ClockValue + ?Sized>(value: &C) -> i64 {
    let (hours, minutes, seconds) = value.clock();
    to_seconds(hours, minutes, seconds)
}

#[inline]
const fn to_seconds(hours: i32, minutes: i32, seconds: i32) -> i64 {
    hours as i64 * 3600 + minutes as i64 * 60 + seconds as i64
}
