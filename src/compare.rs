//! Relational comparisons between clock values.
//!
//! All comparisons reduce both inputs to seconds since midnight. For any pair
//! exactly one of [`before`], [`equals`] and [`after`] is true.

use core::cmp::Ordering;

use crate::clock::{ClockValue, seconds_since_midnight};

/// Returns `true` if `a` is later in the day than `b`.
#[inline]
pub fn after<A: ClockValue + ?Sized, B: ClockValue + ?Sized>(a: &A, b: &B) -> bool {
    seconds_since_midnight(a) > seconds_since_midnight(b)
}

/// Returns `true` if `a` is earlier in the day than `b`.
///
/// Equal clock values are not before each other.
#[inline]
pub fn before<A: ClockValue + ?Sized, B: ClockValue + ?Sized>(a: &A, b: &B) -> bool {
    seconds_since_midnight(a) < seconds_since_midnight(b)
}

/// Returns `true` if `a` and `b` show the same clock time.
#[inline]
pub fn equals<A: ClockValue + ?Sized, B: ClockValue + ?Sized>(a: &A, b: &B) -> bool {
    seconds_since_midnight(a) == seconds_since_midnight(b)
}

/// Orders two clock values by time of day.
///
/// Returns `Less`, `Equal` or `Greater` exactly when [`before`], [`equals`]
/// or [`after`] holds.
#[inline]
pub fn compare<A: ClockValue + ?Sized, B: ClockValue + ?Sized>(a: &A, b: &B) -> Ordering {
    seconds_since_midnight(a).cmp(&seconds_since_midnight(b))
}
