//! Durations between clock values.
//!
//! [`between`] is a plain same-cycle subtraction and may be negative.
//! [`until`] treats the clock as cyclic and always moves forward, wrapping
//! through midnight when needed.

use core::ops::{Add, Neg, Sub};
use core::time::Duration;

use crate::clock::{ClockValue, SECONDS_PER_DAY, seconds_since_midnight};

/// A signed duration with whole-second resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockDuration(i64);

impl ClockDuration {
    /// Zero duration constant.
    pub const ZERO: Self = ClockDuration(0);

    /// Creates a duration from seconds.
    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        ClockDuration(secs)
    }

    /// Creates a duration from minutes.
    #[inline]
    pub const fn from_mins(mins: i64) -> Self {
        ClockDuration(mins * 60)
    }

    /// Creates a duration from hours.
    #[inline]
    pub const fn from_hours(hours: i64) -> Self {
        ClockDuration(hours * 3600)
    }

    /// Returns the duration in seconds.
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0
    }

    /// Returns the duration in milliseconds.
    #[inline]
    pub const fn as_millis(&self) -> i128 {
        self.0 as i128 * 1000
    }

    /// Returns `true` if the duration is strictly negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the magnitude of the duration, dropping its sign.
    #[inline]
    pub const fn unsigned_abs(&self) -> Duration {
        Duration::from_secs(self.0.unsigned_abs())
    }

    /// Checked addition, returns `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(secs) => Some(ClockDuration(secs)),
            None => None,
        }
    }

    /// Checked subtraction, returns `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(secs) => Some(ClockDuration(secs)),
            None => None,
        }
    }
}

impl Neg for ClockDuration {
    type Output = Self;

    fn neg(self) -> Self {
        ClockDuration(-self.0)
    }
}

impl Add for ClockDuration {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        ClockDuration(self.0 + other.0)
    }
}

impl Sub for ClockDuration {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        ClockDuration(self.0 - other.0)
    }
}

impl TryFrom<ClockDuration> for Duration {
    type Error = DurationError;

    fn try_from(value: ClockDuration) -> Result<Self, Self::Error> {
        if value.is_negative() {
            return Err(DurationError::Negative);
        }
        Ok(value.unsigned_abs())
    }
}

/// Sub-second parts of the source are truncated.
impl TryFrom<Duration> for ClockDuration {
    type Error = DurationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        i64::try_from(value.as_secs())
            .map(ClockDuration)
            .map_err(|_| DurationError::OutOfRange)
    }
}

/// Errors converting between [`ClockDuration`] and other duration types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DurationError {
    /// A negative duration cannot be represented by the target type.
    Negative,

    /// The duration does not fit the target type.
    OutOfRange,
}

impl core::fmt::Display for DurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DurationError::Negative => {
                write!(f, "duration is negative and the target type is unsigned")
            }
            DurationError::OutOfRange => {
                write!(f, "duration is out of range for the target type")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DurationError {}

/// Returns the signed duration from `a` to `b` within the same clock cycle.
///
/// Positive when `b` is later in the day than `a`, negative when earlier.
/// Does not wrap around midnight.
#[inline]
pub fn between<A: ClockValue + ?Sized, B: ClockValue + ?Sized>(a: &A, b: &B) -> ClockDuration {
    ClockDuration(seconds_since_midnight(b) - seconds_since_midnight(a))
}

/// Returns how long it takes for the clock to move forward from `a` to `b`.
///
/// If `b` is later in the day than `a` this equals [`between`]. Otherwise the
/// clock wraps forward through midnight, so `12:00:00` until `11:59:59` is one
/// second short of a day. Equal clock values are zero apart, not a full day.
#[inline]
pub fn until<A: ClockValue + ?Sized, B: ClockValue + ?Sized>(a: &A, b: &B) -> Duration {
    let diff = seconds_since_midnight(b) - seconds_since_midnight(a);
    let secs = if diff > 0 {
        diff
    } else {
        // Out-of-range triples can be more than a day apart.
        diff.rem_euclid(SECONDS_PER_DAY)
    };
    Duration::from_secs(secs.unsigned_abs())
}
