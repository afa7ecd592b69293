//! Shared test infrastructure for wallclock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use wallclock::ClockValue;

// ============================================================================
// Mock Clock Type
// ============================================================================

/// Mock date-time carrying fields that must never influence a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestClock {
    pub day: i64,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub nanos: u32,
}

impl TestClock {
    pub fn at(hour: i32, minute: i32, second: i32) -> Self {
        Self {
            day: 0,
            hour,
            minute,
            second,
            nanos: 0,
        }
    }

    /// Moves forward (or backward) by whole seconds, rolling over into other days
    pub fn add_secs(self, secs: i64) -> Self {
        let total = self.day * 86_400
            + self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
            + secs;
        let of_day = total.rem_euclid(86_400);
        Self {
            day: total.div_euclid(86_400),
            hour: (of_day / 3600) as i32,
            minute: (of_day % 3600 / 60) as i32,
            second: (of_day % 60) as i32,
            nanos: self.nanos,
        }
    }

    pub fn add_mins(self, mins: i64) -> Self {
        self.add_secs(mins * 60)
    }

    pub fn add_hours(self, hours: i64) -> Self {
        self.add_secs(hours * 3600)
    }

    /// Changes only the day, as a calendar shift would
    pub fn add_days(self, days: i64) -> Self {
        Self {
            day: self.day + days,
            ..self
        }
    }

    /// Changes only the sub-second part, saturating below the next second
    pub fn add_nanos(self, nanos: u32) -> Self {
        Self {
            nanos: (self.nanos + nanos).min(999_999_999),
            ..self
        }
    }
}

impl ClockValue for TestClock {
    fn clock(&self) -> (i32, i32, i32) {
        (self.hour, self.minute, self.second)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Noon, so small offsets never cross into another day
pub fn base() -> TestClock {
    TestClock::at(12, 0, 0)
}

/// Pairs of (earlier, later) clock values
pub fn unequal_cases() -> [(TestClock, TestClock); 6] {
    let base = base();
    [
        (base, base.add_secs(2)),
        (base.add_secs(-2), base),
        (base, base.add_mins(2)),
        (base.add_mins(-2), base),
        (base, base.add_hours(2)),
        (base.add_hours(-2), base),
    ]
}

/// Pairs differing only in date or sub-second fields
pub fn equal_cases() -> [(TestClock, TestClock); 8] {
    let base = base();
    [
        (base, base),
        (base, base.add_days(3653)),
        (base, base.add_days(-1826)),
        (base, base.add_days(1)),
        (base, base.add_days(-1)),
        (base, base.add_nanos(2)),
        (base, base.add_nanos(2_000)),
        (base, base.add_nanos(2_000_000)),
    ]
}
