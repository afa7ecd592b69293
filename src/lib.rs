#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ClockValue`**: Trait to implement for anything that reports an `(hours, minutes, seconds)` triple
//! - **`after` / `before` / `equals` / `compare`**: Order two clock values by time of day
//! - **`between`**: Signed same-cycle duration from one clock value to another
//! - **`until`**: Forward duration that wraps through midnight
//! - **`ClockDuration`**: Signed whole-second duration returned by `between`
//!
//! Only the triple is compared. Calendar dates, sub-second fields and time zone
//! offsets carried by the implementing type never affect a result.

pub mod clock;
pub mod compare;
pub mod duration;

#[cfg(feature = "chrono")]
mod chrono_impls;
#[cfg(feature = "time")]
mod time_impls;

pub use clock::{ClockValue, SECONDS_PER_DAY, seconds_since_midnight};
pub use compare::{after, before, compare, equals};
pub use duration::{ClockDuration, DurationError, between, until};
