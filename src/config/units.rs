//! Unit types for timing quantities.
//!
//! Provides type-safe representations of clock ticks and wall-clock durations
//! to prevent unit confusion between the sequencer and the pin driver.

use core::ops::{Add, Mul, Sub};

use serde::Deserialize;

/// A count of sequencer clock ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Ticks(pub u64);

impl Ticks {
    /// Create a new Ticks value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Duration of this many ticks at the given clock period.
    #[inline]
    pub const fn to_duration(self, period: Nanoseconds) -> Nanoseconds {
        Nanoseconds(self.0.saturating_mul(period.0))
    }
}

impl Add for Ticks {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Ticks {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<u64> for Ticks {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// A duration in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Nanoseconds(pub u64);

impl Nanoseconds {
    /// Create a new Nanoseconds value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whole clock ticks that fit in this duration, rounded to nearest.
    ///
    /// Returns `Ticks(0)` for a zero period.
    #[inline]
    pub const fn to_ticks(self, period: Nanoseconds) -> Ticks {
        if period.0 == 0 {
            Ticks(0)
        } else {
            Ticks((self.0 + period.0 / 2) / period.0)
        }
    }
}
