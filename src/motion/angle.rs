//! Fixed-point relative angle.
//!
//! A [`RelativeAngle`] is a signed 32-bit fraction of one revolution. The
//! [`FixedScale`] says how many raw units make up that revolution.

use crate::error::{ConfigError, DecodeError};

/// Number of fractional bits of a relative angle.
///
/// One full revolution is `2^fraction_bits` raw units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedScale(u8);

impl FixedScale {
    /// Q1.31: `i32::MIN` is exactly one reverse revolution.
    pub const Q31: Self = Self(31);

    /// Largest supported fraction width.
    pub const MAX_FRACTION_BITS: u8 = 31;

    /// Create a new scale with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFractionBits` if `fraction_bits > 31`.
    pub fn new(fraction_bits: u8) -> Result<Self, ConfigError> {
        if fraction_bits <= Self::MAX_FRACTION_BITS {
            Ok(Self(fraction_bits))
        } else {
            Err(ConfigError::InvalidFractionBits(fraction_bits))
        }
    }

    /// Get the number of fractional bits.
    #[inline]
    pub const fn fraction_bits(self) -> u8 {
        self.0
    }

    /// Raw units in one full revolution.
    #[inline]
    pub const fn full_scale(self) -> u64 {
        1 << self.0
    }

    /// Half of one raw unit after scaling, used for round-half-up.
    #[inline]
    pub(crate) const fn half(self) -> u64 {
        if self.0 == 0 {
            0
        } else {
            1 << (self.0 - 1)
        }
    }
}

impl Default for FixedScale {
    fn default() -> Self {
        Self::Q31
    }
}

impl TryFrom<u8> for FixedScale {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Signed displacement as a fixed-point fraction of one revolution.
///
/// The sign gives the rotation direction. The value is only ever read by the
/// decoder; the sequencer latches a copy on the enable rising edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelativeAngle(i32);

impl RelativeAngle {
    /// No displacement.
    pub const ZERO: Self = Self(0);

    /// Create an angle from its raw fixed-point bits.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Get the raw fixed-point bits.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Magnitude in raw units. `i32::MIN` maps to `2^31`.
    #[inline]
    pub const fn magnitude(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// True for reverse displacements.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Create from a fraction of a revolution, rounding ties away from zero.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::AngleOutOfRange` if the value does not fit in 32 bits
    /// at this scale or is not finite.
    pub fn from_revolutions(revolutions: f64, scale: FixedScale) -> Result<Self, DecodeError> {
        let raw = libm::round(revolutions * scale.full_scale() as f64);
        if !raw.is_finite() || raw < f64::from(i32::MIN) || raw > f64::from(i32::MAX) {
            return Err(DecodeError::AngleOutOfRange);
        }
        Ok(Self(raw as i32))
    }

    /// Create from degrees, 360 degrees being one revolution.
    ///
    /// # Errors
    ///
    /// Same as [`RelativeAngle::from_revolutions`].
    pub fn from_degrees(degrees: f64, scale: FixedScale) -> Result<Self, DecodeError> {
        Self::from_revolutions(degrees / 360.0, scale)
    }

    /// Fraction of a revolution this angle represents at the given scale.
    #[inline]
    pub fn to_revolutions(self, scale: FixedScale) -> f64 {
        f64::from(self.0) / scale.full_scale() as f64
    }
}

impl From<i32> for RelativeAngle {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}
