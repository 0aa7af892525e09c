//! Fixed-point angle decoder.
//!
//! Turns a [`RelativeAngle`] into a [`StepCommand`]:
//!
//! ```text
//! step_count = round(|angle| × steps_per_revolution / 2^fraction_bits)
//! ```
//!
//! computed exactly in 64-bit integers. The operand is a magnitude, so adding
//! half an LSB before the shift rounds ties away from zero.

use crate::config::OverflowPolicy;
use crate::error::{ConfigError, DecodeError, Result};

use super::angle::{FixedScale, RelativeAngle};
use super::command::{Direction, StepCommand};

/// Pure angle-to-step-count converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngleDecoder {
    scale: FixedScale,
    steps_per_revolution: u32,
    overflow: OverflowPolicy,
}

impl AngleDecoder {
    /// Create a decoder.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepsPerRevolution` if `steps_per_revolution` is zero.
    pub fn new(
        scale: FixedScale,
        steps_per_revolution: u32,
        overflow: OverflowPolicy,
    ) -> Result<Self> {
        if steps_per_revolution == 0 {
            return Err(ConfigError::InvalidStepsPerRevolution(steps_per_revolution).into());
        }

        Ok(Self {
            scale,
            steps_per_revolution,
            overflow,
        })
    }

    /// Get the fixed-point scale.
    #[inline]
    pub fn scale(&self) -> FixedScale {
        self.scale
    }

    /// Get the steps per revolution bound.
    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution
    }

    /// Get the overflow policy.
    #[inline]
    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Rounded step count before the overflow policy is applied.
    pub fn steps_for(&self, angle: RelativeAngle) -> u64 {
        // |angle| <= 2^31 and steps_per_revolution < 2^32, so the product fits in 63 bits
        let product = u64::from(angle.magnitude()) * u64::from(self.steps_per_revolution);
        (product + self.scale.half()) >> self.scale.fraction_bits()
    }

    /// Decode an angle into a step command.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::StepCountOutOfRange` if the step count exceeds one
    /// revolution and the overflow policy is [`OverflowPolicy::Reject`].
    pub fn decode(&self, angle: RelativeAngle) -> core::result::Result<StepCommand, DecodeError> {
        let steps = self.steps_for(angle);
        let step_count = self
            .overflow
            .apply(steps, self.steps_per_revolution)
            .ok_or(DecodeError::StepCountOutOfRange {
                steps,
                max: self.steps_per_revolution,
            })?;

        Ok(StepCommand::new(Direction::from_raw(angle.raw()), step_count))
    }
}
