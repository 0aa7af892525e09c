//! Generator configuration from TOML.

use serde::Deserialize;

use crate::error::Result;
use crate::motion::{AngleDecoder, FixedScale};
use crate::sequencer::PulseTiming;

use super::overflow::OverflowPolicy;

/// Angle decoding and pulse train parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeneratorConfig {
    /// Output steps for one full revolution.
    pub steps_per_revolution: u32,

    /// Fractional bits of the angle input; one revolution is `2^fraction_bits`.
    #[serde(default = "default_fraction_bits")]
    pub fraction_bits: u8,

    /// Clock ticks between consecutive step rising edges.
    pub pulse_interval_ticks: u32,

    /// Clock ticks the step output is held high (defaults to half the interval).
    #[serde(default)]
    pub pulse_width_ticks: Option<u32>,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// What to do with a step count above one revolution.
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

fn default_fraction_bits() -> u8 {
    FixedScale::Q31.fraction_bits()
}

impl GeneratorConfig {
    /// Create a configuration with Q1.31 angles, half-duty pulses and clamping.
    pub fn new(steps_per_revolution: u32, pulse_interval_ticks: u32) -> Self {
        Self {
            steps_per_revolution,
            fraction_bits: default_fraction_bits(),
            pulse_interval_ticks,
            pulse_width_ticks: None,
            invert_direction: false,
            overflow: OverflowPolicy::default(),
        }
    }

    /// Effective pulse width in ticks.
    pub fn pulse_width(&self) -> u32 {
        self.pulse_width_ticks
            .unwrap_or(self.pulse_interval_ticks / 2)
    }

    /// Fixed-point scale of the angle input.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFractionBits` if `fraction_bits > 31`.
    pub fn scale(&self) -> Result<FixedScale> {
        Ok(FixedScale::new(self.fraction_bits)?)
    }

    /// Pulse timing for the sequencer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPulseTiming` for an unusable width/interval pair.
    pub fn timing(&self) -> Result<PulseTiming> {
        Ok(PulseTiming::new(self.pulse_width(), self.pulse_interval_ticks)?)
    }

    /// Angle decoder for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale or steps per revolution are invalid.
    pub fn decoder(&self) -> Result<AngleDecoder> {
        AngleDecoder::new(self.scale()?, self.steps_per_revolution, self.overflow)
    }
}
