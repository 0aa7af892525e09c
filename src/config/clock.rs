//! Sequencer clock configuration.

use serde::Deserialize;

use crate::error::ConfigError;

use super::units::Nanoseconds;

/// Clock driving the sequencer, one tick per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Clock period in nanoseconds (40 ns = 25 MHz).
    #[serde(default = "default_period_ns")]
    pub period_ns: u32,
}

fn default_period_ns() -> u32 {
    40
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            period_ns: default_period_ns(),
        }
    }
}

impl ClockConfig {
    /// Create a clock with the given period.
    pub const fn new(period_ns: u32) -> Self {
        Self { period_ns }
    }

    /// Clock period.
    #[inline]
    pub fn period(&self) -> Nanoseconds {
        Nanoseconds(u64::from(self.period_ns))
    }

    /// Clock frequency in hertz, truncated.
    #[inline]
    pub fn frequency_hz(&self) -> u32 {
        if self.period_ns == 0 {
            0
        } else {
            1_000_000_000 / self.period_ns
        }
    }

    /// Ticks between step rising edges for a given step rate, rounded to nearest.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepRate` if the rate is zero or so high
    /// that fewer than two ticks fit in one step.
    pub fn interval_for_rate(&self, step_rate_hz: u32) -> Result<u32, ConfigError> {
        if self.period_ns == 0 {
            return Err(ConfigError::InvalidClockPeriod(self.period_ns));
        }
        if step_rate_hz == 0 {
            return Err(ConfigError::InvalidStepRate(step_rate_hz));
        }

        let step_period_ns = 1_000_000_000u64 / u64::from(step_rate_hz);
        let ticks = Nanoseconds(step_period_ns).to_ticks(self.period()).value();

        if ticks < 2 {
            return Err(ConfigError::InvalidStepRate(step_rate_hz));
        }

        u32::try_from(ticks).map_err(|_| ConfigError::InvalidStepRate(step_rate_hz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_25_mhz() {
        let clock = ClockConfig::default();
        assert_eq!(clock.period_ns, 40);
        assert_eq!(clock.frequency_hz(), 25_000_000);
    }

    #[test]
    fn test_interval_for_rate() {
        let clock = ClockConfig::default();
        // 1 kHz step rate at 25 MHz = 25000 ticks per step
        assert_eq!(clock.interval_for_rate(1000).unwrap(), 25_000);
    }

    #[test]
    fn test_rate_too_high() {
        let clock = ClockConfig::default();
        assert_eq!(
            clock.interval_for_rate(25_000_000),
            Err(ConfigError::InvalidStepRate(25_000_000))
        );
        assert_eq!(clock.interval_for_rate(0), Err(ConfigError::InvalidStepRate(0)));
    }
}
