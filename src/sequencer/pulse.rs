//! Pulse timing and counting.

use crate::config::units::Ticks;
use crate::error::ConfigError;

/// Shape of the step pulse train.
///
/// Each pulse occupies `interval_ticks`; the step output is high for the first
/// `width_ticks` of them and low for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTiming {
    width_ticks: u32,
    interval_ticks: u32,
}

impl PulseTiming {
    /// Create a pulse timing with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPulseTiming` unless `1 <= width < interval`.
    pub fn new(width_ticks: u32, interval_ticks: u32) -> Result<Self, ConfigError> {
        if width_ticks == 0 || width_ticks >= interval_ticks {
            return Err(ConfigError::InvalidPulseTiming {
                width: width_ticks,
                interval: interval_ticks,
            });
        }

        Ok(Self {
            width_ticks,
            interval_ticks,
        })
    }

    /// Half-duty pulses at the given interval.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPulseTiming` if `interval_ticks < 2`.
    pub fn half_duty(interval_ticks: u32) -> Result<Self, ConfigError> {
        Self::new(interval_ticks / 2, interval_ticks)
    }

    /// Ticks the step output is held high.
    #[inline]
    pub fn width_ticks(&self) -> u32 {
        self.width_ticks
    }

    /// Ticks between consecutive rising edges.
    #[inline]
    pub fn interval_ticks(&self) -> u32 {
        self.interval_ticks
    }

    /// Ticks from the latching edge to the edge that raises done.
    ///
    /// One Converting tick plus one full interval per pulse.
    #[inline]
    pub fn cycle_ticks(&self, step_count: u32) -> Ticks {
        Ticks(1 + u64::from(step_count) * u64::from(self.interval_ticks))
    }
}

/// What happened to the pulse train on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PulseEvent {
    /// Still inside the current interval.
    Hold,
    /// A new pulse started.
    Rising,
    /// The last pulse's interval ended.
    Finished,
}

/// Emitted-pulse counter, alive only while pulsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PulseCounter {
    /// Pulses started so far.
    emitted: u32,
    /// Ticks elapsed inside the current interval.
    phase: u32,
}

impl PulseCounter {
    /// Counter at zero with no pulse started.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Start a new pulse.
    pub(crate) fn fire(&mut self) {
        self.emitted += 1;
        self.phase = 0;
    }

    /// Pulses started so far.
    #[inline]
    pub(crate) fn emitted(&self) -> u32 {
        self.emitted
    }

    /// Step output level for the current tick.
    #[inline]
    pub(crate) fn step_level(&self, timing: &PulseTiming) -> bool {
        self.phase < timing.width_ticks
    }

    /// Advance by one tick.
    pub(crate) fn tick(&mut self, timing: &PulseTiming, step_count: u32) -> PulseEvent {
        self.phase += 1;
        if self.phase < timing.interval_ticks {
            return PulseEvent::Hold;
        }

        if self.emitted >= step_count {
            PulseEvent::Finished
        } else {
            self.fire();
            PulseEvent::Rising
        }
    }
}
