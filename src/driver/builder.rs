//! Builder pattern for StepGenerator.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{ClockConfig, GeneratorConfig, OverflowPolicy, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::motion::FixedScale;
use crate::sequencer::StepSequencer;

use super::generator::StepGenerator;
use super::pins::SignalPins;

/// Builder for creating StepGenerator instances.
pub struct StepGeneratorBuilder<STEP, DIR, DONE, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DONE: OutputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    done_pin: Option<DONE>,
    delay: Option<DELAY>,
    steps_per_revolution: Option<u32>,
    fraction_bits: u8,
    pulse_interval_ticks: Option<u32>,
    pulse_width_ticks: Option<u32>,
    step_rate_hz: Option<u32>,
    invert_direction: bool,
    overflow: OverflowPolicy,
    clock: ClockConfig,
}

impl<STEP, DIR, DONE, DELAY> Default for StepGeneratorBuilder<STEP, DIR, DONE, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DONE: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, DONE, DELAY> StepGeneratorBuilder<STEP, DIR, DONE, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DONE: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            done_pin: None,
            delay: None,
            steps_per_revolution: None,
            fraction_bits: FixedScale::Q31.fraction_bits(),
            pulse_interval_ticks: None,
            pulse_width_ticks: None,
            step_rate_hz: None,
            invert_direction: false,
            overflow: OverflowPolicy::default(),
            clock: ClockConfig::default(),
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the DONE pin.
    pub fn done_pin(mut self, pin: DONE) -> Self {
        self.done_pin = Some(pin);
        self
    }

    /// Set the delay provider used as the tick clock.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set output steps per revolution.
    pub fn steps_per_revolution(mut self, steps: u32) -> Self {
        self.steps_per_revolution = Some(steps);
        self
    }

    /// Set the number of fractional bits of the angle input.
    pub fn fraction_bits(mut self, bits: u8) -> Self {
        self.fraction_bits = bits;
        self
    }

    /// Set the pulse interval in ticks.
    pub fn pulse_interval_ticks(mut self, ticks: u32) -> Self {
        self.pulse_interval_ticks = Some(ticks);
        self
    }

    /// Set the pulse width in ticks (defaults to half the interval).
    pub fn pulse_width_ticks(mut self, ticks: u32) -> Self {
        self.pulse_width_ticks = Some(ticks);
        self
    }

    /// Derive the pulse interval from a step rate and the clock period.
    ///
    /// Takes precedence over [`pulse_interval_ticks`](Self::pulse_interval_ticks).
    pub fn step_rate_hz(mut self, rate: u32) -> Self {
        self.step_rate_hz = Some(rate);
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Set the out-of-range step count policy.
    pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    /// Set the tick clock.
    pub fn clock(mut self, clock: ClockConfig) -> Self {
        self.clock = clock;
        self
    }

    /// Configure from a GeneratorConfig.
    pub fn from_generator_config(mut self, config: &GeneratorConfig) -> Self {
        self.steps_per_revolution = Some(config.steps_per_revolution);
        self.fraction_bits = config.fraction_bits;
        self.pulse_interval_ticks = Some(config.pulse_interval_ticks);
        self.pulse_width_ticks = config.pulse_width_ticks;
        self.invert_direction = config.invert_direction;
        self.overflow = config.overflow;
        self
    }

    /// Configure from a SystemConfig.
    pub fn from_config(self, config: &SystemConfig) -> Self {
        self.from_generator_config(&config.generator).clock(config.clock)
    }

    /// Build the StepGenerator.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or parameters are invalid.
    pub fn build(self) -> Result<StepGenerator<STEP, DIR, DONE, DELAY>> {
        let step_pin = self.step_pin.ok_or_else(|| missing("step_pin"))?;
        let dir_pin = self.dir_pin.ok_or_else(|| missing("dir_pin"))?;
        let done_pin = self.done_pin.ok_or_else(|| missing("done_pin"))?;
        let delay = self.delay.ok_or_else(|| missing("delay"))?;

        let steps_per_revolution = self
            .steps_per_revolution
            .ok_or_else(|| missing("steps_per_revolution"))?;

        if self.clock.period_ns == 0 {
            return Err(Error::Config(ConfigError::InvalidClockPeriod(0)));
        }

        let pulse_interval_ticks = match self.step_rate_hz {
            Some(rate) => self.clock.interval_for_rate(rate)?,
            None => self
                .pulse_interval_ticks
                .ok_or_else(|| missing("pulse_interval_ticks"))?,
        };

        let config = GeneratorConfig {
            steps_per_revolution,
            fraction_bits: self.fraction_bits,
            pulse_interval_ticks,
            pulse_width_ticks: self.pulse_width_ticks,
            invert_direction: self.invert_direction,
            overflow: self.overflow,
        };

        let sequencer = StepSequencer::from_config(&config)?;
        let pins = SignalPins::new(step_pin, dir_pin, done_pin, self.invert_direction);

        Ok(StepGenerator::new(sequencer, pins, delay, self.clock))
    }
}

fn missing(name: &'static str) -> Error {
    Error::Config(ConfigError::MissingParameter(name))
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::Mock as PinMock;

    use super::*;

    type Builder = StepGeneratorBuilder<PinMock, PinMock, PinMock, NoopDelay>;

    fn with_hardware(builder: Builder) -> (Builder, [PinMock; 3]) {
        let pins = [PinMock::new(&[]), PinMock::new(&[]), PinMock::new(&[])];
        let builder = builder
            .step_pin(pins[0].clone())
            .dir_pin(pins[1].clone())
            .done_pin(pins[2].clone())
            .delay(NoopDelay::new());
        (builder, pins)
    }

    fn finish(mut pins: [PinMock; 3]) {
        for pin in pins.iter_mut() {
            pin.done();
        }
    }

    #[test]
    fn test_missing_pin() {
        let result = Builder::new().steps_per_revolution(200).build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingParameter("step_pin")))
        ));
    }

    #[test]
    fn test_missing_interval() {
        let (builder, pins) = with_hardware(Builder::new().steps_per_revolution(200));
        assert!(matches!(
            builder.build(),
            Err(Error::Config(ConfigError::MissingParameter("pulse_interval_ticks")))
        ));
        finish(pins);
    }

    #[test]
    fn test_step_rate_sets_interval() {
        let (builder, pins) = with_hardware(
            Builder::new()
                .steps_per_revolution(3200)
                .clock(ClockConfig::new(40))
                .step_rate_hz(1000),
        );
        let gen = builder.build().unwrap();
        assert_eq!(gen.sequencer().timing().interval_ticks(), 25_000);
        assert_eq!(gen.sequencer().timing().width_ticks(), 12_500);
        finish(pins);
    }

    #[test]
    fn test_from_config() {
        let config = SystemConfig::new(GeneratorConfig {
            fraction_bits: 20,
            pulse_width_ticks: Some(1),
            ..GeneratorConfig::new(400, 6)
        })
        .with_clock(ClockConfig::new(20));

        let (builder, pins) = with_hardware(Builder::new().from_config(&config));
        let gen = builder.build().unwrap();

        assert_eq!(gen.sequencer().decoder().steps_per_revolution(), 400);
        assert_eq!(gen.sequencer().decoder().scale().fraction_bits(), 20);
        assert_eq!(gen.sequencer().timing().width_ticks(), 1);
        assert_eq!(gen.clock().period_ns, 20);
        finish(pins);
    }

    #[test]
    fn test_invalid_timing_rejected() {
        let (builder, pins) = with_hardware(
            Builder::new()
                .steps_per_revolution(200)
                .pulse_interval_ticks(4)
                .pulse_width_ticks(4),
        );
        assert!(matches!(
            builder.build(),
            Err(Error::Config(ConfigError::InvalidPulseTiming { width: 4, interval: 4 }))
        ));
        finish(pins);
    }
}
