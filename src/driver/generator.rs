//! Clocked step generator on embedded-hal pins.
//!
//! Runs a [`StepSequencer`] against real pins, one tick per clock period of
//! [`DelayNs`] delay.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::Ticks;
use crate::config::ClockConfig;
use crate::error::{Result, SignalError};
use crate::log::{debug, info};
use crate::motion::{RelativeAngle, StepCommand};
use crate::sequencer::{SequencerState, SignalInputs, SignalOutputs, StepSequencer};

use super::pins::SignalPins;

/// Step generator driving STEP/DIR/DONE pins.
///
/// Generic over:
/// - `STEP`, `DIR`, `DONE`: output pin types (must implement `OutputPin`)
/// - `DELAY`: Delay provider for the tick clock (must implement `DelayNs`)
pub struct StepGenerator<STEP, DIR, DONE, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DONE: OutputPin,
    DELAY: DelayNs,
{
    sequencer: StepSequencer,
    pins: SignalPins<STEP, DIR, DONE>,
    delay: DELAY,
    clock: ClockConfig,

    /// Ticks run since construction.
    elapsed: Ticks,

    /// Absolute position in steps, updated when a cycle reaches Done.
    position: i64,
}

impl<STEP, DIR, DONE, DELAY> StepGenerator<STEP, DIR, DONE, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DONE: OutputPin,
    DELAY: DelayNs,
{
    pub(crate) fn new(
        sequencer: StepSequencer,
        pins: SignalPins<STEP, DIR, DONE>,
        delay: DELAY,
        clock: ClockConfig,
    ) -> Self {
        Self {
            sequencer,
            pins,
            delay,
            clock,
            elapsed: Ticks(0),
            position: 0,
        }
    }

    /// Run one clock tick: advance the sequencer, drive the pins, wait one period.
    ///
    /// # Errors
    ///
    /// Returns `SignalError::PinError` if a pin write fails.
    pub fn tick(&mut self, inputs: &SignalInputs) -> Result<SignalOutputs> {
        let was_done = self.sequencer.state() == SequencerState::Done;
        let outputs = self.sequencer.tick(inputs);

        if !was_done && self.sequencer.state() == SequencerState::Done {
            if let Some(command) = self.sequencer.command() {
                self.position += command.signed_steps();
            }
        }

        self.pins.apply(&outputs)?;
        self.delay.delay_ns(self.clock.period_ns);
        self.elapsed = self.elapsed + Ticks(1);

        Ok(outputs)
    }

    /// Run `count` ticks with enable low.
    ///
    /// # Errors
    ///
    /// Returns `SignalError::PinError` if a pin write fails.
    pub fn idle_ticks(&mut self, count: u32) -> Result<()> {
        let inputs = SignalInputs::released(RelativeAngle::ZERO);
        for _ in 0..count {
            self.tick(&inputs)?;
        }
        Ok(())
    }

    /// Run one complete conversion for `angle` (blocking).
    ///
    /// Drives enable low for one tick, raises it until done rises, then lowers
    /// it until done falls. Returns the executed command.
    ///
    /// # Errors
    ///
    /// - `SignalError::Busy` if a cycle is already in flight
    /// - `DecodeError::StepCountOutOfRange` if the overflow policy rejects the angle;
    ///   nothing is driven in that case
    /// - `SignalError::PinError` if a pin write fails
    pub fn move_by(&mut self, angle: RelativeAngle) -> Result<StepCommand> {
        let state = self.sequencer.state();
        if state.is_busy() {
            return Err(SignalError::Busy(state).into());
        }

        // Decode up-front: a rejected request would never raise done
        let command = self.sequencer.decoder().decode(angle)?;
        info!("generator: move {} ({} steps)", angle, command.step_count);

        let released = SignalInputs::released(angle);
        let requested = SignalInputs::requested(angle);

        // Make sure the request is seen as a rising edge
        self.tick(&released)?;

        while !self.tick(&requested)?.done {}
        debug!("generator: done at tick {}", self.elapsed.value());

        while self.tick(&released)?.done {}

        Ok(command)
    }

    /// Current sequencer state.
    #[inline]
    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    /// Get the sequencer.
    #[inline]
    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    /// Get the clock configuration.
    #[inline]
    pub fn clock(&self) -> &ClockConfig {
        &self.clock
    }

    /// Ticks run since construction.
    #[inline]
    pub fn elapsed(&self) -> Ticks {
        self.elapsed
    }

    /// Absolute position in steps from the origin.
    #[inline]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Set the current position as the origin (zero).
    pub fn set_origin(&mut self) {
        self.position = 0;
    }

    /// Release the hardware resources.
    pub fn release(self) -> (STEP, DIR, DONE, DELAY) {
        let (step, dir, done) = self.pins.release();
        (step, dir, done, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    use super::*;
    use crate::config::GeneratorConfig;
    use crate::error::{DecodeError, Error};

    fn generator(
        config: &GeneratorConfig,
        step: PinMock,
        dir: PinMock,
        done: PinMock,
    ) -> StepGenerator<PinMock, PinMock, PinMock, NoopDelay> {
        StepGenerator::new(
            StepSequencer::from_config(config).unwrap(),
            SignalPins::new(step, dir, done, config.invert_direction),
            NoopDelay::new(),
            ClockConfig::default(),
        )
    }

    #[test]
    fn test_zero_move_toggles_done_only() {
        let mut step = PinMock::new(&[Transaction::set(State::Low)]);
        let mut dir = PinMock::new(&[Transaction::set(State::High)]);
        let mut done = PinMock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]);

        let config = GeneratorConfig::new(200, 4);
        let mut gen = generator(&config, step.clone(), dir.clone(), done.clone());

        let command = gen.move_by(RelativeAngle::ZERO).unwrap();
        assert!(command.is_zero());
        assert_eq!(gen.state(), SequencerState::Idle);
        // released, rise, converting -> done, release
        assert_eq!(gen.elapsed(), Ticks(4));

        step.done();
        dir.done();
        done.done();
    }

    #[test]
    fn test_reverse_move_pulses() {
        // 1/100 revolution of 200 steps = 2 steps, inverted DIR
        let config = GeneratorConfig {
            invert_direction: true,
            ..GeneratorConfig::new(200, 4)
        };
        let mut step = PinMock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]);
        // Forward (low when inverted) at power-up, then reverse
        let mut dir = PinMock::new(&[Transaction::set(State::Low), Transaction::set(State::High)]);
        let mut done = PinMock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]);

        let mut gen = generator(&config, step.clone(), dir.clone(), done.clone());
        let angle = RelativeAngle::from_raw(-((1i64 << 31) / 100) as i32);

        let command = gen.move_by(angle).unwrap();
        assert_eq!(command.step_count, 2);
        assert_eq!(gen.position(), -2);

        step.done();
        dir.done();
        done.done();
    }

    #[test]
    fn test_rejected_move_drives_nothing() {
        let config = GeneratorConfig {
            fraction_bits: 8,
            overflow: crate::config::OverflowPolicy::Reject,
            ..GeneratorConfig::new(200, 4)
        };
        let mut step = PinMock::new(&[]);
        let mut dir = PinMock::new(&[]);
        let mut done = PinMock::new(&[]);

        let mut gen = generator(&config, step.clone(), dir.clone(), done.clone());
        let result = gen.move_by(RelativeAngle::from_raw(3 << 8));

        assert_eq!(
            result,
            Err(Error::Decode(DecodeError::StepCountOutOfRange { steps: 600, max: 200 }))
        );
        assert_eq!(gen.elapsed(), Ticks(0));

        step.done();
        dir.done();
        done.done();
    }

    #[test]
    fn test_busy_while_cycle_in_flight() {
        let config = GeneratorConfig::new(200, 4);
        let mut step = PinMock::new(&[Transaction::set(State::Low)]);
        let mut dir = PinMock::new(&[Transaction::set(State::High)]);
        let mut done = PinMock::new(&[Transaction::set(State::Low)]);

        let mut gen = generator(&config, step.clone(), dir.clone(), done.clone());
        gen.tick(&SignalInputs::requested(RelativeAngle::from_raw(1 << 28)))
            .unwrap();

        assert_eq!(
            gen.move_by(RelativeAngle::ZERO),
            Err(Error::Signal(SignalError::Busy(SequencerState::Converting)))
        );

        step.done();
        dir.done();
        done.done();
    }
}
