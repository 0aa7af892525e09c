//! Output pins driven from sequencer outputs.

use embedded_hal::digital::OutputPin;

use crate::error::SignalError;
use crate::sequencer::SignalOutputs;

/// STEP, DIR and DONE output pins.
///
/// Each pin is written only when its level changes. DIR is written before
/// STEP so the direction is settled when a pulse starts.
pub struct SignalPins<STEP, DIR, DONE>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DONE: OutputPin,
{
    step_pin: STEP,
    dir_pin: DIR,
    done_pin: DONE,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    // Last written levels; `None` until the first write.
    step_level: Option<bool>,
    dir_level: Option<bool>,
    done_level: Option<bool>,
}

impl<STEP, DIR, DONE> SignalPins<STEP, DIR, DONE>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DONE: OutputPin,
{
    /// Wrap the pins. Nothing is written until the first [`apply`](Self::apply).
    pub fn new(step_pin: STEP, dir_pin: DIR, done_pin: DONE, invert_direction: bool) -> Self {
        Self {
            step_pin,
            dir_pin,
            done_pin,
            invert_direction,
            step_level: None,
            dir_level: None,
            done_level: None,
        }
    }

    /// Drive the pins to match `outputs`.
    ///
    /// # Errors
    ///
    /// Returns `SignalError::PinError` if a pin write fails.
    pub fn apply(&mut self, outputs: &SignalOutputs) -> Result<(), SignalError> {
        let dir_high = outputs.direction.level(self.invert_direction);
        write_level(&mut self.dir_pin, &mut self.dir_level, dir_high)?;
        write_level(&mut self.step_pin, &mut self.step_level, outputs.step)?;
        write_level(&mut self.done_pin, &mut self.done_level, outputs.done)?;
        Ok(())
    }

    /// Whether direction pin logic is inverted.
    #[inline]
    pub fn invert_direction(&self) -> bool {
        self.invert_direction
    }

    /// Release the pins.
    pub fn release(self) -> (STEP, DIR, DONE) {
        (self.step_pin, self.dir_pin, self.done_pin)
    }
}

fn write_level<P: OutputPin>(
    pin: &mut P,
    cached: &mut Option<bool>,
    high: bool,
) -> Result<(), SignalError> {
    if *cached == Some(high) {
        return Ok(());
    }

    if high {
        pin.set_high().map_err(|_| SignalError::PinError)?;
    } else {
        pin.set_low().map_err(|_| SignalError::PinError)?;
    }

    *cached = Some(high);
    Ok(())
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    use super::*;
    use crate::motion::Direction;

    #[test]
    fn test_writes_only_on_change() {
        let mut step = PinMock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
        ]);
        let mut dir = PinMock::new(&[Transaction::set(State::Low)]);
        let mut done = PinMock::new(&[Transaction::set(State::Low)]);

        let mut pins = SignalPins::new(step.clone(), dir.clone(), done.clone(), false);
        let idle = SignalOutputs {
            step: false,
            direction: Direction::Reverse,
            done: false,
        };
        let pulse = SignalOutputs { step: true, ..idle };

        pins.apply(&idle).unwrap();
        pins.apply(&idle).unwrap();
        pins.apply(&pulse).unwrap();
        pins.apply(&pulse).unwrap();
        pins.apply(&idle).unwrap();

        step.done();
        dir.done();
        done.done();
    }

    #[test]
    fn test_inverted_direction() {
        let mut step = PinMock::new(&[Transaction::set(State::Low)]);
        let mut dir = PinMock::new(&[Transaction::set(State::Low)]);
        let mut done = PinMock::new(&[Transaction::set(State::High)]);

        let mut pins = SignalPins::new(step.clone(), dir.clone(), done.clone(), true);
        pins.apply(&SignalOutputs {
            step: false,
            direction: Direction::Forward,
            done: true,
        })
        .unwrap();

        step.done();
        dir.done();
        done.done();
    }
}
