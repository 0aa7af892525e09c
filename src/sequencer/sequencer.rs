//! Step pulse sequencer.
//!
//! A synchronous state machine advanced by [`StepSequencer::tick`], one call
//! per clock edge:
//!
//! ```text
//! Idle --enable rises--> Converting --1 tick--> Pulsing --last interval--> Done
//!   ^                        |                                              |
//!   |                        +--------------- step_count == 0 ------------->|
//!   +------------------------------ enable low ----------------------------+
//! ```
//!
//! The angle is latched and decoded on the rising edge; later changes to the
//! inputs do not affect the cycle in flight.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::log::{debug, trace, warn};
use crate::motion::{AngleDecoder, Direction, RelativeAngle, StepCommand};

use super::handshake::Handshake;
use super::pulse::{PulseCounter, PulseEvent, PulseTiming};
use super::signals::{SignalInputs, SignalOutputs};
use super::state::SequencerState;

/// Internal phase; carries the data that only exists in that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Converting { command: StepCommand },
    Pulsing { command: StepCommand, counter: PulseCounter },
    Done { command: StepCommand },
}

/// Angle-to-step conversion state machine.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    decoder: AngleDecoder,
    timing: PulseTiming,
    handshake: Handshake,
    phase: Phase,
    /// Direction output, held between cycles.
    direction: Direction,
    cycles_completed: u32,
    rejected_requests: u32,
}

impl StepSequencer {
    /// Create a sequencer in the power-up state.
    pub fn new(decoder: AngleDecoder, timing: PulseTiming) -> Self {
        Self {
            decoder,
            timing,
            handshake: Handshake::new(),
            phase: Phase::Idle,
            direction: Direction::Forward,
            cycles_completed: 0,
            rejected_requests: 0,
        }
    }

    /// Create a sequencer from a generator configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the decoder or pulse timing parameters are invalid.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        Ok(Self::new(config.decoder()?, config.timing()?))
    }

    /// Advance one clock tick.
    ///
    /// Samples `inputs`, performs at most one state transition, and returns the
    /// outputs driven after the edge.
    pub fn tick(&mut self, inputs: &SignalInputs) -> SignalOutputs {
        let edge = self.handshake.sample(inputs.enable);
        let phase = self.phase;

        self.phase = match phase {
            Phase::Idle => {
                if self.handshake.accepts(SequencerState::Idle, edge) {
                    self.latch(inputs.relative_angle)
                } else {
                    Phase::Idle
                }
            }
            Phase::Converting { command } => {
                if command.is_zero() {
                    self.finish(command)
                } else {
                    let mut counter = PulseCounter::new();
                    counter.fire();
                    trace!("sequencer: pulsing {} steps", command.step_count);
                    Phase::Pulsing { command, counter }
                }
            }
            Phase::Pulsing {
                command,
                mut counter,
            } => match counter.tick(&self.timing, command.step_count) {
                PulseEvent::Finished => self.finish(command),
                PulseEvent::Hold | PulseEvent::Rising => Phase::Pulsing { command, counter },
            },
            Phase::Done { command } => {
                if self.handshake.may_release(SequencerState::Done, edge) {
                    self.handshake.release();
                    trace!("sequencer: idle");
                    Phase::Idle
                } else {
                    Phase::Done { command }
                }
            }
        };

        self.outputs()
    }

    fn latch(&mut self, angle: RelativeAngle) -> Phase {
        match self.decoder.decode(angle) {
            Ok(command) => {
                debug!("sequencer: latched {} -> {}", angle, command);
                self.direction = command.direction;
                Phase::Converting { command }
            }
            Err(_err) => {
                warn!("sequencer: rejected {}: {}", angle, _err);
                self.rejected_requests = self.rejected_requests.wrapping_add(1);
                Phase::Idle
            }
        }
    }

    fn finish(&mut self, command: StepCommand) -> Phase {
        self.handshake.acknowledge();
        self.cycles_completed = self.cycles_completed.wrapping_add(1);
        debug!("sequencer: done after {} steps", command.step_count);
        Phase::Done { command }
    }

    /// Outputs for the current state.
    pub fn outputs(&self) -> SignalOutputs {
        let step = match &self.phase {
            Phase::Pulsing { counter, .. } => counter.step_level(&self.timing),
            _ => false,
        };

        SignalOutputs {
            step,
            direction: self.direction,
            done: self.handshake.done(),
        }
    }

    /// Current state.
    pub fn state(&self) -> SequencerState {
        match self.phase {
            Phase::Idle => SequencerState::Idle,
            Phase::Converting { .. } => SequencerState::Converting,
            Phase::Pulsing { .. } => SequencerState::Pulsing,
            Phase::Done { .. } => SequencerState::Done,
        }
    }

    /// Command of the cycle in flight, if any.
    pub fn command(&self) -> Option<StepCommand> {
        match self.phase {
            Phase::Idle => None,
            Phase::Converting { command }
            | Phase::Pulsing { command, .. }
            | Phase::Done { command } => Some(command),
        }
    }

    /// Pulses started in the current cycle; only available while pulsing.
    pub fn pulses_emitted(&self) -> Option<u32> {
        match &self.phase {
            Phase::Pulsing { counter, .. } => Some(counter.emitted()),
            _ => None,
        }
    }

    /// Cycles that reached Done since power-up.
    #[inline]
    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    /// Requests dropped by the overflow policy since power-up.
    #[inline]
    pub fn rejected_requests(&self) -> u32 {
        self.rejected_requests
    }

    /// Get the angle decoder.
    #[inline]
    pub fn decoder(&self) -> &AngleDecoder {
        &self.decoder
    }

    /// Get the pulse timing.
    #[inline]
    pub fn timing(&self) -> &PulseTiming {
        &self.timing
    }

    /// Return to the power-up state.
    pub fn reset(&mut self) {
        self.handshake.reset();
        self.phase = Phase::Idle;
        self.direction = Direction::Forward;
        self.cycles_completed = 0;
        self.rejected_requests = 0;
    }
}
