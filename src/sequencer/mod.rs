//! Sequencer module for angle-stepgen.
//!
//! Provides the tick-driven step pulse state machine and the enable/done
//! handshake that gates it.

pub mod handshake;
mod pulse;
mod sequencer;
mod signals;
mod state;

pub use handshake::{EnableEdge, Handshake};
pub use pulse::PulseTiming;
pub use sequencer::StepSequencer;
pub use signals::{SignalInputs, SignalOutputs};
pub use state::SequencerState;
