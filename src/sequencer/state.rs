//! Sequencer state.

use core::fmt;

/// Lifecycle state of one conversion cycle.
///
/// `Idle` is entered at power-up and after each completed handshake;
/// `Done` is terminal for a cycle until enable is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerState {
    /// Waiting for an enable rising edge.
    #[default]
    Idle,
    /// Angle latched and decoded; direction is being set up.
    Converting,
    /// Emitting step pulses.
    Pulsing,
    /// All pulses emitted; done is asserted until enable falls.
    Done,
}

impl SequencerState {
    /// Get the state name as a static string.
    pub fn name(self) -> &'static str {
        match self {
            SequencerState::Idle => "Idle",
            SequencerState::Converting => "Converting",
            SequencerState::Pulsing => "Pulsing",
            SequencerState::Done => "Done",
        }
    }

    /// True while a cycle is in flight and new requests are ignored.
    #[inline]
    pub fn is_busy(self) -> bool {
        !matches!(self, SequencerState::Idle)
    }
}

impl fmt::Display for SequencerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
