//! Enable/done handshake controller.
//!
//! Enforces the four-edge protocol between a caller and the sequencer:
//! request rises, done rises, request falls, done falls. A request is only
//! accepted on a rising edge of enable while idle, so a caller that is slow to
//! drop enable cannot re-trigger a finished cycle.

use crate::log::{debug, trace};

use super::state::SequencerState;

/// Enable level change seen on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnableEdge {
    /// Low on the previous tick, high now.
    Rising,
    /// High on the previous tick, low now.
    Falling,
    /// High on both ticks.
    High,
    /// Low on both ticks.
    Low,
}

impl EnableEdge {
    /// Current enable level.
    #[inline]
    pub fn level(self) -> bool {
        matches!(self, EnableEdge::Rising | EnableEdge::High)
    }
}

/// Request/acknowledge controller owning the done line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Handshake {
    /// Enable level sampled on the previous tick (low at power-up).
    enable_prev: bool,
    /// Done line.
    done: bool,
}

impl Handshake {
    /// Power-up state: enable history low, done low.
    pub const fn new() -> Self {
        Self {
            enable_prev: false,
            done: false,
        }
    }

    /// Sample enable for this tick and classify the edge.
    pub fn sample(&mut self, enable: bool) -> EnableEdge {
        let edge = match (self.enable_prev, enable) {
            (false, true) => EnableEdge::Rising,
            (true, false) => EnableEdge::Falling,
            (true, true) => EnableEdge::High,
            (false, false) => EnableEdge::Low,
        };
        self.enable_prev = enable;
        edge
    }

    /// True if a new request may be latched in `state` on `edge`.
    ///
    /// Edges seen while a cycle is in flight are ignored.
    #[inline]
    pub fn accepts(&self, state: SequencerState, edge: EnableEdge) -> bool {
        state == SequencerState::Idle && edge == EnableEdge::Rising
    }

    /// Raise done on entering the Done state.
    pub fn acknowledge(&mut self) {
        debug!("handshake: done raised");
        self.done = true;
    }

    /// True if done may be cleared: in Done with enable observed low.
    #[inline]
    pub fn may_release(&self, state: SequencerState, edge: EnableEdge) -> bool {
        state == SequencerState::Done && self.done && !edge.level()
    }

    /// Lower done, completing the handshake.
    pub fn release(&mut self) {
        trace!("handshake: done cleared");
        self.done = false;
    }

    /// Current done level.
    #[inline]
    pub fn done(&self) -> bool {
        self.done
    }

    /// Return to the power-up state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_detection() {
        let mut handshake = Handshake::new();
        assert_eq!(handshake.sample(false), EnableEdge::Low);
        assert_eq!(handshake.sample(true), EnableEdge::Rising);
        assert_eq!(handshake.sample(true), EnableEdge::High);
        assert_eq!(handshake.sample(false), EnableEdge::Falling);
        assert_eq!(handshake.sample(false), EnableEdge::Low);
    }

    #[test]
    fn test_enable_high_at_power_up_is_rising() {
        let mut handshake = Handshake::new();
        assert_eq!(handshake.sample(true), EnableEdge::Rising);
    }

    #[test]
    fn test_accepts_only_rising_while_idle() {
        let handshake = Handshake::new();
        assert!(handshake.accepts(SequencerState::Idle, EnableEdge::Rising));
        assert!(!handshake.accepts(SequencerState::Idle, EnableEdge::High));
        assert!(!handshake.accepts(SequencerState::Pulsing, EnableEdge::Rising));
        assert!(!handshake.accepts(SequencerState::Done, EnableEdge::Rising));
    }

    #[test]
    fn test_release_requires_enable_low() {
        let mut handshake = Handshake::new();
        handshake.acknowledge();
        assert!(handshake.done());

        assert!(!handshake.may_release(SequencerState::Done, EnableEdge::High));
        assert!(handshake.may_release(SequencerState::Done, EnableEdge::Falling));
        assert!(handshake.may_release(SequencerState::Done, EnableEdge::Low));
        assert!(!handshake.may_release(SequencerState::Pulsing, EnableEdge::Low));

        handshake.release();
        assert!(!handshake.done());
    }
}
