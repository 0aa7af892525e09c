//! Shared helpers for driving a sequencer through full handshakes.

#![allow(dead_code)]

use angle_stepgen::{RelativeAngle, SignalInputs, SignalOutputs, StepSequencer};

/// Everything observed on the outputs during one handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleTrace {
    /// Tick offsets (from the enable rising tick) of step rising edges.
    pub step_rises: Vec<u64>,
    /// Tick offset at which done rose.
    pub done_rise: u64,
    /// Tick offset at which done fell.
    pub done_fall: u64,
    /// Number of times done rose.
    pub done_rise_count: u32,
    /// Number of times done fell.
    pub done_fall_count: u32,
    /// True if done fell while enable was still high.
    pub done_fell_with_enable_high: bool,
    /// Direction seen on every tick with a step rising edge.
    pub directions: Vec<angle_stepgen::Direction>,
}

/// Edge-tracking monitor over successive outputs.
#[derive(Debug, Default)]
pub struct Monitor {
    prev: SignalOutputs,
}

impl Monitor {
    /// Returns (step rose, done rose, done fell).
    pub fn observe(&mut self, out: &SignalOutputs) -> (bool, bool, bool) {
        let edges = (
            out.step && !self.prev.step,
            out.done && !self.prev.done,
            !out.done && self.prev.done,
        );
        self.prev = *out;
        edges
    }
}

/// Run `count` ticks with enable low, asserting nothing is emitted.
pub fn idle(seq: &mut StepSequencer, monitor: &mut Monitor, count: u32) {
    for _ in 0..count {
        let out = seq.tick(&SignalInputs::released(RelativeAngle::ZERO));
        let (step_rise, done_rise, _) = monitor.observe(&out);
        assert!(!step_rise && !done_rise, "output activity while idle");
    }
}

/// Raise enable with `angle` until done rises, then lower it until done falls.
///
/// Panics if done does not rise within `budget` ticks.
pub fn handshake(
    seq: &mut StepSequencer,
    monitor: &mut Monitor,
    angle: RelativeAngle,
    budget: u64,
) -> CycleTrace {
    let mut trace = CycleTrace {
        step_rises: Vec::new(),
        done_rise: 0,
        done_fall: 0,
        done_rise_count: 0,
        done_fall_count: 0,
        done_fell_with_enable_high: false,
        directions: Vec::new(),
    };

    let requested = SignalInputs::requested(angle);
    let released = SignalInputs::released(angle);

    let mut tick = 0u64;
    loop {
        assert!(tick <= budget, "done did not rise within {} ticks", budget);
        let out = seq.tick(&requested);
        let (step_rise, done_rise, done_fall) = monitor.observe(&out);
        if step_rise {
            trace.step_rises.push(tick);
            trace.directions.push(out.direction);
        }
        if done_fall {
            trace.done_fall_count += 1;
            trace.done_fell_with_enable_high = true;
        }
        if done_rise {
            trace.done_rise = tick;
            trace.done_rise_count += 1;
            break;
        }
        tick += 1;
    }

    loop {
        tick += 1;
        let out = seq.tick(&released);
        let (step_rise, done_rise, done_fall) = monitor.observe(&out);
        assert!(!step_rise, "step pulse after done");
        if done_rise {
            trace.done_rise_count += 1;
        }
        if done_fall {
            trace.done_fall = tick;
            trace.done_fall_count += 1;
            break;
        }
    }

    trace
}
