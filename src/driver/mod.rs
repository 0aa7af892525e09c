//! Pin driver module for angle-stepgen.
//!
//! Connects the sequencer to embedded-hal 1.0 output pins and a delay-based
//! tick clock.

mod builder;
mod generator;
mod pins;

pub use builder::StepGeneratorBuilder;
pub use generator::StepGenerator;
pub use pins::SignalPins;
