//! # angle-stepgen
//!
//! Converts a signed relative angle, given as a 32-bit fixed-point fraction of
//! one revolution, into a timed train of step pulses for a stepper driver.
//!
//! ## Features
//!
//! - **Exact fixed-point decoding**: `round(|angle| × steps_per_rev / full_scale)`
//!   with ties away from zero, computed in integer arithmetic
//! - **Tick-driven sequencer**: one `tick()` per clock edge, no allocation, no blocking
//! - **Enable/done handshake**: latch on the enable rising edge, at most one
//!   conversion in flight, done held until enable is released
//! - **embedded-hal 1.0**: `OutputPin` for STEP/DIR/DONE, `DelayNs` for the clock
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use angle_stepgen::{RelativeAngle, StepGeneratorBuilder};
//!
//! let config = angle_stepgen::load_config("stepgen.toml")?;
//!
//! let mut generator = StepGeneratorBuilder::new()
//!     .from_config(&config)
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .done_pin(done_pin)
//!     .delay(delay)
//!     .build()?;
//!
//! // 1/32 of a revolution forward (Q1.31)
//! let command = generator.move_by(RelativeAngle::from_raw(1 << 26))?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging and `defmt::Format` on public types

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

mod log;

// Core modules
pub mod config;
pub mod driver;
pub mod error;
pub mod motion;
pub mod sequencer;

// Re-exports for ergonomic API
pub use config::{validate_config, ClockConfig, GeneratorConfig, OverflowPolicy, SystemConfig};
pub use driver::{SignalPins, StepGenerator, StepGeneratorBuilder};
pub use error::{Error, Result};
pub use motion::{AngleDecoder, Direction, FixedScale, RelativeAngle, StepCommand};
pub use sequencer::{
    Handshake, PulseTiming, SequencerState, SignalInputs, SignalOutputs, StepSequencer,
};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Nanoseconds, Ticks};
