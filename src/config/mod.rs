//! Configuration module for angle-stepgen.
//!
//! Provides types for loading and validating generator and clock
//! configurations from TOML files (with `std` feature) or constructed in code.

mod clock;
mod generator;
#[cfg(feature = "std")]
mod loader;
mod overflow;
mod system;
pub mod units;
mod validation;

pub use clock::ClockConfig;
pub use generator::GeneratorConfig;
pub use overflow::OverflowPolicy;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Nanoseconds, Ticks};
