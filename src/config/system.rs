//! System configuration - root configuration structure.

use serde::Deserialize;

use super::clock::ClockConfig;
use super::generator::GeneratorConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemConfig {
    /// Angle decoding and pulse train parameters.
    pub generator: GeneratorConfig,

    /// Sequencer clock.
    #[serde(default)]
    pub clock: ClockConfig,
}

impl SystemConfig {
    /// Create a configuration with the default 25 MHz clock.
    pub fn new(generator: GeneratorConfig) -> Self {
        Self {
            generator,
            clock: ClockConfig::default(),
        }
    }

    /// Replace the clock configuration.
    pub fn with_clock(mut self, clock: ClockConfig) -> Self {
        self.clock = clock;
        self
    }
}
