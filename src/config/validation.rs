//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{ClockConfig, GeneratorConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Steps per revolution is non-zero
/// - Fraction bits fit a 32-bit signed angle (0-31)
/// - Pulse width is at least one tick and shorter than the interval
/// - Clock period is non-zero
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_generator(&config.generator)?;
    validate_clock(&config.clock)?;

    Ok(())
}

fn validate_generator(config: &GeneratorConfig) -> Result<()> {
    // Decoder construction enforces steps per revolution and fraction bits
    config.decoder()?;

    // Pulse width must leave a low gap inside every interval
    config.timing()?;

    Ok(())
}

fn validate_clock(config: &ClockConfig) -> Result<()> {
    if config.period_ns == 0 {
        return Err(Error::Config(ConfigError::InvalidClockPeriod(config.period_ns)));
    }

    Ok(())
}
