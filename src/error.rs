//! Error types for angle-stepgen.
//!
//! Provides unified error handling across configuration, angle decoding and
//! signal/pin driving. The sequencer itself has no error channel: once a cycle
//! is accepted it always runs to completion.

use core::fmt;

use crate::sequencer::SequencerState;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all angle-stepgen operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Angle decoding error
    Decode(DecodeError),
    /// Signal or pin driving error
    Signal(SignalError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Steps per revolution must be > 0
    InvalidStepsPerRevolution(u32),
    /// Fraction bits must be 0-31
    InvalidFractionBits(u8),
    /// Pulse width must be >= 1 and shorter than the pulse interval
    InvalidPulseTiming {
        /// Ticks the step output is held high
        width: u32,
        /// Ticks between consecutive rising edges
        interval: u32,
    },
    /// Clock period must be > 0
    InvalidClockPeriod(u32),
    /// Step rate must be > 0 and reachable with the configured clock
    InvalidStepRate(u32),
    /// A required builder parameter was not provided
    MissingParameter(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Angle decoding errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Decoded step count exceeds one revolution and the overflow policy rejects it
    StepCountOutOfRange {
        /// Rounded step count before clamping
        steps: u64,
        /// Steps per revolution bound
        max: u32,
    },
    /// Angle cannot be represented in the 32-bit fixed-point domain
    AngleOutOfRange,
}

/// Signal and pin driving errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalError {
    /// Pin operation failed
    PinError,
    /// A conversion cycle is already in flight
    Busy(SequencerState),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Decode(e) => write!(f, "Decode error: {}", e),
            Error::Signal(e) => write!(f, "Signal error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidFractionBits(v) => {
                write!(f, "Invalid fraction bits: {}. Must be 0-31", v)
            }
            ConfigError::InvalidPulseTiming { width, interval } => write!(
                f,
                "Invalid pulse timing: width {} must be >= 1 and < interval {}",
                width, interval
            ),
            ConfigError::InvalidClockPeriod(v) => {
                write!(f, "Invalid clock period: {} ns. Must be > 0", v)
            }
            ConfigError::InvalidStepRate(v) => {
                write!(f, "Invalid step rate: {} Hz for the configured clock", v)
            }
            ConfigError::MissingParameter(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::StepCountOutOfRange { steps, max } => {
                write!(f, "Step count {} exceeds {} steps per revolution", steps, max)
            }
            DecodeError::AngleOutOfRange => {
                write!(f, "Angle outside the 32-bit fixed-point range")
            }
        }
    }
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalError::PinError => write!(f, "GPIO pin operation failed"),
            SignalError::Busy(state) => write!(f, "Generator busy in state {}", state),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

impl From<SignalError> for Error {
    fn from(e: SignalError) -> Self {
        Error::Signal(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

#[cfg(feature = "std")]
impl std::error::Error for SignalError {}
