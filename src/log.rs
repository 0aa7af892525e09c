//! Crate-private logging macros.
//!
//! Forward to `defmt` when the `defmt` feature is enabled and compile to
//! nothing otherwise, so the sequencer hot path carries no formatting cost.

#![allow(unused_macros, unused_imports)]

#[macro_use]
mod _log {
    macro_rules! trace {
        ($($arg:tt)+) => {
            #[cfg(feature = "defmt")]
            defmt::trace!($($arg)+);
        };
    }

    macro_rules! debug {
        ($($arg:tt)+) => {
            #[cfg(feature = "defmt")]
            defmt::debug!($($arg)+);
        };
    }

    macro_rules! info {
        ($($arg:tt)+) => {
            #[cfg(feature = "defmt")]
            defmt::info!($($arg)+);
        };
    }

    macro_rules! warn_ {
        ($($arg:tt)+) => {
            #[cfg(feature = "defmt")]
            defmt::warn!($($arg)+);
        };
    }

    macro_rules! error {
        ($($arg:tt)+) => {
            #[cfg(feature = "defmt")]
            defmt::error!($($arg)+);
        };
    }
}

pub(crate) use debug;
pub(crate) use error;
pub(crate) use info;
pub(crate) use trace;
pub(crate) use warn_ as warn;
