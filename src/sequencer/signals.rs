//! Signal-level interface sampled and driven once per clock tick.

use crate::motion::{Direction, RelativeAngle};

/// Inputs sampled on a clock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalInputs {
    /// Request line; a rising edge while idle starts a cycle.
    pub enable: bool,
    /// Displacement to convert, latched on the enable rising edge.
    pub relative_angle: RelativeAngle,
}

impl SignalInputs {
    /// Inputs with enable low.
    #[inline]
    pub const fn released(relative_angle: RelativeAngle) -> Self {
        Self {
            enable: false,
            relative_angle,
        }
    }

    /// Inputs with enable high.
    #[inline]
    pub const fn requested(relative_angle: RelativeAngle) -> Self {
        Self {
            enable: true,
            relative_angle,
        }
    }
}

/// Outputs driven after a clock edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalOutputs {
    /// Step line, high during the first part of each pulse interval.
    pub step: bool,
    /// Direction of the current or most recent command.
    pub direction: Direction,
    /// Completion line, high for the whole Done state.
    pub done: bool,
}
