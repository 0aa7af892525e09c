//! Step command produced by the decoder.

/// Direction of rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Non-negative angle.
    #[default]
    Forward,
    /// Negative angle.
    Reverse,
}

impl Direction {
    /// Get direction from a signed raw angle.
    #[inline]
    pub fn from_raw(raw: i32) -> Self {
        if raw >= 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }

    /// Pin level for this direction: forward is high unless inverted.
    #[inline]
    pub fn level(self, invert: bool) -> bool {
        match self {
            Direction::Forward => !invert,
            Direction::Reverse => invert,
        }
    }
}

/// Direction and pulse count for one conversion cycle.
///
/// Created once when a request is latched and immutable until the cycle ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepCommand {
    /// Rotation direction, held for the whole cycle.
    pub direction: Direction,
    /// Pulses to emit, never above steps per revolution.
    pub step_count: u32,
}

impl StepCommand {
    /// Create a new command.
    #[inline]
    pub const fn new(direction: Direction, step_count: u32) -> Self {
        Self {
            direction,
            step_count,
        }
    }

    /// True if no pulses are emitted.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.step_count == 0
    }

    /// Signed step displacement.
    #[inline]
    pub fn signed_steps(&self) -> i64 {
        self.direction.sign() * i64::from(self.step_count)
    }
}
