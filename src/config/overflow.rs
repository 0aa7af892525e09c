//! Out-of-range step count policy.

use serde::Deserialize;

/// Policy for a decoded step count that exceeds one revolution.
///
/// Only reachable when the fixed-point scale leaves headroom above one
/// revolution (fewer than 31 fraction bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Clamp the step count to steps per revolution.
    #[default]
    Clamp,
    /// Reject the request; the sequencer stays idle and never raises done.
    Reject,
}

impl OverflowPolicy {
    /// Apply the policy to a rounded step count.
    ///
    /// Returns `Some(steps)` if valid or clamped, `None` if rejected.
    pub fn apply(self, steps: u64, max: u32) -> Option<u32> {
        if steps <= u64::from(max) {
            // steps <= max <= u32::MAX
            Some(steps as u32)
        } else {
            match self {
                OverflowPolicy::Clamp => Some(max),
                OverflowPolicy::Reject => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_passes_through() {
        assert_eq!(OverflowPolicy::Clamp.apply(0, 200), Some(0));
        assert_eq!(OverflowPolicy::Reject.apply(200, 200), Some(200));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(OverflowPolicy::Clamp.apply(201, 200), Some(200));
        assert_eq!(OverflowPolicy::Clamp.apply(u64::MAX, 200), Some(200));
    }

    #[test]
    fn test_reject() {
        assert_eq!(OverflowPolicy::Reject.apply(201, 200), None);
    }
}
