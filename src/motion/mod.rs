//! Motion module for angle-stepgen.
//!
//! Provides the fixed-point angle type and its conversion into step commands.

mod angle;
mod command;
mod decoder;

pub use angle::{FixedScale, RelativeAngle};
pub use command::{Direction, StepCommand};
pub use decoder::AngleDecoder;
