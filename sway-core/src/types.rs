//! Unit-safe value types shared across the workspace.

mod bounds;
mod time_step;

pub use bounds::{Bounds, BoundsError};
pub use time_step::{TimeStep, TimeStepError};
