use std::{fmt, ops::Add};

use thiserror::Error;
use uom::{
    Conversion,
    si::{f64::Time, time},
};

/// A unit-safe, strictly positive duration used to advance simulation time.
///
/// `TimeStep` represents the fixed advance applied on each tick of a
/// frame-driven simulation. It wraps a [`Time`] value while enforcing that
/// the duration is strictly greater than zero, so dividing by it or
/// accumulating it can never stall time.
///
/// Construct one from a concrete [`uom`] unit or from an existing [`Time`]:
///
/// ```
/// use sway_core::TimeStep;
/// use uom::si::{f64::Time, time::second};
///
/// let dt = TimeStep::new::<second>(0.02)?;
/// let same = TimeStep::try_from(Time::new::<second>(0.02))?;
/// assert_eq!(dt, same);
/// # Ok::<(), sway_core::TimeStepError>(())
/// ```
///
/// Zero, negative, or NaN durations are rejected with
/// [`TimeStepError::NotPositive`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeStep(Time);

/// Error type returned when constructing an invalid [`TimeStep`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeStepError {
    #[error("time step must be greater than zero, got {0} s")]
    NotPositive(f64),
}

impl TimeStep {
    /// Constructs a `TimeStep` from a numeric value and a [`uom::si::time`] unit.
    ///
    /// # Errors
    ///
    /// Returns [`TimeStepError::NotPositive`] if the duration is not strictly
    /// positive.
    pub fn new<U>(value: f64) -> Result<Self, TimeStepError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        Self::from_time(Time::new::<U>(value))
    }

    /// Constructs a `TimeStep` from an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns [`TimeStepError::NotPositive`] if the duration is not strictly
    /// positive.
    pub fn from_time(time: Time) -> Result<Self, TimeStepError> {
        let seconds = time.get::<time::second>();
        if seconds > 0.0 {
            Ok(Self(time))
        } else {
            Err(TimeStepError::NotPositive(seconds))
        }
    }

    /// Returns the underlying [`Time`] value.
    #[must_use]
    pub fn get(self) -> Time {
        self.0
    }
}

impl TryFrom<Time> for TimeStep {
    type Error = TimeStepError;

    fn try_from(time: Time) -> Result<Self, Self::Error> {
        Self::from_time(time)
    }
}

/// Advances a [`Time`] by one step.
impl Add<TimeStep> for Time {
    type Output = Time;

    fn add(self, rhs: TimeStep) -> Self::Output {
        self + rhs.0
    }
}

impl fmt::Display for TimeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.0.get::<time::second>();
        write!(f, "{seconds} s")
    }
}
