use thiserror::Error;

/// An inclusive `[min, max]` interval used to clamp slider-style inputs.
///
/// `Bounds` carries a UI-declared range as data, so the valid range for a
/// parameter lives next to the parameter rather than in widget attributes.
/// Out-of-range values are pulled to the nearest endpoint with [`clamp`];
/// they are never rejected, matching how a bounded slider behaves.
///
/// `T` must implement [`PartialOrd`] and [`Copy`]. Common examples include
/// primitive numeric types and unit-safe `Quantity` types from [`uom`].
///
/// # Examples
///
/// ```
/// use sway_core::Bounds;
///
/// let range = Bounds::new(0.5, 6.0).unwrap();
/// assert_eq!(range.clamp(0.3), 0.5);
/// assert_eq!(range.clamp(2.5), 2.5);
/// assert_eq!(range.clamp(9.0), 6.0);
/// ```
///
/// [`clamp`]: Bounds::clamp
/// [`uom`]: https://docs.rs/uom/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    min: T,
    max: T,
}

/// Error type returned when constructing an invalid [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("interval minimum must not exceed its maximum")]
    Inverted,
}

impl<T> Bounds<T>
where
    T: PartialOrd + Copy,
{
    /// Constructs an inclusive interval from its endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Inverted`] if `min > max`, which also covers
    /// endpoints that do not compare (NaN).
    pub fn new(min: T, max: T) -> Result<Self, BoundsError> {
        if min <= max {
            Ok(Self { min, max })
        } else {
            Err(BoundsError::Inverted)
        }
    }

    /// Returns the lower endpoint.
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the upper endpoint.
    pub fn max(&self) -> T {
        self.max
    }

    /// Returns `true` if the value lies within the interval.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Pulls a value to the nearest endpoint if it lies outside the interval.
    ///
    /// Values that do not compare (NaN) are returned unchanged; callers that
    /// must exclude them should validate before clamping.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    #[test]
    fn clamp_pulls_to_endpoints() {
        let range = Bounds::new(0.1, 5.0).unwrap();

        assert_eq!(range.clamp(0.0), 0.1);
        assert_eq!(range.clamp(1.0), 1.0);
        assert_eq!(range.clamp(7.5), 5.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let range = Bounds::new(5.0, 90.0).unwrap();

        assert!(range.contains(5.0));
        assert!(range.contains(90.0));
        assert!(!range.contains(4.999));
        assert!(!range.contains(90.001));
    }

    #[test]
    fn works_with_uom_quantities() {
        let range = Bounds::new(Length::new::<meter>(0.5), Length::new::<meter>(6.0)).unwrap();

        let clamped = range.clamp(Length::new::<meter>(10.0));
        assert_eq!(clamped, Length::new::<meter>(6.0));
    }

    #[test]
    fn inverted_interval_fails() {
        assert_eq!(Bounds::new(2.0, 1.0), Err(BoundsError::Inverted));
    }

    #[test]
    fn nan_endpoint_fails() {
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
    }
}
