use std::{convert::Infallible, f64::consts::TAU};

use serde::{Deserialize, Serialize};
use sway_core::{Bounds, Model};
use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    angle::{degree, radian},
    f64::{Acceleration, Angle, Frequency, Length, Mass, Time},
    length::meter,
    mass::kilogram,
    ratio::ratio,
    time::second,
};

/// A small-angle pendulum component.
///
/// Models a point mass on a rigid massless rod, linearized about the
/// vertical. The restoring torque is proportional to the angle, so the
/// motion is simple harmonic with the closed-form solution
/// `θ(t) = θ₀·cos(√(g/L)·t)` and the period `2π·√(L/g)`.
///
/// Two properties of this idealization are preserved deliberately:
///
/// - There is no damping term, so amplitude never decays.
/// - Mass never enters the dynamics. It is carried only so a host can size
///   the rendered bob via [`Parameters::bob_radius`].
pub struct SmallAnglePendulum;

/// Physical parameters of the pendulum.
///
/// Construction validates and clamps: values that are merely outside the
/// slider range (see [`length_range`], [`initial_angle_range`],
/// [`mass_range`]) are pulled to the nearest endpoint, the way a bounded
/// slider behaves, while values the formulas cannot survive (non-positive
/// or non-finite length, non-finite angle or mass) are rejected with a
/// [`ParameterError`].
///
/// Serializes as plain SI floats so hosts do not need unit-aware types.
///
/// [`length_range`]: Parameters::length_range
/// [`initial_angle_range`]: Parameters::initial_angle_range
/// [`mass_range`]: Parameters::mass_range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters", into = "RawParameters")]
pub struct Parameters {
    length: Length,
    initial_angle: Angle,
    mass: Mass,
    gravity: Acceleration,
}

/// Error type returned when constructing invalid [`Parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("pendulum length must be positive and finite, got {0} m")]
    NonPositiveLength(f64),
    #[error("release angle must be finite, got {0} rad")]
    NonFiniteAngle(f64),
    #[error("bob mass must be finite, got {0} kg")]
    NonFiniteMass(f64),
    #[error("gravity must be positive and finite, got {0} m/s²")]
    NonPositiveGravity(f64),
}

impl Parameters {
    /// Creates parameters from unit-safe values, clamping into the slider
    /// ranges.
    ///
    /// Gravity defaults to 9.81 m/s²; use [`with_gravity`] to override it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the length is non-positive or any
    /// value is non-finite.
    ///
    /// [`with_gravity`]: Parameters::with_gravity
    pub fn new(length: Length, initial_angle: Angle, mass: Mass) -> Result<Self, ParameterError> {
        Self::default()
            .with_length(length)?
            .with_initial_angle(initial_angle)?
            .with_mass(mass)
    }

    /// Creates parameters from raw SI values (m, rad, kg).
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the length is non-positive or any
    /// value is non-finite.
    pub fn new_si(length: f64, initial_angle: f64, mass: f64) -> Result<Self, ParameterError> {
        Self::new(
            Length::new::<meter>(length),
            Angle::new::<radian>(initial_angle),
            Mass::new::<kilogram>(mass),
        )
    }

    /// Sets the rod length, clamped to [`length_range`].
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonPositiveLength`] if the length is
    /// non-positive or non-finite; it is a divisor in both the angular
    /// frequency and the period.
    ///
    /// [`length_range`]: Parameters::length_range
    pub fn with_length(mut self, length: Length) -> Result<Self, ParameterError> {
        let meters = length.get::<meter>();
        if !meters.is_finite() || meters <= 0.0 {
            return Err(ParameterError::NonPositiveLength(meters));
        }
        self.length = Self::length_range().clamp(length);
        Ok(self)
    }

    /// Sets the release angle, clamped to [`initial_angle_range`].
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonFiniteAngle`] if the angle is non-finite.
    ///
    /// [`initial_angle_range`]: Parameters::initial_angle_range
    pub fn with_initial_angle(mut self, initial_angle: Angle) -> Result<Self, ParameterError> {
        let radians = initial_angle.get::<radian>();
        if !radians.is_finite() {
            return Err(ParameterError::NonFiniteAngle(radians));
        }
        self.initial_angle = Self::initial_angle_range().clamp(initial_angle);
        Ok(self)
    }

    /// Sets the bob mass, clamped to [`mass_range`].
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonFiniteMass`] if the mass is non-finite.
    ///
    /// [`mass_range`]: Parameters::mass_range
    pub fn with_mass(mut self, mass: Mass) -> Result<Self, ParameterError> {
        let kilograms = mass.get::<kilogram>();
        if !kilograms.is_finite() {
            return Err(ParameterError::NonFiniteMass(kilograms));
        }
        self.mass = Self::mass_range().clamp(mass);
        Ok(self)
    }

    /// Sets the gravitational acceleration (not clamped; there is no slider
    /// for it).
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonPositiveGravity`] if the acceleration is
    /// non-positive or non-finite.
    pub fn with_gravity(mut self, gravity: Acceleration) -> Result<Self, ParameterError> {
        let si = gravity.get::<meter_per_second_squared>();
        if !si.is_finite() || si <= 0.0 {
            return Err(ParameterError::NonPositiveGravity(si));
        }
        self.gravity = gravity;
        Ok(self)
    }

    /// Returns the rod length.
    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    /// Returns the release angle.
    #[must_use]
    pub fn initial_angle(&self) -> Angle {
        self.initial_angle
    }

    /// Returns the bob mass.
    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Returns the gravitational acceleration.
    #[must_use]
    pub fn gravity(&self) -> Acceleration {
        self.gravity
    }

    /// The slider range for rod length: 0.5 m to 6 m.
    #[must_use]
    pub fn length_range() -> Bounds<Length> {
        Bounds::new(Length::new::<meter>(0.5), Length::new::<meter>(6.0))
            .expect("endpoints are ordered")
    }

    /// The slider range for the release angle: 5° to 90°.
    #[must_use]
    pub fn initial_angle_range() -> Bounds<Angle> {
        Bounds::new(Angle::new::<degree>(5.0), Angle::new::<degree>(90.0))
            .expect("endpoints are ordered")
    }

    /// The slider range for bob mass: 0.1 kg to 5 kg.
    #[must_use]
    pub fn mass_range() -> Bounds<Mass> {
        Bounds::new(Mass::new::<kilogram>(0.1), Mass::new::<kilogram>(5.0))
            .expect("endpoints are ordered")
    }

    /// Returns the angular frequency `√(g/L)`.
    #[must_use]
    pub fn angular_frequency(&self) -> Frequency {
        (self.gravity / self.length).sqrt()
    }

    /// Returns the angular displacement at an elapsed time since release:
    /// `θ₀·cos(√(g/L)·t)`.
    #[must_use]
    pub fn angle_at(&self, elapsed: Time) -> Angle {
        let phase = (self.angular_frequency() * elapsed).get::<ratio>();
        self.initial_angle * phase.cos()
    }

    /// Returns the oscillation period `2π·√(L/g)`.
    ///
    /// A pure function of length and gravity, independent of amplitude and
    /// mass, and meaningful whether or not the pendulum is swinging.
    #[must_use]
    pub fn period(&self) -> Time {
        (self.length / self.gravity).sqrt() * TAU
    }

    /// Returns the rendered bob radius, `0.18 m · √(mass / 1 kg)`.
    ///
    /// This is the only place mass is consulted; it exists for hosts that
    /// draw the bob and has no effect on the motion.
    #[must_use]
    pub fn bob_radius(&self) -> Length {
        let reference = Mass::new::<kilogram>(1.0);
        Length::new::<meter>(0.18) * (self.mass / reference).sqrt()
    }
}

impl Default for Parameters {
    /// The startup configuration: a 2.5 m rod released at 20° with a 1 kg bob.
    fn default() -> Self {
        Self {
            length: Length::new::<meter>(2.5),
            initial_angle: Angle::new::<degree>(20.0),
            mass: Mass::new::<kilogram>(1.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
        }
    }
}

/// Wire form of [`Parameters`]: plain SI floats, validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawParameters {
    length_m: f64,
    initial_angle_rad: f64,
    mass_kg: f64,
    gravity_m_per_s2: f64,
}

impl TryFrom<RawParameters> for Parameters {
    type Error = ParameterError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new_si(raw.length_m, raw.initial_angle_rad, raw.mass_kg)?
            .with_gravity(Acceleration::new::<meter_per_second_squared>(
                raw.gravity_m_per_s2,
            ))
    }
}

impl From<Parameters> for RawParameters {
    fn from(parameters: Parameters) -> Self {
        Self {
            length_m: parameters.length.get::<meter>(),
            initial_angle_rad: parameters.initial_angle.get::<radian>(),
            mass_kg: parameters.mass.get::<kilogram>(),
            gravity_m_per_s2: parameters.gravity.get::<meter_per_second_squared>(),
        }
    }
}

/// Input to the pendulum component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub parameters: Parameters,
    pub elapsed: Time,
}

/// Output from the pendulum component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Output {
    pub angle: Angle,
    pub period: Time,
}

impl Input {
    /// Creates an input at the moment of release (zero elapsed time).
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            elapsed: Time::new::<second>(0.0),
        }
    }

    /// Sets the elapsed time from a `uom::Time`.
    #[must_use]
    pub fn elapsed(mut self, elapsed: Time) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Sets the elapsed time in SI units (s).
    #[must_use]
    pub fn elapsed_si(self, elapsed: f64) -> Self {
        self.elapsed(Time::new::<second>(elapsed))
    }
}

impl Model for SmallAnglePendulum {
    type Input = Input;
    type Output = Output;
    type Error = Infallible;

    /// Computes the angular displacement and period at the input's elapsed
    /// time. Parameter validity is enforced at construction, so evaluation
    /// cannot fail.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Input {
            parameters,
            elapsed,
        } = input;

        Ok(Output {
            angle: parameters.angle_at(*elapsed),
            period: parameters.period(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn period_follows_the_closed_form() {
        let parameters = Parameters::default();

        let expected = TAU * (2.5f64 / 9.81).sqrt();
        assert_relative_eq!(parameters.period().get::<second>(), expected);
        assert_relative_eq!(parameters.period().get::<second>(), 3.1719, epsilon = 1e-4);
    }

    #[test]
    fn angle_at_release_is_the_initial_angle() {
        let parameters = Parameters::default();

        let at_release = parameters.angle_at(Time::new::<second>(0.0));
        assert_relative_eq!(
            at_release.get::<radian>(),
            parameters.initial_angle().get::<radian>()
        );
    }

    #[test]
    fn one_second_into_the_swing() {
        let parameters = Parameters::default();

        let theta0 = 20.0f64.to_radians();
        let expected = theta0 * ((9.81f64 / 2.5).sqrt()).cos();

        let angle = parameters.angle_at(Time::new::<second>(1.0));
        assert_relative_eq!(angle.get::<radian>(), expected, epsilon = 1e-12);
        assert_relative_eq!(angle.get::<radian>(), -0.1392, epsilon = 1e-4);
    }

    #[test]
    fn mass_never_enters_the_dynamics() {
        let light = Parameters::default().with_mass(Mass::new::<kilogram>(0.1)).unwrap();
        let heavy = Parameters::default().with_mass(Mass::new::<kilogram>(5.0)).unwrap();

        assert_eq!(light.period(), heavy.period());
        let t = Time::new::<second>(0.7);
        assert_eq!(light.angle_at(t), heavy.angle_at(t));
    }

    #[test]
    fn bob_radius_scales_with_the_square_root_of_mass() {
        let parameters = Parameters::default().with_mass(Mass::new::<kilogram>(4.0)).unwrap();

        assert_relative_eq!(parameters.bob_radius().get::<meter>(), 0.36);
    }

    #[test]
    fn off_range_values_are_clamped_like_sliders() {
        let parameters = Parameters::new(
            Length::new::<meter>(0.3),
            Angle::new::<degree>(2.0),
            Mass::new::<kilogram>(10.0),
        )
        .unwrap();

        assert_relative_eq!(parameters.length().get::<meter>(), 0.5);
        assert_relative_eq!(parameters.initial_angle().get::<degree>(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(parameters.mass().get::<kilogram>(), 5.0);
    }

    #[test]
    fn non_positive_length_is_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Parameters::default().with_length(Length::new::<meter>(bad));
            assert!(matches!(result, Err(ParameterError::NonPositiveLength(_))));
        }
    }

    #[test]
    fn non_finite_angle_and_mass_are_rejected() {
        assert!(matches!(
            Parameters::default().with_initial_angle(Angle::new::<radian>(f64::NAN)),
            Err(ParameterError::NonFiniteAngle(_))
        ));
        assert!(matches!(
            Parameters::default().with_mass(Mass::new::<kilogram>(f64::INFINITY)),
            Err(ParameterError::NonFiniteMass(_))
        ));
    }

    #[test]
    fn component_reports_angle_and_period() {
        let input = Input::new(Parameters::default()).elapsed_si(1.0);
        let output = SmallAnglePendulum.call(&input).unwrap();

        assert_relative_eq!(output.angle.get::<radian>(), -0.1392, epsilon = 1e-4);
        assert_relative_eq!(output.period.get::<second>(), TAU * (2.5f64 / 9.81).sqrt());
    }
}
