use sway_components::Parameters;
use sway_core::TimeStep;
use uom::si::{
    f64::{Angle, Time},
    time::second,
};

/// The pendulum session: configuration plus simulation time, advanced one
/// fixed step per host frame.
///
/// A session is a two-state machine. While **Stopped**, the parameters may
/// be reconfigured and the reported angle is the release angle itself.
/// While **Running**, elapsed time accumulates on each [`tick`] and the
/// angle follows the closed-form swing; reconfiguration is ignored so the
/// in-flight oscillation is never discontinuously altered.
///
/// Transitions:
///
/// - `start`: Stopped → Running, with elapsed reset to zero. A second
///   `start` while already running changes nothing.
/// - `stop`: → Stopped, with elapsed reset to zero unconditionally.
///   Stopping always resets phase rather than freezing it; the asymmetry
///   with `start` is deliberate and matches the reference behavior.
///
/// The session is created once per host session and lives until the host
/// goes away. Nothing here blocks or suspends; every operation is plain
/// arithmetic.
///
/// [`tick`]: Session::tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    parameters: Parameters,
    time_step: TimeStep,
    elapsed: Time,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Stopped,
    Running,
}

impl Session {
    /// Creates a stopped session with the given configuration and step.
    #[must_use]
    pub fn new(parameters: Parameters, time_step: TimeStep) -> Self {
        Self {
            parameters,
            time_step,
            elapsed: Time::new::<second>(0.0),
            state: State::Stopped,
        }
    }

    /// The fixed advance applied per frame unless overridden: 0.02 s.
    #[must_use]
    pub fn default_time_step() -> TimeStep {
        TimeStep::new::<second>(0.02).expect("0.02 s is positive")
    }

    /// Begins the swing: resets elapsed time and enters the running state.
    ///
    /// A no-op while already running, so a repeated press of the start
    /// button never re-zeros an in-flight swing.
    pub fn start(&mut self) {
        if self.state == State::Stopped {
            self.state = State::Running;
            self.elapsed = Time::new::<second>(0.0);
        }
    }

    /// Halts the swing and resets elapsed time to zero, unconditionally.
    ///
    /// Idempotent under repeated calls.
    pub fn stop(&mut self) {
        self.state = State::Stopped;
        self.elapsed = Time::new::<second>(0.0);
    }

    /// Advances elapsed time by one step while running; a no-op otherwise.
    ///
    /// Called once per render frame by the host loop.
    pub fn tick(&mut self) {
        if self.state == State::Running {
            self.elapsed = self.elapsed + self.time_step;
        }
    }

    /// Replaces the configuration, but only while stopped.
    ///
    /// While running the call is ignored and the session is unchanged; the
    /// caller learns which from the returned flag. Range clamping has
    /// already happened inside [`Parameters`].
    pub fn configure(&mut self, parameters: Parameters) -> bool {
        if self.state == State::Running {
            return false;
        }
        self.parameters = parameters;
        true
    }

    /// Returns the current angular displacement.
    ///
    /// While stopped this is the release angle itself (the bob hangs where
    /// the sliders put it); while running it follows the closed-form swing
    /// at the current elapsed time.
    #[must_use]
    pub fn angle(&self) -> Angle {
        match self.state {
            State::Stopped => self.parameters.initial_angle(),
            State::Running => self.parameters.angle_at(self.elapsed),
        }
    }

    /// Returns the oscillation period.
    ///
    /// Available in both states; whether to display it is the host's call
    /// (gate on [`running`] to reproduce variants that hide it while
    /// stopped).
    ///
    /// [`running`]: Session::running
    #[must_use]
    pub fn period(&self) -> Time {
        self.parameters.period()
    }

    /// Returns `true` while the swing is in progress.
    #[must_use]
    pub fn running(&self) -> bool {
        self.state == State::Running
    }

    /// Returns the time accumulated since the last `start`.
    #[must_use]
    pub fn elapsed(&self) -> Time {
        self.elapsed
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        self.parameters
    }

    /// Returns the per-frame time step.
    #[must_use]
    pub fn time_step(&self) -> TimeStep {
        self.time_step
    }
}

impl Default for Session {
    /// A stopped session with the startup configuration and a 0.02 s step.
    fn default() -> Self {
        Self::new(Parameters::default(), Self::default_time_step())
    }
}
