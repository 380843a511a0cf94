//! Shared fixtures for the workspace integration tests.

use sway_components::Parameters;
use sway_core::TimeStep;
use sway_sim::Session;
use uom::si::time::second;

/// The reference scenario from the original visualizer: a 2.5 m rod
/// released at 20° with a 1 kg bob, ticked at 0.02 s.
#[must_use]
pub fn reference_session() -> Session {
    let parameters = Parameters::new_si(2.5, 20.0f64.to_radians(), 1.0)
        .expect("reference parameters are valid");
    let time_step = TimeStep::new::<second>(0.02).expect("reference step is positive");
    Session::new(parameters, time_step)
}
