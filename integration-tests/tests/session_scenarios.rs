//! End-to-end scenarios: commands in, frames out.

use approx::assert_relative_eq;
use integration_tests::reference_session;
use sway_components::Parameters;
use sway_sim::{Action, Command, Frame, Outcome, Status, run};
use uom::si::{angle::radian, time::second};

#[test]
fn reference_swing_through_commands_and_frames() {
    let mut session = reference_session();

    // Period is already meaningful before the swing begins.
    assert_relative_eq!(session.period().get::<second>(), 3.1719, epsilon = 1e-4);

    session.apply(Command::Start);
    assert_relative_eq!(
        session.angle().get::<radian>(),
        20.0f64.to_radians(),
        epsilon = 1e-12
    );

    let trace = run(&mut session, 50, ());
    assert_eq!(trace.status, Status::Complete);
    assert_eq!(trace.frames.len(), 51);

    // After 50 ticks of 0.02 s the swing is 1 s in, up to accumulated
    // float error in the sum of steps.
    let last = trace.frames.last().unwrap();
    assert_relative_eq!(last.elapsed.get::<second>(), 1.0, epsilon = 1e-12);

    let expected = 20.0f64.to_radians() * ((9.81f64 / 2.5).sqrt()).cos();
    assert_relative_eq!(last.angle.get::<radian>(), expected, epsilon = 1e-12);
    assert!(last.running);
}

#[test]
fn slider_changes_are_frozen_mid_swing() {
    let mut session = reference_session();
    let mid_swing_change = Parameters::new_si(6.0, 0.8, 4.0).unwrap();

    session.apply(Command::Start);
    run(&mut session, 10, ());
    let before = session.parameters();

    assert_eq!(
        session.apply(Command::Configure(mid_swing_change)),
        Outcome::Ignored
    );
    assert_eq!(session.parameters(), before);

    // Stopping unfreezes the sliders and resets phase.
    session.apply(Command::Stop);
    assert_relative_eq!(session.elapsed().get::<second>(), 0.0);
    assert_eq!(
        session.apply(Command::Configure(mid_swing_change)),
        Outcome::Applied
    );
    assert_eq!(session.parameters(), mid_swing_change);
}

#[test]
fn restarting_rewinds_the_phase() {
    let mut session = reference_session();

    session.apply(Command::Start);
    run(&mut session, 37, ());
    session.apply(Command::Stop);
    session.apply(Command::Start);

    // A fresh start replays the swing from the release angle.
    assert_relative_eq!(session.elapsed().get::<second>(), 0.0);
    assert_eq!(session.angle(), session.parameters().initial_angle());
}

#[test]
fn an_observer_acts_as_the_render_adapter() {
    let mut session = reference_session();
    session.apply(Command::Start);

    // A stand-in render adapter: record readouts, close the page once the
    // bob swings past vertical.
    let mut readouts = Vec::new();
    let adapter = |frame: &Frame| {
        readouts.push((frame.elapsed, frame.angle, frame.period, frame.running));
        (frame.angle.get::<radian>() < 0.0).then_some(Action::StopEarly)
    };

    let trace = run(&mut session, 1_000, adapter);

    assert_eq!(trace.status, Status::StoppedByObserver);
    assert_eq!(readouts.len(), trace.frames.len());

    // The quarter period of the reference rig is ~0.79 s; the first
    // negative angle shows up one tick after the bob passes vertical.
    let crossing = trace.frames.last().unwrap();
    assert!(crossing.elapsed.get::<second>() > 0.75);
    assert!(crossing.elapsed.get::<second>() < 0.85);
}

#[test]
fn commands_round_trip_through_serde() {
    let configure = Command::Configure(Parameters::new_si(3.0, 0.25, 2.0).unwrap());

    for command in [Command::Start, Command::Stop, configure] {
        let json = serde_json::to_string(&command).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, command);
    }
}

#[test]
fn deserialized_parameters_are_still_validated() {
    let json = r#"{
        "length_m": -1.0,
        "initial_angle_rad": 0.3,
        "mass_kg": 1.0,
        "gravity_m_per_s2": 9.81
    }"#;

    let result: Result<Parameters, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
