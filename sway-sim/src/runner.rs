use sway_core::Observer;
use uom::si::f64::{Angle, Time};

use crate::Session;

/// The per-frame readout a render adapter consumes.
///
/// Frame 0 is the state before any tick; frames 1..N follow each tick.
/// `angle` positions the bob, `period` feeds the on-screen readout, and
/// `running` tells the adapter whether to show it at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The frame number (0 before any tick, then 1..N).
    pub index: usize,

    /// Time accumulated since the last start.
    pub elapsed: Time,

    /// Angular displacement at this frame.
    pub angle: Angle,

    /// Oscillation period for the current configuration.
    pub period: Time,

    /// Whether the swing was in progress at this frame.
    pub running: bool,
}

/// Control actions supported by the frame runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the loop early and return the trace so far.
    StopEarly,
}

/// Indicates how the runner terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested ticks.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a headless run.
#[derive(Debug, Clone)]
pub struct Trace {
    /// How the runner terminated.
    pub status: Status,

    /// One frame per emitted readout, including frame 0.
    pub frames: Vec<Frame>,

    /// Number of ticks completed.
    pub ticks: usize,
}

/// Drives a session the way a host graphics loop would, headlessly.
///
/// Emits the initial frame, then alternates tick and readout for `ticks`
/// frames, handing each [`Frame`] to the observer. The observer may answer
/// with [`Action::StopEarly`] to terminate the loop, which is the headless
/// analogue of the page session ending.
///
/// The runner does not start or stop the session; drive that through
/// [`Command`](crate::Command) first. Running it against a stopped session
/// is valid and simply yields identical frames.
pub fn run<Obs>(session: &mut Session, ticks: usize, mut observer: Obs) -> Trace
where
    Obs: Observer<Frame, Action>,
{
    let mut frames = Vec::with_capacity(ticks + 1);

    let initial = capture(session, 0);
    frames.push(initial);

    if let Some(Action::StopEarly) = observer.observe(&initial) {
        return Trace {
            status: Status::StoppedByObserver,
            frames,
            ticks: 0,
        };
    }

    for index in 1..=ticks {
        session.tick();
        let frame = capture(session, index);
        frames.push(frame);

        if let Some(Action::StopEarly) = observer.observe(&frame) {
            return Trace {
                status: Status::StoppedByObserver,
                frames,
                ticks: index,
            };
        }
    }

    Trace {
        status: Status::Complete,
        frames,
        ticks,
    }
}

fn capture(session: &Session, index: usize) -> Frame {
    Frame {
        index,
        elapsed: session.elapsed(),
        angle: session.angle(),
        period: session.period(),
        running: session.running(),
    }
}
