use serde::{Deserialize, Serialize};
use sway_components::Parameters;

use crate::Session;

/// A user interaction, expressed as data rather than a UI callback.
///
/// The original visualizer mutated shared globals from button and slider
/// handlers; here every interaction is a `Command` applied synchronously to
/// the session by a single dispatcher, which preserves the single-threaded
/// ordering guarantee and makes the interaction stream serializable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Begin the swing (the start button).
    Start,
    /// Halt the swing and reset phase (the stop button).
    Stop,
    /// Replace the configuration (a slider change).
    Configure(Parameters),
}

/// How the dispatcher disposed of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command took effect (including no-op repeats of `Start`/`Stop`).
    Applied,
    /// A `Configure` arrived while running and was deliberately dropped.
    Ignored,
}

impl Session {
    /// Applies a command to the session.
    ///
    /// `Configure` is ignored while the swing is running, so sliders can
    /// never discontinuously alter an in-flight oscillation; `Start` and
    /// `Stop` always apply (each is a no-op when already in the requested
    /// state).
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Start => {
                self.start();
                Outcome::Applied
            }
            Command::Stop => {
                self.stop();
                Outcome::Applied
            }
            Command::Configure(parameters) => {
                if self.configure(parameters) {
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
        }
    }
}
