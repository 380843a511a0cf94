//! Frame-driven pendulum session for the Sway workspace.
//!
//! A host graphics loop drives a [`Session`] with one [`tick`] per display
//! frame and reads [`angle`] and [`period`] to paint; user interaction
//! arrives between frames as [`Command`] values applied by a single
//! dispatcher. Everything is single-threaded and cooperative: the session
//! never blocks, and the only cancellation concept is [`Command::Stop`].
//!
//! For headless use (tests, traces), [`run`] stands in for the host loop,
//! emitting a [`Frame`] per tick to an [`Observer`](sway_core::Observer).
//!
//! [`tick`]: Session::tick
//! [`angle`]: Session::angle
//! [`period`]: Session::period

mod command;
mod runner;
mod session;

pub use command::{Command, Outcome};
pub use runner::{Action, Frame, Status, Trace, run};
pub use session::Session;
