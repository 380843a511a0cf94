//! Core traits and types for the Sway workspace.
//!
//! This crate defines the shared abstractions that components, sessions, and
//! hosts build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives events from a driving loop and optionally
//!   returns control actions
//! - [`Bounds`] — an inclusive clamping interval for slider-style inputs
//! - [`TimeStep`] — a unit-safe, strictly positive simulation time step

mod model;
mod observer;
mod types;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use types::{Bounds, BoundsError, TimeStep, TimeStepError};
