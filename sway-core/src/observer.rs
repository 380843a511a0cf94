/// Receives events from a driving loop and optionally returns control actions.
///
/// An observer is how a host attaches to a simulation without the simulation
/// knowing anything about rendering or UI: the loop emits an event per frame,
/// and the observer may answer with an action (for example, stop early).
///
/// Implemented for `()` (discard all events) and for any
/// `FnMut(&E) -> Option<A>` closure.
///
/// # Example
///
/// ```
/// use sway_core::Observer;
///
/// struct CountTo {
///     limit: usize,
///     seen: usize,
/// }
///
/// impl Observer<usize, &'static str> for CountTo {
///     fn observe(&mut self, _event: &usize) -> Option<&'static str> {
///         self.seen += 1;
///         (self.seen >= self.limit).then_some("stop")
///     }
/// }
/// ```
pub trait Observer<E, A> {
    /// Handles an event, optionally returning a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Discards all events.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
