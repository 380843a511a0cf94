/// A callable that maps a typed input to a typed output.
///
/// A `Model` is a pure evaluation: given an input it produces an output or
/// an error, with no internal mutation. Stateful behavior (elapsed time,
/// run/stop flags) lives in whatever drives the model, not in the model
/// itself.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model at the given input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the model cannot be evaluated.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a single model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a snapshot from an input and the output it produced.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
