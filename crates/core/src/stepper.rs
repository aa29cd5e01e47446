/// Outcome of a single controlled step attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The local error was within tolerance; state and time were advanced.
    Accepted,

    /// The local error was too large; state and time are unchanged, and the
    /// step size has been reduced for the next attempt.
    Rejected,
}

/// An error-controlled stepper that attempts one step at a time.
///
/// A controlled stepper receives a trial step size and either accepts the step,
/// advancing `state` and `time` in place, or rejects it. On rejection it shrinks
/// `dt` so the caller can simply try again; on acceptance it may grow `dt` for
/// the next step. All three arguments are shared with the caller, who may also
/// adjust `dt` between attempts.
///
/// Only steppers with this accept/reject contract can drive the interruptible
/// integrators; fixed-step methods do not implement it.
pub trait ControlledStepper<Sys, S, T> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Attempts one step of size `dt` from `(state, time)`.
    ///
    /// A rejected step is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the step cannot be attempted at all, for
    /// example because the system fails to evaluate its right-hand side.
    fn try_step(
        &mut self,
        system: &Sys,
        state: &mut S,
        time: &mut T,
        dt: &mut T,
    ) -> Result<StepResult, Self::Error>;
}
