/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end time.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an interruptible integration.
///
/// The integrated state itself is written back through the caller's `&mut`
/// reference; the solution records how far the integration got.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<T> {
    /// How the integrator terminated.
    pub status: Status,

    /// Number of accepted steps. Rejected attempts are not counted.
    pub steps: usize,

    /// Time of the final state.
    pub time: T,
}
