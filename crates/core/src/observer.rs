/// Watches an integration as it advances through time.
///
/// An integrator hands its observer an event `E` each time it pauses between
/// steps: once at the head of every loop iteration, with the state at the time
/// just reached, and once more after the last step, with the state at the end
/// time. Events typically carry the time, a borrowed state, and the number of
/// accepted steps, so an observer can record a trajectory or sample a
/// controller without copying the state on every step.
///
/// Returning `Some(action)` asks the integrator to do something other than
/// take the next step, such as stopping where it is. Which actions exist, and
/// at which events they are honoured, is up to each integrator; the final event
/// ignores them because nothing is left to do.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` observes nothing
/// and never acts.
pub trait Observer<E, A> {
    /// Receives one event and optionally returns an action for the integrator.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Closures observe by being called.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Ignores every event.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
