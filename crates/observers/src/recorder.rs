//! Recording observer.

use tether_core::Observer;

use crate::traits::{HasState, HasTime};

/// An observer that keeps a copy of every observed state.
///
/// Works with any event implementing [`HasTime`] and [`HasState`]. Pass
/// `&mut Recorder` as the observer to keep the history after the integrator
/// returns.
///
/// # Example
///
/// ```ignore
/// let mut recorder = Recorder::new();
/// interruptible::solve(&mut stepper, &system, &mut x, [0.0, 3.0], &mut dt, schedule, &config, &mut recorder)?;
///
/// for (t, x) in recorder.times().iter().zip(recorder.states()) {
///     println!("{t}\t{x}");
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder<S, T> {
    times: Vec<T>,
    states: Vec<S>,
}

impl<S, T> Recorder<S, T> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Records a single observation.
    pub fn record(&mut self, time: T, state: S) {
        self.times.push(time);
        self.states.push(state);
    }

    /// Returns the recorded times, in observation order.
    #[must_use]
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Returns the recorded states, in observation order.
    #[must_use]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Returns the number of recorded observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Consumes the recorder and returns its times and states.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Vec<S>) {
        (self.times, self.states)
    }
}

impl<S, T> Default for Recorder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A, S, T> Observer<E, A> for Recorder<S, T>
where
    E: HasTime<Time = T> + HasState<State = S>,
    S: Clone,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.time(), event.state().clone());
        None
    }
}

/// Allows `&mut Recorder` to be passed to integrators that take an observer
/// by value.
impl<E, A, S, T> Observer<E, A> for &mut Recorder<S, T>
where
    E: HasTime<Time = T> + HasState<State = S>,
    S: Clone,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
