//! Capability traits for cross-integrator observers.
//!
//! These traits abstract over integrator-specific event and action types,
//! enabling observers to work generically across integrators.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry the current time
//! - [`HasState`] — events that carry the current state
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use tether_core::Observer;
//! use tether_observers::traits::{CanStopEarly, HasTime};
//!
//! /// Stops the integration once it reaches a deadline.
//! struct Deadline(f64);
//!
//! impl<E: HasTime<Time = f64>, A: CanStopEarly> Observer<E, A> for Deadline {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use tether_solvers::integrate::interruptible;

/// An event that carries the current time.
pub trait HasTime {
    type Time;

    /// Returns the time of this event.
    fn time(&self) -> Self::Time;
}

/// An event that carries the current state.
pub trait HasState {
    type State;

    /// Returns the state at this event.
    fn state(&self) -> &Self::State;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the integrator early.
    fn stop_early() -> Self;
}

// --- interruptible::Event ---

impl<S, T: Copy> HasTime for interruptible::Event<'_, S, T> {
    type Time = T;

    fn time(&self) -> T {
        self.time
    }
}

impl<S, T> HasState for interruptible::Event<'_, S, T> {
    type State = S;

    fn state(&self) -> &S {
        self.state
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for interruptible::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
