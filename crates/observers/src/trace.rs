//! Logging observer.

use std::fmt::Debug;

use tether_core::Observer;
use tracing::debug;

use crate::traits::{HasState, HasTime};

/// An observer that emits one `DEBUG` [`tracing`] event per observation.
///
/// The `label` is attached to every event so several integrations can be told
/// apart in one log. Nothing is logged unless a subscriber is installed.
#[derive(Debug, Clone)]
pub struct TraceObserver {
    label: &'static str,
    observed: usize,
}

impl TraceObserver {
    /// Creates an observer that tags its events with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label, observed: 0 }
    }

    /// Returns how many events have been observed.
    #[must_use]
    pub fn observed(&self) -> usize {
        self.observed
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasTime + HasState,
    E::Time: Debug,
    E::State: Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.observed += 1;
        debug!(
            label = self.label,
            n = self.observed,
            time = ?event.time(),
            state = ?event.state(),
            "observed"
        );
        None
    }
}

/// Allows `&mut TraceObserver` to be passed to integrators that take an
/// observer by value.
impl<E, A> Observer<E, A> for &mut TraceObserver
where
    E: HasTime + HasState,
    E::Time: Debug,
    E::State: Debug,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
