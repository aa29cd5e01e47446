//! Adaptive integration that lands exactly on forced time points.
//!
//! This module drives a [`ControlledStepper`] across an interval while an
//! [`Interrupt`] decides which time points must be visited exactly. It is
//! meant for loops that sample or re-plan at fixed instants, such as
//! model-predictive control, while still letting the stepper choose its own
//! step size everywhere else.
//!
//! # Algorithm
//!
//! The interrupt is consulted once before stepping to seed the first forced
//! point. Then, while the current time is strictly before the end time (in the
//! direction of `dt`):
//!
//! 1. If the current time has reached the forced point, the interrupt is
//!    consulted again with the current state and time.
//! 2. An [`Event`] is emitted to the observer.
//! 3. The force point is whichever of the end time and the forced point comes
//!    first.
//! 4. If a step of the current `dt` would pass the force point, `dt` is
//!    clamped so the step lands exactly on it.
//! 5. The stepper is asked for a step, retrying rejected attempts up to
//!    [`Config::max_attempts`] per iteration.
//!
//! After the loop, one final [`Event`] is emitted at the end time.
//!
//! # Exact arrival
//!
//! When the clamped step is accepted, the time is set to the force point
//! itself rather than to `time + dt`, so arrival never depends on round-off.
//! If the interrupt returns a time that is not ahead of the current time, it
//! is consulted again at the next loop head; until it returns a time ahead of
//! the current one, only the end time bounds the step.
//!
//! # Example
//!
//! ```ignore
//! use tether_core::Periodic;
//! use tether_solvers::integrate::interruptible;
//!
//! let mut dt = 0.1;
//! let solution = interruptible::solve_unobserved(
//!     &mut stepper, &system, &mut x, [0.0, 3.0], &mut dt, Periodic::new(0.1), &Config::default(),
//! )?;
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use tether_core::{ControlledStepper, Interrupt, Observer, StepResult, Time};
use tracing::{debug, trace, warn};

use super::direction::{first_of, is_before};

/// Integrates from `interval[0]` to `interval[1]`, landing exactly on every
/// forced point the interrupt produces.
///
/// `state` and `dt` are updated in place: on return `state` holds the value at
/// [`Solution::time`] and `dt` holds the stepper's last proposed step size.
/// The sign of `dt` sets the direction of integration.
///
/// The observer receives an [`Event`] at every loop head and once after the
/// loop. It may return [`Action::StopEarly`] at a loop head to stop there.
///
/// # Errors
///
/// Returns an error if the interval or step size is invalid, if the stepper
/// fails, or if the stepper rejects [`Config::max_attempts`] attempts in a row
/// within one iteration. A step size the stepper leaves zero, non-finite, or
/// pointing away from the end is reported as [`Error::InvalidStep`].
#[allow(clippy::too_many_arguments)]
pub fn solve<St, Sys, S, T, I, Obs>(
    stepper: &mut St,
    system: &Sys,
    state: &mut S,
    interval: [T; 2],
    dt: &mut T,
    mut interrupt: I,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<T>, Error>
where
    St: ControlledStepper<Sys, S, T>,
    T: Time,
    I: Interrupt<S, T>,
    Obs: for<'a> Observer<Event<'a, S, T>, Action>,
{
    let [start, end] = interval;
    validate(start, end, *dt)?;

    // Direction is fixed by the validated initial step size.
    let direction = *dt;
    let mut time = start;
    let mut steps = 0;
    let mut forced = interrupt.next(state, time);

    while is_before(time, end, direction) {
        #[allow(clippy::float_cmp)]
        let arrived = time == forced;

        if !is_before(time, forced, direction) {
            if arrived {
                debug!(time = ?time, steps, "reached forced point");
            }
            forced = interrupt.next(state, time);
            if !is_before(time, forced, direction) {
                warn!(
                    time = ?time,
                    forced = ?forced,
                    "interrupt returned a time that is not ahead; bounding step by end time"
                );
            }
        }

        let event = Event {
            step: steps,
            time,
            state: &*state,
            forced: arrived,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                steps,
                time,
            });
        }

        let force_point = if is_before(time, forced, direction) {
            first_of(end, forced, direction)
        } else {
            end
        };

        if !is_before(T::zero(), *dt, direction) {
            return Err(invalid_step(time, end, *dt));
        }

        let clamped = if is_before(force_point, time + *dt, direction) {
            *dt = force_point - time;
            Some(*dt)
        } else {
            None
        };

        let mut attempts = 0;
        loop {
            let attempted = *dt;
            attempts += 1;

            let result = stepper
                .try_step(system, state, &mut time, dt)
                .map_err(Error::stepper)?;

            match result {
                StepResult::Accepted => {
                    #[allow(clippy::float_cmp)]
                    if clamped == Some(attempted) {
                        time = force_point;
                    }
                    break;
                }
                StepResult::Rejected => {
                    trace!(time = ?time, dt = ?*dt, attempts, "step rejected");
                    if attempts >= config.max_attempts() {
                        warn!(time = ?time, dt = ?*dt, attempts, "step size could not be found");
                        return Err(Error::StepSizeExhausted {
                            attempts,
                            time: time.to_f64(),
                            dt: dt.to_f64(),
                        });
                    }
                    if !is_before(T::zero(), *dt, direction) {
                        return Err(invalid_step(time, end, *dt));
                    }
                }
            }
        }

        steps += 1;
    }

    #[allow(clippy::float_cmp)]
    let event = Event {
        step: steps,
        time,
        state: &*state,
        forced: time == forced,
    };
    // The integration is already complete, so any action is moot.
    let _ = observer.observe(&event);

    Ok(Solution {
        status: Status::Complete,
        steps,
        time,
    })
}

/// Runs interruptible integration without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<St, Sys, S, T, I>(
    stepper: &mut St,
    system: &Sys,
    state: &mut S,
    interval: [T; 2],
    dt: &mut T,
    interrupt: I,
    config: &Config,
) -> Result<Solution<T>, Error>
where
    St: ControlledStepper<Sys, S, T>,
    T: Time,
    I: Interrupt<S, T>,
{
    solve(stepper, system, state, interval, dt, interrupt, config, ())
}

/// Integrates with forced points and a plain `(state, time)` observer.
///
/// This is the classic entry point: it uses the default [`Config`] and returns
/// the number of accepted steps. `start_time` is copied; `state` and `dt` are
/// updated in place.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
#[allow(clippy::too_many_arguments)]
pub fn integrate_adaptive_interruptible<St, Sys, S, T, I, F>(
    stepper: &mut St,
    system: &Sys,
    state: &mut S,
    start_time: T,
    end_time: T,
    dt: &mut T,
    interrupt: I,
    mut observer: F,
) -> Result<usize, Error>
where
    St: ControlledStepper<Sys, S, T>,
    T: Time,
    I: Interrupt<S, T>,
    F: FnMut(&S, T),
{
    let solution = solve(
        stepper,
        system,
        state,
        [start_time, end_time],
        dt,
        interrupt,
        &Config::default(),
        |event: &Event<'_, S, T>| -> Option<Action> {
            observer(event.state, event.time);
            None
        },
    )?;

    Ok(solution.steps)
}

/// Reports a step size that is zero, non-finite, or reversed mid-integration.
fn invalid_step<T: Time>(time: T, end: T, dt: T) -> Error {
    warn!(time = ?time, dt = ?dt, "stepper returned an unusable step size");
    Error::InvalidStep {
        dt: dt.to_f64(),
        start: time.to_f64(),
        end: end.to_f64(),
    }
}

/// Checks that the interval is finite and `dt` points from start toward end.
#[allow(clippy::float_cmp)]
fn validate<T: Time>(start: T, end: T, dt: T) -> Result<(), Error> {
    if !start.is_finite() || !end.is_finite() {
        return Err(Error::NonFiniteInterval {
            start: start.to_f64(),
            end: end.to_f64(),
        });
    }

    let is_empty = start == end;

    let points_toward_end = dt.is_finite() && dt != T::zero() && is_before(start, end, dt);
    if !is_empty && !points_toward_end {
        return Err(Error::InvalidStep {
            dt: dt.to_f64(),
            start: start.to_f64(),
            end: end.to_f64(),
        });
    }

    Ok(())
}
