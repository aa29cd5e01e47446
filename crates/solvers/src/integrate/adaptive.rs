//! Adaptive integration with no forced points other than the end time.
//!
//! This is the interruptible driver with a schedule that always points at the
//! end time, so the stepper chooses every step size and only the final step is
//! clamped. It shares [`Config`], [`Event`], [`Action`], [`Solution`], and
//! [`Error`] with [`interruptible`](super::interruptible).

use tether_core::{ControlledStepper, Observer, Time};

use super::interruptible::{self, Action, Config, Error, Event, Solution};

/// Integrates from `interval[0]` to `interval[1]` with adaptive steps.
///
/// `state` and `dt` are updated in place. The observer receives an [`Event`]
/// before every step and once at the end time.
///
/// # Errors
///
/// Returns an error under the same conditions as [`interruptible::solve`].
pub fn solve<St, Sys, S, T, Obs>(
    stepper: &mut St,
    system: &Sys,
    state: &mut S,
    interval: [T; 2],
    dt: &mut T,
    config: &Config,
    observer: Obs,
) -> Result<Solution<T>, Error>
where
    St: ControlledStepper<Sys, S, T>,
    T: Time,
    Obs: for<'a> Observer<Event<'a, S, T>, Action>,
{
    let end = interval[1];
    interruptible::solve(
        stepper,
        system,
        state,
        interval,
        dt,
        |_: &S, _: T| end,
        config,
        observer,
    )
}

/// Runs adaptive integration without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`interruptible::solve`].
pub fn solve_unobserved<St, Sys, S, T>(
    stepper: &mut St,
    system: &Sys,
    state: &mut S,
    interval: [T; 2],
    dt: &mut T,
    config: &Config,
) -> Result<Solution<T>, Error>
where
    St: ControlledStepper<Sys, S, T>,
    T: Time,
{
    solve(stepper, system, state, interval, dt, config, ())
}
