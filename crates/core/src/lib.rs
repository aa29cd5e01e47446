//! Core traits and types for the Tether integrators.
//!
//! This crate defines the shared abstractions that integrators, steppers, and
//! observers build on:
//!
//! - [`Time`] — the scalar independent variable, advanced in either direction
//! - [`OdeState`] — a state viewed as a flat slice of `f64` components
//! - [`OdeSystem`] — the right-hand side `dx/dt = f(t, x)` of an ODE
//! - [`ControlledStepper`] — attempts one error-controlled step and reports
//!   whether it was accepted
//! - [`Interrupt`] — derives the next forced time point from the current state
//! - [`Observer`] — receives integrator events and optionally returns control
//!   actions

mod interrupt;
mod observer;
mod state;
mod stepper;
mod system;
mod time;

pub use interrupt::{Interrupt, Periodic};
pub use observer::Observer;
pub use state::OdeState;
pub use stepper::{ControlledStepper, StepResult};
pub use system::OdeSystem;
pub use time::Time;
