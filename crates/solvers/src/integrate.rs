//! Adaptive integration drivers.
//!
//! Both drivers ask a [`ControlledStepper`] for steps, retry rejected attempts
//! up to a bound, and clamp the step size so the integration never passes a
//! forced time point.
//!
//! # Drivers
//!
//! - [`interruptible`] — forced points come from an [`Interrupt`] that is
//!   re-consulted, with the current state, every time one is reached
//! - [`adaptive`] — the only forced point is the end time
//!
//! [`ControlledStepper`]: tether_core::ControlledStepper
//! [`Interrupt`]: tether_core::Interrupt

mod direction;

pub mod adaptive;
pub mod interruptible;
