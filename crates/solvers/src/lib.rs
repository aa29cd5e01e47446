//! Interrupt-aware adaptive integrators for the Tether framework.
//!
//! # Modules
//!
//! - [`integrate`] — integration drivers that hand control to a
//!   [`ControlledStepper`] while landing exactly on forced time points
//! - [`stepper`] — a reference Dormand–Prince 5(4) controlled stepper
//!
//! [`ControlledStepper`]: tether_core::ControlledStepper

pub mod integrate;
pub mod stepper;

pub use integrate::interruptible::integrate_adaptive_interruptible;
