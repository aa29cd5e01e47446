//! Controlled steppers.
//!
//! A controlled stepper attempts one step at a time and accepts or rejects it
//! based on an embedded error estimate. Any [`ControlledStepper`] can drive the
//! integrators in [`integrate`](crate::integrate); this module provides a
//! general-purpose one.
//!
//! - [`DormandPrince`] — explicit Dormand–Prince 5(4) pair for non-stiff systems
//!
//! [`ControlledStepper`]: tether_core::ControlledStepper

mod dormand_prince;
mod tolerances;

pub use dormand_prince::{DormandPrince, Error, MaxStepError};
pub use tolerances::{ToleranceError, Tolerances};
