//! Reusable observers for the Tether integrators.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the integrators in `tether-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-integrator observers
//!   ([`HasTime`], [`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Recorder`] — collects every observed `(time, state)` pair
//! - [`TraceObserver`] — logs every observation through [`tracing`]
//!
//! [`Observer`]: tether_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;
mod trace;

pub use recorder::Recorder;
pub use trace::TraceObserver;
