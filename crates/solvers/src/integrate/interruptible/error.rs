use std::error::Error as StdError;

/// Errors that can occur during interruptible integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("stepper error: {0}")]
    Stepper(#[source] Box<dyn StdError + Send + Sync>),

    #[error("no acceptable step size found after {attempts} attempts at t = {time} (last dt = {dt})")]
    StepSizeExhausted { attempts: usize, time: f64, dt: f64 },

    #[error("start and end times must be finite, got [{start}, {end}]")]
    NonFiniteInterval { start: f64, end: f64 },

    #[error("step size {dt} must be finite, non-zero, and point from {start} toward {end}")]
    InvalidStep { dt: f64, start: f64, end: f64 },
}

impl Error {
    pub(crate) fn stepper<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Stepper(Box::new(err))
    }
}
