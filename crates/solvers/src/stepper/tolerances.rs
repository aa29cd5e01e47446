use thiserror::Error;

/// Absolute and relative error tolerances for a controlled stepper.
///
/// A component's local error is acceptable when it does not exceed
/// `abs + rel * (|x| + |dt| * |dx/dt|)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    abs: f64,
    rel: f64,
}

/// Errors that can occur when validating tolerances.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceError {
    #[error("absolute tolerance must be finite and positive")]
    Abs,

    #[error("relative tolerance must be finite and non-negative")]
    Rel,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-6,
            rel: 1e-6,
        }
    }
}

impl Tolerances {
    /// Creates validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `abs` is not positive or `rel` is negative, or if
    /// either is non-finite.
    pub fn new(abs: f64, rel: f64) -> Result<Self, ToleranceError> {
        if !abs.is_finite() || abs <= 0.0 {
            return Err(ToleranceError::Abs);
        }
        if !rel.is_finite() || rel < 0.0 {
            return Err(ToleranceError::Rel);
        }

        Ok(Self { abs, rel })
    }

    /// Returns the absolute tolerance.
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.abs
    }

    /// Returns the relative tolerance.
    #[must_use]
    pub fn rel(&self) -> f64 {
        self.rel
    }

    /// Returns the largest acceptable error for a component.
    pub(crate) fn scale(&self, x: f64, dxdt: f64, dt: f64) -> f64 {
        self.abs + self.rel * (x.abs() + dt.abs() * dxdt.abs())
    }
}
