use std::{
    fmt::Debug,
    ops::{Add, Sub},
};

/// The scalar independent variable of an integration.
///
/// Time values are ordered and support an arithmetic difference, which is all
/// an integrator needs to advance, clamp, and compare them. Integration may run
/// in either direction: the sign of the step size decides which way "forward"
/// points.
///
/// Implemented for `f32` and `f64`.
pub trait Time: Copy + PartialOrd + Debug + Add<Output = Self> + Sub<Output = Self> {
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns `true` if the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Converts the value to `f64` for diagnostics.
    fn to_f64(self) -> f64;
}

impl Time for f64 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Time for f32 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span<T: Time>(start: T, end: T) -> T {
        end - start
    }

    #[test]
    fn difference_is_generic_over_precision() {
        assert_eq!(span(1.0_f64, 3.5), 2.5);
        assert_eq!(span(1.0_f32, 3.5), 2.5);
    }

    #[test]
    fn finiteness() {
        assert!(Time::is_finite(0.0_f64));
        assert!(!Time::is_finite(f64::NAN));
        assert!(!Time::is_finite(f32::INFINITY));
    }

    #[test]
    fn widening_to_f64() {
        assert_eq!(0.5_f32.to_f64(), 0.5);
        assert_eq!(<f64 as Time>::zero(), 0.0);
    }
}
