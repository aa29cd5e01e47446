/// A state that can be advanced by a Runge-Kutta style stepper.
///
/// Implementing this trait lets generic steppers form linear combinations of a
/// state and its derivatives, and measure local error component by component,
/// without knowing anything else about the type. A derivative is represented
/// by the same type as the state.
///
/// Implemented for `f64`, `[f64; N]`, and `Vec<f64>`.
pub trait OdeState: Clone {
    /// Returns the state's components.
    fn as_slice(&self) -> &[f64];

    /// Returns the state's components for in-place update.
    fn as_mut_slice(&mut self) -> &mut [f64];
}

impl OdeState for f64 {
    fn as_slice(&self) -> &[f64] {
        std::slice::from_ref(self)
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        std::slice::from_mut(self)
    }
}

impl<const N: usize> OdeState for [f64; N] {
    fn as_slice(&self) -> &[f64] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        self
    }
}

impl OdeState for Vec<f64> {
    fn as_slice(&self) -> &[f64] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        self
    }
}
