/// The right-hand side of an ordinary differential equation `dx/dt = f(t, x)`.
///
/// Systems are evaluated only by steppers; integrators forward them unchanged.
/// The derivative is returned as a value of the state type.
pub trait OdeSystem<S> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the time derivative of `state` at `time`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be evaluated.
    fn rhs(&self, time: f64, state: &S) -> Result<S, Self::Error>;
}
