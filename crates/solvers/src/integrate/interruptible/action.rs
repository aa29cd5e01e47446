/// Control actions supported by the interruptible integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop at the observed loop head and return the solution so far.
    StopEarly,
}
