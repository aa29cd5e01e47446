/// Event emitted by the interruptible integrator.
///
/// One event is emitted at the head of every loop iteration, before the next
/// step is attempted, and one more after the loop ends so the final state is
/// always observed.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a, S, T> {
    /// Number of steps accepted so far.
    pub step: usize,

    /// Current time.
    pub time: T,

    /// Current state.
    pub state: &'a S,

    /// Whether `time` is exactly the forced point the interrupt last returned.
    pub forced: bool,
}
