use std::ops::Add;

/// Derives the next forced time point from the current state and time.
///
/// An integrator consults its interrupt once before it starts stepping and
/// again every time it arrives at the previously returned time. Because the
/// interrupt sees the current state, the forcing schedule need not be a fixed
/// grid: it can be re-planned from whatever the integration has reached.
///
/// Closures of the form `FnMut(&S, T) -> T` implement this trait.
pub trait Interrupt<S, T> {
    /// Returns the next time the integration must land on exactly.
    fn next(&mut self, state: &S, time: T) -> T;
}

/// Blanket implementation for interrupt closures.
impl<S, T, F> Interrupt<S, T> for F
where
    F: FnMut(&S, T) -> T,
{
    fn next(&mut self, state: &S, time: T) -> T {
        self(state, time)
    }
}

/// A fixed-interval schedule: the next forced point is always `time + interval`.
///
/// This is the usual schedule for a sampled control loop. A negative interval
/// schedules points for backward integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Periodic<T> {
    interval: T,
}

impl<T> Periodic<T> {
    /// Creates a schedule that forces a point every `interval`.
    pub fn new(interval: T) -> Self {
        Self { interval }
    }

    /// Returns the interval between forced points.
    pub fn interval(&self) -> &T {
        &self.interval
    }
}

impl<S, T> Interrupt<S, T> for Periodic<T>
where
    T: Add<Output = T> + Copy,
{
    fn next(&mut self, _state: &S, time: T) -> T {
        time + self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn schedule<I: Interrupt<f64, f64>>(mut interrupt: I, state: f64, from: f64, n: usize) -> Vec<f64> {
        let mut points = Vec::with_capacity(n);
        let mut time = from;
        for _ in 0..n {
            time = interrupt.next(&state, time);
            points.push(time);
        }
        points
    }

    #[test]
    fn periodic_advances_by_interval() {
        let points = schedule(Periodic::new(0.25), 0.0, 1.0, 3);
        assert_eq!(points, vec![1.25, 1.5, 1.75]);
    }

    #[test]
    fn periodic_supports_backward_schedules() {
        let points = schedule(Periodic::new(-0.5), 0.0, 0.0, 2);
        assert_eq!(points, vec![-0.5, -1.0]);
    }

    #[test]
    fn closure_can_depend_on_state() {
        // Re-plan sooner when the state is large.
        let replan = |x: &f64, t: f64| if *x > 1.0 { t + 0.1 } else { t + 1.0 };

        assert_relative_eq!(schedule(replan, 2.0, 0.0, 1)[0], 0.1);
        assert_relative_eq!(schedule(replan, 0.5, 0.0, 1)[0], 1.0);
    }
}
