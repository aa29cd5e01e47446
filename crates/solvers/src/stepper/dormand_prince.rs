use std::error::Error as StdError;

use tether_core::{ControlledStepper, OdeState, OdeSystem, StepResult};

use super::Tolerances;

// Dormand–Prince 5(4) tableau.
const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// 5th-order weights, propagated.
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Difference between the 5th- and 4th-order weights.
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

/// Order of the propagated solution.
const STEPPER_ORDER: i32 = 5;

/// Order of the embedded error estimate.
const ERROR_ORDER: i32 = 4;

/// Errors that can occur while attempting a Dormand–Prince step.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("system error: {0}")]
    System(#[source] Box<dyn StdError + Send + Sync>),

    #[error("derivative has {found} components, state has {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Error returned when a maximum step size is not finite and positive.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
#[error("maximum step size must be finite and positive, got {0}")]
pub struct MaxStepError(pub f64);

impl Error {
    fn system<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::System(Box::new(err))
    }
}

/// Explicit Dormand–Prince 5(4) controlled stepper.
///
/// Seven-stage embedded Runge–Kutta pair: the 5th-order solution is
/// propagated and the 4th-order one provides the local error estimate.
/// Suited to non-stiff problems.
///
/// # Step-size control
///
/// The error ratio is the largest component of the embedded error divided by
/// its tolerance scale (see [`Tolerances`]).
///
/// - Ratio above 1: the step is rejected, `state` and `time` are left
///   unchanged, and `dt` shrinks by `max(0.9 · ratio^(-1/3), 0.2)`.
/// - Otherwise the step is accepted. If the ratio is below 0.5, `dt` grows by
///   `0.9 · max(ratio, 5^-5)^(-1/5)`, up to five-fold.
///
/// An optional maximum step size caps growth; a trial `dt` above it is
/// reduced to the maximum and reported as rejected without evaluating the
/// system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DormandPrince {
    tolerances: Tolerances,
    max_dt: Option<f64>,
}

impl DormandPrince {
    /// Creates a stepper with the given tolerances and no maximum step size.
    #[must_use]
    pub fn new(tolerances: Tolerances) -> Self {
        Self {
            tolerances,
            max_dt: None,
        }
    }

    /// Caps the magnitude of the step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_dt` is not finite or not positive.
    pub fn with_max_dt(mut self, max_dt: f64) -> Result<Self, MaxStepError> {
        if !max_dt.is_finite() || max_dt <= 0.0 {
            return Err(MaxStepError(max_dt));
        }
        self.max_dt = Some(max_dt);
        Ok(self)
    }

    /// Returns the stepper's tolerances.
    #[must_use]
    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Returns the maximum step size magnitude, if any.
    #[must_use]
    pub fn max_dt(&self) -> Option<f64> {
        self.max_dt
    }

    /// Limits `dt` to the maximum step size, preserving its sign.
    fn cap(&self, dt: f64) -> f64 {
        match self.max_dt {
            Some(max) if dt.abs() > max => max.copysign(dt),
            _ => dt,
        }
    }

    /// Largest component of `dt * Σ e_i k_i` relative to its tolerance scale.
    fn error_ratio<S: OdeState>(&self, x: &S, dxdt: &S, dt: f64, terms: &[(f64, &S)]) -> f64 {
        x.as_slice()
            .iter()
            .zip(dxdt.as_slice())
            .enumerate()
            .map(|(i, (&xi, &di))| {
                let err = dt * weighted_sum(terms, i);
                (err / self.tolerances.scale(xi, di, dt)).abs()
            })
            .fold(0.0, |worst, ratio| {
                if ratio > worst || ratio.is_nan() {
                    ratio
                } else {
                    worst
                }
            })
    }
}

impl<Sys, S> ControlledStepper<Sys, S, f64> for DormandPrince
where
    Sys: OdeSystem<S>,
    S: OdeState,
{
    type Error = Error;

    fn try_step(
        &mut self,
        system: &Sys,
        state: &mut S,
        time: &mut f64,
        dt: &mut f64,
    ) -> Result<StepResult, Error> {
        let capped = self.cap(*dt);
        #[allow(clippy::float_cmp)]
        if capped != *dt {
            *dt = capped;
            return Ok(StepResult::Rejected);
        }

        let (t, h) = (*time, *dt);
        let x = &*state;
        let rhs = |time: f64, x: &S| evaluate(system, time, x);

        let k1 = rhs(t, x)?;
        let k2 = rhs(t + C2 * h, &combine(x, h, &[(A21, &k1)]))?;
        let k3 = rhs(t + C3 * h, &combine(x, h, &[(A31, &k1), (A32, &k2)]))?;
        let k4 = rhs(
            t + C4 * h,
            &combine(x, h, &[(A41, &k1), (A42, &k2), (A43, &k3)]),
        )?;
        let k5 = rhs(
            t + C5 * h,
            &combine(x, h, &[(A51, &k1), (A52, &k2), (A53, &k3), (A54, &k4)]),
        )?;
        let k6 = rhs(
            t + h,
            &combine(
                x,
                h,
                &[(A61, &k1), (A62, &k2), (A63, &k3), (A64, &k4), (A65, &k5)],
            ),
        )?;

        let next = combine(
            x,
            h,
            &[(B1, &k1), (B3, &k3), (B4, &k4), (B5, &k5), (B6, &k6)],
        );
        let k7 = rhs(t + h, &next)?;

        let ratio = self.error_ratio(
            x,
            &k1,
            h,
            &[(E1, &k1), (E3, &k3), (E4, &k4), (E5, &k5), (E6, &k6), (E7, &k7)],
        );

        if ratio > 1.0 || ratio.is_nan() {
            let factor = if ratio.is_finite() {
                (0.9 * ratio.powf(-1.0 / f64::from(ERROR_ORDER - 1))).max(0.2)
            } else {
                0.2
            };
            *dt = h * factor;
            return Ok(StepResult::Rejected);
        }

        *state = next;
        *time = t + h;

        if ratio < 0.5 {
            let ratio = ratio.max(5.0_f64.powi(-STEPPER_ORDER));
            *dt = self.cap(h * 0.9 * ratio.powf(-1.0 / f64::from(STEPPER_ORDER)));
        }

        Ok(StepResult::Accepted)
    }
}

/// Evaluates the system and checks the derivative's dimension.
fn evaluate<Sys, S>(system: &Sys, time: f64, x: &S) -> Result<S, Error>
where
    Sys: OdeSystem<S>,
    S: OdeState,
{
    let dxdt = system.rhs(time, x).map_err(Error::system)?;

    let (expected, found) = (x.as_slice().len(), dxdt.as_slice().len());
    if expected != found {
        return Err(Error::DimensionMismatch { expected, found });
    }

    Ok(dxdt)
}

/// Returns `x + h * Σ c_i k_i`.
fn combine<S: OdeState>(x: &S, h: f64, terms: &[(f64, &S)]) -> S {
    let mut out = x.clone();
    for (i, value) in out.as_mut_slice().iter_mut().enumerate() {
        *value += h * weighted_sum(terms, i);
    }
    out
}

/// Returns `Σ c_j k_j[i]`.
fn weighted_sum<S: OdeState>(terms: &[(f64, &S)], i: usize) -> f64 {
    terms.iter().map(|(c, k)| c * k.as_slice()[i]).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{convert::Infallible, f64::consts::PI};

    use approx::assert_relative_eq;

    use tether_core::Periodic;

    use crate::integrate::{
        adaptive,
        interruptible::{self, Config},
    };

    /// `dx/dt = -k x`.
    struct Decay {
        k: f64,
    }

    impl OdeSystem<f64> for Decay {
        type Error = Infallible;

        fn rhs(&self, _time: f64, x: &f64) -> Result<f64, Infallible> {
            Ok(-self.k * x)
        }
    }

    /// Unit harmonic oscillator on `[position, velocity]`.
    struct Oscillator;

    impl OdeSystem<[f64; 2]> for Oscillator {
        type Error = Infallible;

        fn rhs(&self, _time: f64, x: &[f64; 2]) -> Result<[f64; 2], Infallible> {
            Ok([x[1], -x[0]])
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("negative state")]
    struct NegativeState;

    /// Fails whenever the state goes negative.
    struct NonNegative;

    impl OdeSystem<f64> for NonNegative {
        type Error = NegativeState;

        fn rhs(&self, _time: f64, x: &f64) -> Result<f64, NegativeState> {
            if *x < 0.0 { Err(NegativeState) } else { Ok(-1.0) }
        }
    }

    /// Returns a derivative one component longer than the state.
    struct Ragged;

    impl OdeSystem<Vec<f64>> for Ragged {
        type Error = Infallible;

        fn rhs(&self, _time: f64, x: &Vec<f64>) -> Result<Vec<f64>, Infallible> {
            Ok(vec![0.0; x.len() + 1])
        }
    }

    fn tight() -> DormandPrince {
        DormandPrince::new(Tolerances::new(1e-10, 1e-10).unwrap())
    }

    #[test]
    fn exponential_decay_matches_exact_solution() {
        let mut x = 1.0;
        let mut dt = 0.1;

        let solution = adaptive::solve_unobserved(
            &mut tight(),
            &Decay { k: 1.0 },
            &mut x,
            [0.0, 1.0],
            &mut dt,
            &Config::default(),
        )
        .expect("should integrate");

        assert_eq!(solution.time, 1.0);
        assert_relative_eq!(x, (-1.0_f64).exp(), epsilon = 1e-8);
    }

    #[test]
    fn oscillator_returns_after_one_period() {
        let mut x = [1.0, 0.0];
        let mut dt = 0.01;

        adaptive::solve_unobserved(
            &mut tight(),
            &Oscillator,
            &mut x,
            [0.0, 2.0 * PI],
            &mut dt,
            &Config::default(),
        )
        .expect("should integrate");

        assert_relative_eq!(x[0], 1.0, epsilon = 1e-7);
        assert_relative_eq!(x[1], 0.0, epsilon = 1e-7);
    }

    #[test]
    fn integrates_backward_in_time() {
        let mut x = (-1.0_f64).exp();
        let mut dt = -0.1;

        adaptive::solve_unobserved(
            &mut tight(),
            &Decay { k: 1.0 },
            &mut x,
            [1.0, 0.0],
            &mut dt,
            &Config::default(),
        )
        .expect("should integrate");

        assert_relative_eq!(x, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn rejected_step_leaves_state_and_time() {
        let mut stepper = tight();
        let mut x = 1.0;
        let mut t = 0.0;
        let mut dt = 1.0;

        let result = stepper
            .try_step(&Decay { k: 10.0 }, &mut x, &mut t, &mut dt)
            .expect("should attempt");

        assert_eq!(result, StepResult::Rejected);
        assert_eq!(x, 1.0);
        assert_eq!(t, 0.0);
        assert!(dt < 1.0 && dt >= 0.2, "dt = {dt}");
    }

    #[test]
    fn accepted_step_advances_and_grows() {
        let mut stepper = DormandPrince::default();
        let mut x = 1.0;
        let mut t = 0.5;
        let mut dt = 1e-3;

        let result = stepper
            .try_step(&Decay { k: 1.0 }, &mut x, &mut t, &mut dt)
            .expect("should attempt");

        assert_eq!(result, StepResult::Accepted);
        assert_eq!(t, 0.5 + 1e-3);
        assert_relative_eq!(x, (-1e-3_f64).exp(), epsilon = 1e-12);
        assert!(dt > 1e-3 && dt <= 5e-3, "dt = {dt}");
    }

    #[test]
    fn growth_is_capped_by_max_dt() {
        let mut stepper = DormandPrince::default().with_max_dt(2e-3).unwrap();
        let mut x = 1.0;
        let mut t = 0.0;
        let mut dt = 1e-3;

        stepper
            .try_step(&Decay { k: 1.0 }, &mut x, &mut t, &mut dt)
            .expect("should attempt");

        assert_eq!(dt, 2e-3);
    }

    #[test]
    fn oversized_trial_step_is_rejected_without_evaluation() {
        let mut stepper = DormandPrince::default().with_max_dt(0.5).unwrap();
        let mut x = -1.0;
        let mut t = 0.0;
        let mut dt = -2.0;

        // NonNegative would fail on this state if it were evaluated.
        let result = stepper
            .try_step(&NonNegative, &mut x, &mut t, &mut dt)
            .expect("should not evaluate");

        assert_eq!(result, StepResult::Rejected);
        assert_eq!(dt, -0.5);
    }

    #[test]
    fn max_dt_must_be_finite_and_positive() {
        for bad in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(
                DormandPrince::default().with_max_dt(bad).is_err(),
                "max_dt = {bad}"
            );
        }
        assert_eq!(
            DormandPrince::default().with_max_dt(0.25).map(|s| s.max_dt()),
            Ok(Some(0.25))
        );
    }

    #[test]
    fn capped_stepper_reaches_the_end() {
        let mut stepper = tight().with_max_dt(0.05).unwrap();
        let mut x = 1.0;
        let mut dt = 0.1;

        let solution = interruptible::solve_unobserved(
            &mut stepper,
            &Decay { k: 1.0 },
            &mut x,
            [0.0, 1.0],
            &mut dt,
            Periodic::new(0.1),
            &Config::default(),
        )
        .expect("should integrate");

        assert_eq!(solution.status, interruptible::Status::Complete);
        assert_eq!(solution.time, 1.0);
        assert!(solution.steps >= 20);
        assert_relative_eq!(x, (-1.0_f64).exp(), epsilon = 1e-8);
    }

    #[test]
    fn system_errors_propagate() {
        let mut x = -1.0;
        let mut t = 0.0;
        let mut dt = 0.1;

        let err = tight()
            .try_step(&NonNegative, &mut x, &mut t, &mut dt)
            .expect_err("system should fail");

        assert!(matches!(err, Error::System(_)));
        assert_eq!(err.to_string(), "system error: negative state");
    }

    #[test]
    fn mismatched_derivative_is_an_error() {
        let mut x = vec![1.0, 2.0];
        let mut t = 0.0;
        let mut dt = 0.1;

        let err = tight()
            .try_step(&Ragged, &mut x, &mut t, &mut dt)
            .expect_err("dimension mismatch");

        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 3
            }
        ));
    }
}
