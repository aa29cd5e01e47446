//! Compares free adaptive integration with integration forced onto a 0.1 s grid.
//!
//! The plant is a first-order lag driven by a unit step at `t = 0`:
//!
//! ```text
//! dx/dt = -x + 0.2 * u(t)
//! ```
//!
//! With forcing, every control tick `0.0, 0.1, 0.2, ...` appears in the output,
//! which is what a model-predictive controller needs to re-plan on schedule.
//!
//! Run with `RUST_LOG=debug` to see forced-point arrivals.

use std::convert::Infallible;

use tether_core::{OdeSystem, Periodic};
use tether_solvers::{
    integrate::{
        adaptive,
        interruptible::{Action, Config, Event},
    },
    integrate_adaptive_interruptible,
    stepper::{DormandPrince, Tolerances},
};

struct Plant;

impl Plant {
    fn input(t: f64) -> f64 {
        if t > 0.0 { 1.0 } else { 0.0 }
    }
}

impl OdeSystem<f64> for Plant {
    type Error = Infallible;

    fn rhs(&self, time: f64, x: &f64) -> Result<f64, Infallible> {
        Ok(-x + 0.2 * Self::input(time))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let tolerances = Tolerances::new(1e-10, 1e-10)?;

    println!("*********** solve normal ***************");
    let mut x = 0.0;
    let mut dt = 0.1;
    let solution = adaptive::solve(
        &mut DormandPrince::new(tolerances),
        &Plant,
        &mut x,
        [0.0, 3.0],
        &mut dt,
        &Config::default(),
        |event: &Event<'_, f64, f64>| -> Option<Action> {
            println!("{}\t{}", event.time, event.state);
            None
        },
    )?;
    println!("steps: {}", solution.steps);

    println!("*********** solve interruptible ***************");
    let mut x = 0.0;
    let mut dt = 0.1;
    let steps = integrate_adaptive_interruptible(
        &mut DormandPrince::new(tolerances),
        &Plant,
        &mut x,
        0.0,
        3.0,
        &mut dt,
        Periodic::new(0.1),
        |x: &f64, t: f64| println!("{t}\t{x}"),
    )?;
    println!("steps: {steps}");

    Ok(())
}
