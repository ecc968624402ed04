//! Fixed-order numerical integration of control-affine dynamics
//!
//! [`RungeKuttaTwo`] advances a [`Flow`] with the explicit midpoint rule and
//! records every step as a cubic Hermite piece, so the resulting trajectory
//! matches both the integrated states and the vector field at the step ends.

use crate::common::{DynamicalSystem, StateVector};

use super::interpolating_polynomial::InterpolatingPolynomial;

/// Vector field `dx/dt = flow(x, u)`
pub trait Flow {
    fn flow(&self, x: &StateVector, u: &StateVector) -> StateVector;
}

/// Number of equal steps needed to cover `dt` without exceeding `max_time_step`
pub fn step_count(dt: f64, max_time_step: f64) -> usize {
    if !(dt > 0.0) || !(max_time_step > 0.0) {
        return 1;
    }
    // shave round-off so that dt == k * max_time_step gives exactly k steps
    ((dt / max_time_step) * (1.0 - 1e-12)).ceil().max(1.0) as usize
}

/// Explicit midpoint (second order Runge-Kutta) integrator around a [`Flow`]
#[derive(Debug, Clone)]
pub struct RungeKuttaTwo<F> {
    flow: F,
    lipschitz_constant: f64,
    max_time_step: f64,
}

impl<F: Flow> RungeKuttaTwo<F> {
    pub fn new(flow: F, lipschitz_constant: f64, max_time_step: f64) -> Self {
        Self {
            flow,
            lipschitz_constant,
            max_time_step,
        }
    }

    /// The wrapped vector field
    pub fn flow_model(&self) -> &F {
        &self.flow
    }

    /// One midpoint step of length `h`; returns the Hermite coefficients and the new state
    fn step(&self, x0: &StateVector, u: &StateVector, h: f64) -> (Vec<StateVector>, StateVector) {
        let f0 = self.flow.flow(x0, u);
        let mid = x0 + &f0 * (0.5 * h);
        let k2 = self.flow.flow(&mid, u);
        let x1 = x0 + &k2 * h;
        let f1 = self.flow.flow(&x1, u);

        let chord = (&x1 - x0) / h;
        let a2 = (&chord * 3.0 - &f0 * 2.0 - &f1) / h;
        let a3 = (&f0 + &f1 - &chord * 2.0) / (h * h);

        (vec![x0.clone(), f0, a2, a3], x1)
    }
}

impl<F: Flow> DynamicalSystem for RungeKuttaTwo<F> {
    fn integrate(
        &self,
        x0: &StateVector,
        u: &StateVector,
        t0: f64,
        dt: f64,
    ) -> InterpolatingPolynomial {
        let n = step_count(dt, self.max_time_step);
        let h = dt / n as f64;

        let mut coefficients = Vec::with_capacity(n);
        let mut x = x0.clone();
        for _ in 0..n {
            let (piece, next) = self.step(&x, u, h);
            coefficients.push(piece);
            x = next;
        }

        InterpolatingPolynomial::from_parts(coefficients, h, t0)
    }

    fn lipschitz_constant(&self) -> f64 {
        self.lipschitz_constant
    }

    fn max_time_step(&self) -> f64 {
        self.max_time_step
    }
}
