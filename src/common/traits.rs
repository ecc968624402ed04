//! Capability traits for the collaborators of the GLC planner
//!
//! The planner only ever talks to a problem through these six traits, so any
//! vehicle model, cost metric, goal shape or obstacle field can be swapped in
//! without touching the search.

use crate::common::types::StateVector;
use crate::path_planning::glc::numerical_integration::step_count;
use crate::path_planning::glc::InterpolatingPolynomial;

/// Finite, resolution-parameterized set of control samples
pub trait Inputs {
    /// All samples in enumeration order
    fn samples(&self) -> &[StateVector];

    /// Number of samples
    fn sample_count(&self) -> usize {
        self.samples().len()
    }
}

/// Dynamic model paired with a numerical integration scheme
pub trait DynamicalSystem {
    /// Integrate from `x0` under the constant control `u` over `[t0, t0 + dt]`
    fn integrate(&self, x0: &StateVector, u: &StateVector, t0: f64, dt: f64)
        -> InterpolatingPolynomial;

    /// Upper bound on the Lipschitz constant of the vector field
    fn lipschitz_constant(&self) -> f64;

    /// Largest step the integrator takes internally
    fn max_time_step(&self) -> f64;

    /// Zero-order-hold signal for `u` with the same interval layout as [`integrate`](Self::integrate)
    fn control_signal(&self, u: &StateVector, t0: f64, dt: f64) -> InterpolatingPolynomial {
        let n = step_count(dt, self.max_time_step());
        InterpolatingPolynomial::constant(u, t0, dt / n as f64, n)
    }
}

/// Running cost of a trajectory segment
pub trait CostFunction {
    /// Accumulated cost over `[t0, tf]`; must be non-negative
    fn cost(
        &self,
        trajectory: &InterpolatingPolynomial,
        control: &InterpolatingPolynomial,
        t0: f64,
        tf: f64,
    ) -> f64;

    /// Lipschitz constant of the running cost
    fn lipschitz_constant(&self) -> f64 {
        0.0
    }
}

/// Admissible estimate of the optimal cost-to-go
pub trait Heuristic {
    fn cost_to_go(&self, state: &StateVector) -> f64;
}

/// Goal membership test
pub trait GoalRegion {
    /// Earliest sampled time at which `trajectory` is inside the goal, if any
    fn in_goal(&self, trajectory: &InterpolatingPolynomial) -> Option<f64>;
}

/// Feasibility (collision) test
pub trait Obstacles {
    /// True if every sampled state of `trajectory` is admissible
    fn collision_free(&self, trajectory: &InterpolatingPolynomial) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct HoldModel;

    impl DynamicalSystem for HoldModel {
        fn integrate(
            &self,
            x0: &StateVector,
            _u: &StateVector,
            t0: f64,
            dt: f64,
        ) -> InterpolatingPolynomial {
            InterpolatingPolynomial::constant(x0, t0, dt, 1)
        }

        fn lipschitz_constant(&self) -> f64 {
            0.0
        }

        fn max_time_step(&self) -> f64 {
            0.25
        }
    }

    #[test]
    fn test_default_control_signal_layout() {
        let model = HoldModel;
        let u = StateVector::from_vec(vec![1.0, -0.5]);
        let signal = model.control_signal(&u, 2.0, 1.0);
        assert_eq!(signal.number_of_intervals(), 4);
        assert!((signal.interval_length() - 0.25).abs() < 1e-12);
        assert!((signal.at(2.6) - &u).norm() < 1e-12);
    }
}
