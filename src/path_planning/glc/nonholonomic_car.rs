//! Reference planning problem: a unit-speed car with bounded turning rate
//!
//! State is `(x, y, heading)`, control is `(speed, turning rate)`. The goal is
//! a disk in the plane, obstacles are disks, and the cost is path length.

use std::f64::consts::PI;

use itertools::iproduct;
use nalgebra::Point2;

use crate::common::{
    linear_space, sqr, CostFunction, GoalRegion, Heuristic, Inputs, Obstacles, StateVector,
};

use super::interpolating_polynomial::InterpolatingPolynomial;
use super::numerical_integration::{Flow, RungeKuttaTwo};

/// Largest turning rate magnitude [rad/s]
pub const MAX_TURNING_RATE: f64 = 0.0625 * PI;

/// Lipschitz constant of the car's vector field
pub const CAR_LIPSCHITZ_CONSTANT: f64 = 1.0;

/// Unit forward speed combined with evenly spaced turning rates
#[derive(Debug, Clone)]
pub struct CarControlInputs {
    samples: Vec<StateVector>,
}

impl CarControlInputs {
    pub fn new(num_turning_rates: usize) -> Self {
        let speeds = [1.0];
        let turning_rates = linear_space(-MAX_TURNING_RATE, MAX_TURNING_RATE, num_turning_rates);
        let samples = iproduct!(speeds.iter(), turning_rates.iter())
            .map(|(&v, &w)| StateVector::from_vec(vec![v, w]))
            .collect();
        Self { samples }
    }
}

impl Inputs for CarControlInputs {
    fn samples(&self) -> &[StateVector] {
        &self.samples
    }
}

/// Kinematic car: `(v cos θ, v sin θ, ω)`
#[derive(Debug, Clone, Copy, Default)]
pub struct CarNonholonomicConstraint;

impl Flow for CarNonholonomicConstraint {
    fn flow(&self, x: &StateVector, u: &StateVector) -> StateVector {
        StateVector::from_vec(vec![u[0] * x[2].cos(), u[0] * x[2].sin(), u[1]])
    }
}

/// Car dynamics integrated with the midpoint rule
pub fn car_model(max_time_step: f64) -> RungeKuttaTwo<CarNonholonomicConstraint> {
    RungeKuttaTwo::new(CarNonholonomicConstraint, CAR_LIPSCHITZ_CONSTANT, max_time_step)
}

/// Disk-shaped goal in the `(x, y)` plane
#[derive(Debug, Clone)]
pub struct SphericalGoal {
    radius_sqr: f64,
    center: Point2<f64>,
    resolution: usize,
}

impl SphericalGoal {
    pub fn new(radius_sqr: f64, center: Point2<f64>, resolution: usize) -> Self {
        Self {
            radius_sqr,
            center,
            resolution,
        }
    }

    pub fn center(&self) -> Point2<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius_sqr.sqrt()
    }
}

impl GoalRegion for SphericalGoal {
    fn in_goal(&self, trajectory: &InterpolatingPolynomial) -> Option<f64> {
        // the initial instant was checked with the previous segment
        trajectory
            .interior_sample_times(self.resolution)
            .into_iter()
            .find(|&t| {
                let x = trajectory.at(t);
                sqr(x[0] - self.center.x) + sqr(x[1] - self.center.y) < self.radius_sqr
            })
    }
}

/// Straight-line distance to the goal disk
#[derive(Debug, Clone)]
pub struct EuclideanHeuristic {
    goal: Point2<f64>,
    radius: f64,
}

impl EuclideanHeuristic {
    pub fn new(goal: Point2<f64>, radius: f64) -> Self {
        Self { goal, radius }
    }
}

impl Heuristic for EuclideanHeuristic {
    fn cost_to_go(&self, state: &StateVector) -> f64 {
        let distance = (sqr(self.goal.x - state[0]) + sqr(self.goal.y - state[1])).sqrt();
        (distance - self.radius).max(0.0)
    }
}

/// Path length: integral of `|speed|` over the control signal
#[derive(Debug, Clone)]
pub struct ArcLength {
    resolution: usize,
}

impl ArcLength {
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution: resolution.max(1),
        }
    }
}

impl CostFunction for ArcLength {
    fn cost(
        &self,
        _trajectory: &InterpolatingPolynomial,
        control: &InterpolatingPolynomial,
        t0: f64,
        tf: f64,
    ) -> f64 {
        let dt = (tf - t0) / self.resolution as f64;
        (0..self.resolution)
            .map(|i| control.at(t0 + (i as f64 + 0.5) * dt)[0].abs() * dt)
            .sum()
    }
}

/// Closed disk in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl Disk {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point2::new(x, y),
            radius,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        sqr(x - self.center.x) + sqr(y - self.center.y) <= sqr(self.radius)
    }
}

/// Field of disk obstacles checked at a fixed number of points per segment
#[derive(Debug, Clone)]
pub struct DiskObstacles {
    disks: Vec<Disk>,
    resolution: usize,
}

impl DiskObstacles {
    pub fn new(disks: Vec<Disk>, resolution: usize) -> Self {
        Self { disks, resolution }
    }

    /// Obstacle-free plane
    pub fn empty() -> Self {
        Self::new(Vec::new(), 1)
    }

    /// Two radius-2 disks at (3, 2) and (6, 8)
    pub fn two_disks(resolution: usize) -> Self {
        Self::new(vec![Disk::new(3.0, 2.0, 2.0), Disk::new(6.0, 8.0, 2.0)], resolution)
    }

    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }
}

impl Obstacles for DiskObstacles {
    fn collision_free(&self, trajectory: &InterpolatingPolynomial) -> bool {
        if self.disks.is_empty() {
            return true;
        }
        trajectory
            .interior_sample_times(self.resolution)
            .into_iter()
            .all(|t| {
                let x = trajectory.at(t);
                !self.disks.iter().any(|disk| disk.contains(x[0], x[1]))
            })
    }
}
