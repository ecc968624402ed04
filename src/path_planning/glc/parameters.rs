//! Planner configuration and the discretization quantities derived from it

use std::f64::consts::FRAC_PI_2;

use crate::common::{check_dimension, is_finite, GlcError, GlcResult, StateVector};

/// When the search declares success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalPolicy {
    /// Stop after the expansion that first produces a goal-reaching segment
    FirstDetected,
    /// Stop when a goal-reaching node is popped from the frontier
    GoalPopped,
}

impl Default for GoalPolicy {
    fn default() -> Self {
        GoalPolicy::FirstDetected
    }
}

/// Configuration for the GLC planner
#[derive(Debug, Clone)]
pub struct Parameters {
    /// Resolution: control density, expansion step and partition size all scale with it
    pub res: usize,
    /// Dimension of every control sample
    pub control_dim: usize,
    /// Dimension of every state
    pub state_dim: usize,
    /// Scales the maximum search depth
    pub depth_scale: f64,
    /// Upper bound on the duration of one expansion [s]
    pub dt_max: f64,
    /// Maximum number of expansions
    pub max_iter: usize,
    /// Scales the duration of one expansion
    pub time_scale: f64,
    /// Scales the width of a dominance cell
    pub partition_scale: f64,
    /// Initial state
    pub x0: StateVector,
    /// Stopping rule for goal detection
    pub goal_policy: GoalPolicy,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            res: 21,
            control_dim: 2,
            state_dim: 3,
            depth_scale: 100.0,
            dt_max: 5.0,
            max_iter: 50_000,
            time_scale: 20.0,
            partition_scale: 60.0,
            x0: StateVector::from_vec(vec![0.0, 0.0, FRAC_PI_2]),
            goal_policy: GoalPolicy::FirstDetected,
        }
    }
}

impl Parameters {
    pub fn with_res(mut self, res: usize) -> Self {
        self.res = res;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_partition_scale(mut self, partition_scale: f64) -> Self {
        self.partition_scale = partition_scale;
        self
    }

    pub fn with_depth_scale(mut self, depth_scale: f64) -> Self {
        self.depth_scale = depth_scale;
        self
    }

    pub fn with_dt_max(mut self, dt_max: f64) -> Self {
        self.dt_max = dt_max;
        self
    }

    /// Set the initial state; its length must match `state_dim`
    pub fn with_x0(mut self, x0: StateVector) -> Self {
        self.x0 = x0;
        self
    }

    pub fn with_state_dim(mut self, state_dim: usize) -> Self {
        self.state_dim = state_dim;
        self
    }

    pub fn with_control_dim(mut self, control_dim: usize) -> Self {
        self.control_dim = control_dim;
        self
    }

    pub fn with_goal_policy(mut self, goal_policy: GoalPolicy) -> Self {
        self.goal_policy = goal_policy;
        self
    }

    /// Reject inconsistent or degenerate settings
    pub fn validate(&self) -> GlcResult<()> {
        if self.res == 0 {
            return Err(GlcError::InvalidParameter("res must be at least 1".to_string()));
        }
        if self.state_dim == 0 || self.control_dim == 0 {
            return Err(GlcError::InvalidParameter(format!(
                "state_dim ({}) and control_dim ({}) must be positive",
                self.state_dim, self.control_dim
            )));
        }
        check_dimension("x0", self.state_dim, &self.x0)?;
        if !is_finite(&self.x0) {
            return Err(GlcError::InvalidParameter("x0 must be finite".to_string()));
        }
        let positive = [
            ("dt_max", self.dt_max),
            ("time_scale", self.time_scale),
            ("partition_scale", self.partition_scale),
            ("depth_scale", self.depth_scale),
        ];
        for (name, value) in positive.iter() {
            if !(value.is_finite() && *value > 0.0) {
                return Err(GlcError::InvalidParameter(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Duration of one expansion: `min(dt_max, time_scale / res)`
    pub fn expand_time_step(&self) -> f64 {
        (self.time_scale / self.res as f64).min(self.dt_max)
    }

    /// Depth at which nodes stop being expanded
    pub fn depth_limit(&self) -> usize {
        let r = self.res as f64;
        (self.depth_scale * r * r.ln().floor().max(1.0)).ceil() as usize
    }

    /// Number of dominance cells per unit of state for a model with Lipschitz constant `lipschitz`
    pub fn partition_density(&self, lipschitz: f64) -> f64 {
        let r = self.res as f64;
        let growth = if lipschitz > 0.0 {
            r.powf(1.0 + lipschitz)
        } else {
            r * r.ln().powi(2).max(1.0)
        };
        growth / self.partition_scale
    }
}
