//! rust_glc - Generalized Label Correcting kinodynamic motion planning
//!
//! The planner searches over trajectories produced by integrating a finite
//! set of control samples and prunes them through a state-space partition.
//! Problems plug in through the capability traits in [`common`].

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{CostFunction, DynamicalSystem, GoalRegion, Heuristic, Inputs, Obstacles};
pub use common::{GlcError, GlcResult, StateVector};
pub use path_planning::glc::{
    InterpolatingPolynomial, Parameters, Planner, PlannerOutput, PlannerStatus,
};
