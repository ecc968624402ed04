//! Generalized Label Correcting (GLC) Planner Module
//!
//! Resolution-complete kinodynamic motion planning. The planner grows a
//! tree of trajectory segments by integrating a finite set of control
//! samples, and prunes any segment whose endpoint falls into a partition
//! cell that already holds a cheaper node.
//!
//! # Components
//!
//! - `parameters`: resolution, horizon and partition settings
//! - `interpolating_polynomial`: piecewise polynomial trajectories
//! - `numerical_integration`: explicit midpoint integrator producing splines
//! - `inputs`: finite control sample sets
//! - `node` / `equivalence_class`: search tree arena and dominance labels
//! - `planner`: best-first search loop
//! - `nonholonomic_car`: a complete reference problem
//!
//! # Example
//!
//! ```no_run
//! use nalgebra::Point2;
//! use rust_glc::path_planning::glc::{
//!     car_model, ArcLength, CarControlInputs, DiskObstacles, EuclideanHeuristic, Parameters,
//!     Planner, SphericalGoal,
//! };
//!
//! let params = Parameters::default();
//! let goal_center = Point2::new(10.0, 10.0);
//! let controls = CarControlInputs::new(params.res);
//! let model = car_model(params.dt_max);
//! let goal = SphericalGoal::new(0.25, goal_center, 10);
//! let heuristic = EuclideanHeuristic::new(goal_center, 0.5);
//! let cost = ArcLength::new(4);
//! let obstacles = DiskObstacles::two_disks(10);
//!
//! let mut planner =
//!     Planner::new(&obstacles, &goal, &model, &heuristic, &cost, params, &controls).unwrap();
//! let out = planner.plan();
//! if out.solution_found {
//!     let path = planner.path_to_root(true).unwrap();
//!     let trajectory = planner.recover_trajectory(&path).unwrap();
//!     println!("{}", trajectory);
//! }
//! ```

pub mod equivalence_class;
pub mod inputs;
pub mod interpolating_polynomial;
pub mod node;
pub mod nonholonomic_car;
pub mod numerical_integration;
pub mod parameters;
pub mod planner;

pub use equivalence_class::{CellLabel, DominanceMap, LatticeCell};
pub use inputs::ControlInputSet;
pub use interpolating_polynomial::InterpolatingPolynomial;
pub use node::{Node, NodeId, NodeStore};
pub use nonholonomic_car::{
    car_model, ArcLength, CarControlInputs, CarNonholonomicConstraint, Disk, DiskObstacles,
    EuclideanHeuristic, SphericalGoal,
};
pub use numerical_integration::{step_count, Flow, RungeKuttaTwo};
pub use parameters::{GoalPolicy, Parameters};
pub use planner::{Planner, PlannerOutput, PlannerStatus, SearchStatistics};
