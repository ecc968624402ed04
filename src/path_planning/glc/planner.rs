//! Generalized label correcting (GLC) search
//!
//! Best-first search over trajectories generated by integrating a finite set
//! of control samples. New nodes are pruned when a cheaper node already
//! labels their partition cell, which keeps the search tree finite while
//! the solution stays optimal up to the discretization.
//!
//! Reference: B. Paden and E. Frazzoli (2016),
//! "A Generalized Label Correcting Method for Optimal Kinodynamic Motion Planning"

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, info};
use ordered_float::OrderedFloat;

use crate::common::{
    check_dimension, CostFunction, DynamicalSystem, GlcError, GlcResult, GoalRegion, Heuristic,
    Inputs, Obstacles, StateVector,
};

use super::equivalence_class::DominanceMap;
use super::interpolating_polynomial::InterpolatingPolynomial;
use super::node::{Node, NodeId, NodeStore};
use super::parameters::{GoalPolicy, Parameters};

/// Iterations between progress log lines
const PROGRESS_INTERVAL: usize = 1000;

/// Lifecycle of a planning query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerStatus {
    Ready,
    Running,
    /// A goal-reaching node was found
    Solved,
    /// The frontier ran empty
    Exhausted,
    /// `max_iter` expansions were spent
    IterationLimit,
}

impl PlannerStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PlannerStatus::Solved | PlannerStatus::Exhausted | PlannerStatus::IterationLimit
        )
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Nodes added to the tree, root excluded
    pub nodes_created: usize,
    /// Candidates rejected by the feasibility check
    pub infeasible: usize,
    /// Candidates rejected by a cheaper cell label
    pub dominated: usize,
    /// Popped nodes not expanded because they sit at the depth limit
    pub depth_limited: usize,
}

/// Result of [`Planner::plan`]
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerOutput {
    pub solution_found: bool,
    pub goal_node: Option<NodeId>,
    pub iterations_run: usize,
    pub status: PlannerStatus,
    /// Cost of the goal node, infinite without a solution
    pub cost: f64,
    /// First sampled time at which the solution is inside the goal
    pub goal_time: Option<f64>,
    pub statistics: SearchStatistics,
}

impl Default for PlannerOutput {
    fn default() -> Self {
        Self {
            solution_found: false,
            goal_node: None,
            iterations_run: 0,
            status: PlannerStatus::Ready,
            cost: f64::INFINITY,
            goal_time: None,
            statistics: SearchStatistics::default(),
        }
    }
}

/// Min-heap entry: merit, then insertion order
type FrontierEntry = Reverse<(OrderedFloat<f64>, u64, NodeId)>;

/// GLC planner over borrowed problem collaborators
pub struct Planner<'a> {
    obstacles: &'a dyn Obstacles,
    goal: &'a dyn GoalRegion,
    dynamics: &'a dyn DynamicalSystem,
    heuristic: &'a dyn Heuristic,
    cost_function: &'a dyn CostFunction,
    params: Parameters,
    controls: Vec<StateVector>,
    expand_time_step: f64,
    depth_limit: usize,

    nodes: NodeStore,
    frontier: BinaryHeap<FrontierEntry>,
    domain_labels: DominanceMap,
    insertion_counter: u64,

    iterations: usize,
    status: PlannerStatus,
    goal_node: Option<NodeId>,
    statistics: SearchStatistics,
}

impl<'a> Planner<'a> {
    /// Validate the query and seed the search with the root node
    pub fn new(
        obstacles: &'a dyn Obstacles,
        goal: &'a dyn GoalRegion,
        dynamics: &'a dyn DynamicalSystem,
        heuristic: &'a dyn Heuristic,
        cost_function: &'a dyn CostFunction,
        params: Parameters,
        controls: &dyn Inputs,
    ) -> GlcResult<Self> {
        params.validate()?;
        if controls.sample_count() == 0 {
            return Err(GlcError::InvalidParameter(
                "control input set is empty".to_string(),
            ));
        }
        for (i, u) in controls.samples().iter().enumerate() {
            check_dimension(&format!("control sample {}", i), params.control_dim, u)?;
        }

        let lipschitz = dynamics.lipschitz_constant();
        if !(lipschitz.is_finite() && lipschitz >= 0.0) {
            return Err(GlcError::InvalidParameter(format!(
                "Lipschitz constant must be finite and non-negative, got {}",
                lipschitz
            )));
        }
        let density = params.partition_density(lipschitz);
        let expand_time_step = params.expand_time_step();

        let trial =
            dynamics.integrate(&params.x0, &controls.samples()[0], 0.0, expand_time_step);
        check_dimension("integrated state", params.state_dim, &trial.final_state())?;
        let depth_limit = params.depth_limit();

        let mut nodes = NodeStore::new();
        let mut domain_labels = DominanceMap::new(density);
        let mut frontier = BinaryHeap::new();

        let root = Node::root(params.x0.clone(), heuristic.cost_to_go(&params.x0));
        let root_cell = domain_labels.cell_of(&root.state);
        let root_merit = root.merit();
        let root_id = nodes.push(root);
        domain_labels.record(root_cell, 0.0, root_id);
        frontier.push(Reverse((OrderedFloat(root_merit), 0, root_id)));

        debug!(
            "GLC planner ready: {} controls, step {:.4} s, depth limit {}, {:.3} cells per unit",
            controls.sample_count(),
            expand_time_step,
            depth_limit,
            density
        );

        Ok(Self {
            obstacles,
            goal,
            dynamics,
            heuristic,
            cost_function,
            params,
            controls: controls.samples().to_vec(),
            expand_time_step,
            depth_limit,
            nodes,
            frontier,
            domain_labels,
            insertion_counter: 1,
            iterations: 0,
            status: PlannerStatus::Ready,
            goal_node: None,
            statistics: SearchStatistics::default(),
        })
    }

    /// Run the search to a terminal state.
    ///
    /// Calling again after termination returns the same output without
    /// further work.
    pub fn plan(&mut self) -> PlannerOutput {
        if !self.status.is_terminal() {
            self.status = PlannerStatus::Running;
            while self.status == PlannerStatus::Running {
                self.iterate();
            }
        }
        self.output()
    }

    /// [`plan`](Self::plan) writing into a caller-owned output
    pub fn plan_into(&mut self, out: &mut PlannerOutput) {
        *out = self.plan();
    }

    /// One pass of the main loop
    fn iterate(&mut self) {
        if self.frontier.is_empty() {
            self.finish(PlannerStatus::Exhausted);
            return;
        }
        if self.iterations >= self.params.max_iter {
            self.finish(PlannerStatus::IterationLimit);
            return;
        }
        let current = match self.frontier.pop() {
            Some(Reverse((_, _, id))) => id,
            None => {
                self.finish(PlannerStatus::Exhausted);
                return;
            }
        };

        let popped_goal = self.nodes[current].reaches_goal();
        if popped_goal && self.params.goal_policy == GoalPolicy::GoalPopped {
            self.goal_node = Some(current);
            self.finish(PlannerStatus::Solved);
            return;
        }

        let found = if self.nodes[current].depth >= self.depth_limit {
            self.statistics.depth_limited += 1;
            false
        } else {
            self.expand(current)
        };
        self.iterations += 1;

        if found {
            self.finish(PlannerStatus::Solved);
        } else if self.iterations % PROGRESS_INTERVAL == 0 {
            debug!(
                "iteration {}: frontier {}, nodes {}, labelled cells {}",
                self.iterations,
                self.frontier.len(),
                self.nodes.len(),
                self.domain_labels.len()
            );
        }
    }

    /// Generate the children of `current`; true once a goal-reaching child ends the search
    fn expand(&mut self, current: NodeId) -> bool {
        let (state, cost, depth, time) = {
            let node = &self.nodes[current];
            (node.state.clone(), node.cost, node.depth, node.time)
        };
        let dt = self.expand_time_step;

        for (i, u) in self.controls.iter().enumerate() {
            let trajectory = self.dynamics.integrate(&state, u, time, dt);
            if !self.obstacles.collision_free(&trajectory) {
                self.statistics.infeasible += 1;
                continue;
            }

            let control = self.dynamics.control_signal(u, time, dt);
            let arc_cost = self.cost_function.cost(
                &trajectory,
                &control,
                trajectory.initial_time(),
                trajectory.final_time(),
            );
            debug_assert!(arc_cost >= 0.0, "negative running cost {}", arc_cost);
            let new_cost = cost + arc_cost;

            let end = trajectory.final_state();
            let cell = self.domain_labels.cell_of(&end);
            // the child takes the next arena slot
            let id = NodeId(self.nodes.len());
            if !self.domain_labels.try_relabel(cell, new_cost, id) {
                self.statistics.dominated += 1;
                continue;
            }

            let heuristic = self.heuristic.cost_to_go(&end);
            let goal_time = self.goal.in_goal(&trajectory);
            let child = Node {
                state: end,
                cost: new_cost,
                heuristic,
                depth: depth + 1,
                time: trajectory.final_time(),
                control_index: Some(i),
                parent: Some(current),
                trajectory: Some(trajectory),
                goal_time,
            };
            let merit = child.merit();
            let pushed = self.nodes.push(child);
            debug_assert_eq!(pushed, id);
            self.frontier
                .push(Reverse((OrderedFloat(merit), self.insertion_counter, id)));
            self.insertion_counter += 1;
            self.statistics.nodes_created += 1;

            if goal_time.is_some() && self.params.goal_policy == GoalPolicy::FirstDetected {
                self.goal_node = Some(id);
                return true;
            }
        }
        false
    }

    fn finish(&mut self, status: PlannerStatus) {
        self.status = status;
        match self.goal_node.map(|id| &self.nodes[id]) {
            Some(goal) if status == PlannerStatus::Solved => info!(
                "GLC found a solution after {} iterations: cost {:.4}, depth {}, {} nodes",
                self.iterations,
                goal.cost,
                goal.depth,
                self.nodes.len()
            ),
            _ => info!(
                "GLC stopped without a solution ({:?}) after {} iterations, {} nodes",
                status,
                self.iterations,
                self.nodes.len()
            ),
        }
    }

    /// Snapshot of the current search outcome
    pub fn output(&self) -> PlannerOutput {
        let goal = self.goal_node.map(|id| &self.nodes[id]);
        PlannerOutput {
            solution_found: self.status == PlannerStatus::Solved,
            goal_node: self.goal_node,
            iterations_run: self.iterations,
            status: self.status,
            cost: goal.map_or(f64::INFINITY, |n| n.cost),
            goal_time: goal.and_then(|n| n.goal_time),
            statistics: self.statistics,
        }
    }

    pub fn status(&self) -> PlannerStatus {
        self.status
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &NodeStore {
        &self.nodes
    }

    /// Current best label of every visited partition cell
    pub fn dominance_map(&self) -> &DominanceMap {
        &self.domain_labels
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn solution_cost(&self) -> Option<f64> {
        self.goal_node.map(|id| self.nodes[id].cost)
    }

    /// Ancestor chain of the solution node; root first when `root_first` is set
    pub fn path_to_root(&self, root_first: bool) -> GlcResult<Vec<NodeId>> {
        match self.goal_node {
            Some(id) => self.path_to_node(id, root_first),
            None => Err(GlcError::PlanningError(
                "no solution node to trace back".to_string(),
            )),
        }
    }

    /// Ancestor chain of an arbitrary node
    pub fn path_to_node(&self, id: NodeId, root_first: bool) -> GlcResult<Vec<NodeId>> {
        if self.nodes.get(id).is_none() {
            return Err(GlcError::PlanningError(format!("unknown node {:?}", id)));
        }
        Ok(self.nodes.path_to_root(id, root_first))
    }

    /// Stitch the incoming segments along a root-first `path` into one trajectory
    pub fn recover_trajectory(&self, path: &[NodeId]) -> GlcResult<InterpolatingPolynomial> {
        let mut segments = Vec::with_capacity(path.len());
        for &id in path {
            let node = self
                .nodes
                .get(id)
                .ok_or_else(|| GlcError::PlanningError(format!("unknown node {:?}", id)))?;
            if let Some(trajectory) = &node.trajectory {
                segments.push(trajectory);
            }
        }
        if segments.is_empty() {
            return Err(GlcError::PlanningError(
                "path carries no trajectory segments".to_string(),
            ));
        }
        InterpolatingPolynomial::concatenate(&segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Inputs;
    use crate::path_planning::glc::inputs::ControlInputSet;
    use crate::path_planning::glc::nonholonomic_car::{
        car_model, ArcLength, CarControlInputs, CarNonholonomicConstraint, Disk, DiskObstacles,
        EuclideanHeuristic, SphericalGoal,
    };
    use crate::path_planning::glc::numerical_integration::RungeKuttaTwo;
    use nalgebra::Point2;
    use std::f64::consts::FRAC_PI_4;

    fn v(values: &[f64]) -> StateVector {
        StateVector::from_vec(values.to_vec())
    }

    /// Car driving to a disk goal among disk obstacles
    struct CarProblem {
        controls: CarControlInputs,
        model: RungeKuttaTwo<CarNonholonomicConstraint>,
        goal: SphericalGoal,
        heuristic: EuclideanHeuristic,
        cost: ArcLength,
        obstacles: DiskObstacles,
        params: Parameters,
    }

    impl CarProblem {
        fn new(params: Parameters, goal_center: Point2<f64>, obstacles: DiskObstacles) -> Self {
            let goal_radius_sqr = 0.25;
            Self {
                controls: CarControlInputs::new(params.res),
                model: car_model(params.dt_max),
                goal: SphericalGoal::new(goal_radius_sqr, goal_center, 10),
                heuristic: EuclideanHeuristic::new(goal_center, goal_radius_sqr.sqrt()),
                cost: ArcLength::new(4),
                obstacles,
                params,
            }
        }

        fn planner(&self) -> Planner<'_> {
            Planner::new(
                &self.obstacles,
                &self.goal,
                &self.model,
                &self.heuristic,
                &self.cost,
                self.params.clone(),
                &self.controls,
            )
            .unwrap()
        }
    }

    fn open_field(x0: StateVector) -> CarProblem {
        CarProblem::new(
            Parameters::default().with_x0(x0),
            Point2::new(10.0, 10.0),
            DiskObstacles::empty(),
        )
    }

    #[test]
    fn test_obstacle_free_solution_near_straight_line_cost() {
        let problem = open_field(v(&[0.0, 0.0, 0.0]));
        let mut planner = problem.planner();
        let out = planner.plan();

        assert!(out.solution_found);
        assert_eq!(out.status, PlannerStatus::Solved);
        let lower = 200.0f64.sqrt() - 0.5;
        assert!(out.cost >= lower - 1e-9, "cost {} below {}", out.cost, lower);
        assert!(out.cost <= lower + 3.0, "cost {} too far above {}", out.cost, lower);
        assert_eq!(planner.solution_cost(), Some(out.cost));
        assert!(out.goal_time.is_some());
    }

    #[test]
    fn test_iteration_limit() {
        let params = Parameters::default()
            .with_x0(v(&[0.0, 0.0, 0.0]))
            .with_max_iter(1);
        let problem = CarProblem::new(params, Point2::new(100.0, 100.0), DiskObstacles::empty());
        let mut planner = problem.planner();
        let out = planner.plan();

        assert!(!out.solution_found);
        assert_eq!(out.iterations_run, 1);
        assert_eq!(out.status, PlannerStatus::IterationLimit);
        assert!(out.goal_node.is_none());
        assert!(out.cost.is_infinite());
        assert!(planner.frontier_len() > 0);
        assert!(planner.path_to_root(true).is_err());
    }

    #[test]
    fn test_exhausted_when_every_expansion_collides() {
        let params = Parameters::default().with_x0(v(&[0.0, 0.0, 0.0]));
        let walls = DiskObstacles::new(vec![Disk::new(0.0, 0.0, 100.0)], 10);
        let problem = CarProblem::new(params, Point2::new(10.0, 10.0), walls);
        let mut planner = problem.planner();
        let out = planner.plan();

        assert!(!out.solution_found);
        assert_eq!(out.status, PlannerStatus::Exhausted);
        assert_eq!(out.iterations_run, 1);
        assert_eq!(out.statistics.infeasible, 21);
        assert_eq!(out.statistics.nodes_created, 0);
    }

    #[test]
    fn test_exhausted_reported_on_the_last_allowed_iteration() {
        let params = Parameters::default()
            .with_x0(v(&[0.0, 0.0, 0.0]))
            .with_max_iter(1);
        let walls = DiskObstacles::new(vec![Disk::new(0.0, 0.0, 100.0)], 10);
        let problem = CarProblem::new(params, Point2::new(10.0, 10.0), walls);
        let out = problem.planner().plan();

        assert_eq!(out.status, PlannerStatus::Exhausted);
        assert_eq!(out.iterations_run, 1);
        assert_eq!(out.statistics.nodes_created, 0);
    }

    #[test]
    fn test_zero_iterations_allowed() {
        let params = Parameters::default().with_max_iter(0);
        let problem = CarProblem::new(params, Point2::new(10.0, 10.0), DiskObstacles::empty());
        let out = problem.planner().plan();
        assert_eq!(out.status, PlannerStatus::IterationLimit);
        assert_eq!(out.iterations_run, 0);
    }

    #[test]
    fn test_blocked_straight_line_costs_more() {
        let params = Parameters::default().with_x0(v(&[0.0, 0.0, FRAC_PI_4]));
        let goal = Point2::new(10.0, 10.0);

        let open = CarProblem::new(params.clone(), goal, DiskObstacles::empty());
        let open_out = open.planner().plan();
        assert!(open_out.solution_found);

        let blocked = CarProblem::new(
            params,
            goal,
            DiskObstacles::new(vec![Disk::new(5.0, 5.0, 2.0)], 10),
        );
        let mut planner = blocked.planner();
        let out = planner.plan();

        assert!(out.solution_found);
        assert!(
            out.cost > open_out.cost,
            "detour {} not dearer than {}",
            out.cost,
            open_out.cost
        );
        for id in planner.path_to_root(true).unwrap() {
            if let Some(segment) = &planner.node(id).unwrap().trajectory {
                assert!(blocked.obstacles.collision_free(segment));
            }
        }
    }

    #[test]
    fn test_solution_path_invariants() {
        let params = Parameters::default();
        let problem = CarProblem::new(params, Point2::new(10.0, 10.0), DiskObstacles::two_disks(10));
        let mut planner = problem.planner();
        let out = planner.plan();
        assert!(out.solution_found);

        let path = planner.path_to_root(true).unwrap();
        assert_eq!(path[0], planner.root());
        assert_eq!(*path.last().unwrap(), out.goal_node.unwrap());

        for pair in path.windows(2) {
            let parent = planner.node(pair[0]).unwrap();
            let child = planner.node(pair[1]).unwrap();
            assert_eq!(child.parent, Some(pair[0]));
            assert!(child.cost >= parent.cost);
            assert_eq!(child.depth, parent.depth + 1);
            let segment = child.trajectory.as_ref().unwrap();
            assert!(problem.obstacles.collision_free(segment));
        }

        let goal_first = planner.path_to_root(false).unwrap();
        assert_eq!(goal_first.first(), path.last());
        assert_eq!(goal_first.len(), path.len());
    }

    #[test]
    fn test_recovered_trajectory_spans_the_path() {
        let problem = open_field(v(&[0.0, 0.0, 0.0]));
        let mut planner = problem.planner();
        let out = planner.plan();
        assert!(out.solution_found);

        let path = planner.path_to_root(true).unwrap();
        let solution = planner.recover_trajectory(&path).unwrap();
        let goal = planner.node(out.goal_node.unwrap()).unwrap();

        assert!(solution.initial_time().abs() < 1e-12);
        assert!((solution.final_time() - goal.time).abs() < 1e-9);
        assert!((solution.initial_state() - &problem.params.x0).norm() < 1e-12);
        assert!((solution.final_state() - &goal.state).norm() < 1e-9);
        // every node state lies on the stitched curve
        for &id in &path {
            let node = planner.node(id).unwrap();
            assert!((solution.at(node.time) - &node.state).norm() < 1e-6);
        }

        let reversed = planner.path_to_root(false).unwrap();
        if reversed.len() > 2 {
            assert!(planner.recover_trajectory(&reversed).is_err());
        }
        assert!(planner.recover_trajectory(&[planner.root()]).is_err());
    }

    #[test]
    fn test_deterministic_runs() {
        let run = || {
            let problem = CarProblem::new(
                Parameters::default(),
                Point2::new(10.0, 10.0),
                DiskObstacles::two_disks(10),
            );
            let mut planner = problem.planner();
            let out = planner.plan();
            (out, planner.nodes().len())
        };
        let (first, first_nodes) = run();
        let (second, second_nodes) = run();
        assert_eq!(first, second);
        assert_eq!(first_nodes, second_nodes);
    }

    #[test]
    fn test_goal_policies() {
        let first = open_field(v(&[0.0, 0.0, 0.0]));
        let mut first_planner = first.planner();
        let first_out = first_planner.plan();
        assert!(first_out.solution_found);
        let first_goal = first_planner.node(first_out.goal_node.unwrap()).unwrap();

        let mut popped = open_field(v(&[0.0, 0.0, 0.0]));
        popped.params = popped.params.clone().with_goal_policy(GoalPolicy::GoalPopped);
        let mut planner = popped.planner();
        let popped_out = planner.plan();

        assert!(popped_out.solution_found);
        assert!(popped_out.iterations_run >= first_out.iterations_run);
        let goal = planner.node(popped_out.goal_node.unwrap()).unwrap();
        assert!(goal.reaches_goal());
        // the first detected goal node was still queued when the winner was popped
        assert!(goal.merit() <= first_goal.merit() + 1e-9);
    }

    #[test]
    fn test_plan_is_idempotent_after_termination() {
        let problem = open_field(v(&[0.0, 0.0, 0.0]));
        let mut planner = problem.planner();
        assert_eq!(planner.status(), PlannerStatus::Ready);
        let out = planner.plan();
        let nodes = planner.nodes().len();

        let mut again = PlannerOutput::default();
        planner.plan_into(&mut again);
        assert_eq!(out, again);
        assert_eq!(planner.nodes().len(), nodes);
    }

    #[test]
    fn test_dominance_labels_track_cheapest_nodes() {
        let problem = open_field(v(&[0.0, 0.0, 0.0]));
        let mut planner = problem.planner();
        let out = planner.plan();
        assert!(out.statistics.dominated > 0);

        let labels = planner.dominance_map();
        assert!(!labels.is_empty());
        // at most one label per stored node
        assert!(labels.len() <= out.statistics.nodes_created + 1);
        for (cell, label) in labels.labels() {
            let node = planner.node(label.node).unwrap();
            assert_eq!(&labels.cell_of(&node.state), cell);
            assert!((node.cost - label.cost).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rejects_control_dimension_mismatch() {
        let problem = open_field(v(&[0.0, 0.0, 0.0]));
        let controls = ControlInputSet::from_samples(1, vec![v(&[1.0])]).unwrap();
        let result = Planner::new(
            &problem.obstacles,
            &problem.goal,
            &problem.model,
            &problem.heuristic,
            &problem.cost,
            problem.params.clone(),
            &controls,
        );
        assert!(matches!(
            result.err(),
            Some(GlcError::DimensionMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_initial_state_mismatch_and_empty_controls() {
        let problem = open_field(v(&[0.0, 0.0, 0.0]));
        let mut params = problem.params.clone();
        params.x0 = v(&[0.0, 0.0]);
        let result = Planner::new(
            &problem.obstacles,
            &problem.goal,
            &problem.model,
            &problem.heuristic,
            &problem.cost,
            params,
            &problem.controls,
        );
        assert!(result.is_err());

        let empty = ControlInputSet::new(2);
        assert_eq!(empty.sample_count(), 0);
        let result = Planner::new(
            &problem.obstacles,
            &problem.goal,
            &problem.model,
            &problem.heuristic,
            &problem.cost,
            problem.params.clone(),
            &empty,
        );
        assert!(matches!(result.err(), Some(GlcError::InvalidParameter(_))));
    }

    /// Ignores the declared state dimension and always ends in the plane
    struct PlanarOnly;

    impl DynamicalSystem for PlanarOnly {
        fn integrate(
            &self,
            _x0: &StateVector,
            _u: &StateVector,
            t0: f64,
            dt: f64,
        ) -> InterpolatingPolynomial {
            InterpolatingPolynomial::constant(&StateVector::zeros(2), t0, dt, 1)
        }

        fn lipschitz_constant(&self) -> f64 {
            1.0
        }

        fn max_time_step(&self) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_rejects_initial_state_shorter_than_state_dim() {
        let problem = open_field(v(&[0.0, 0.0, 0.0]));
        let params = Parameters::default().with_x0(v(&[0.0, 0.0]));
        let result = Planner::new(
            &problem.obstacles,
            &problem.goal,
            &problem.model,
            &problem.heuristic,
            &problem.cost,
            params,
            &problem.controls,
        );
        assert!(matches!(
            result.err(),
            Some(GlcError::DimensionMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_dynamics_of_wrong_dimension() {
        let problem = open_field(v(&[0.0, 0.0, 0.0]));
        let result = Planner::new(
            &problem.obstacles,
            &problem.goal,
            &PlanarOnly,
            &problem.heuristic,
            &problem.cost,
            problem.params.clone(),
            &problem.controls,
        );
        assert!(matches!(
            result.err(),
            Some(GlcError::DimensionMismatch { expected: 3, actual: 2, .. })
        ));
    }
}
