// GLC planning for a unit-speed car around two disks

use nalgebra::Point2;

use rust_glc::path_planning::glc::{
    car_model, ArcLength, CarControlInputs, DiskObstacles, EuclideanHeuristic, Parameters,
    Planner, SphericalGoal,
};
use rust_glc::utils::{nodes_to_file, trajectory_to_file, PathStyle, Visualizer};
use rust_glc::GlcResult;

const GOAL_RADIUS_SQR: f64 = 0.25;
const CHECK_RESOLUTION: usize = 10;

fn main() -> GlcResult<()> {
    let params = Parameters::default();
    let goal_center = Point2::new(10.0, 10.0);

    let controls = CarControlInputs::new(params.res);
    let model = car_model(params.dt_max);
    let goal = SphericalGoal::new(GOAL_RADIUS_SQR, goal_center, CHECK_RESOLUTION);
    let heuristic = EuclideanHeuristic::new(goal_center, goal.radius());
    let cost = ArcLength::new(4);
    let obstacles = DiskObstacles::two_disks(CHECK_RESOLUTION);

    let mut planner = Planner::new(
        &obstacles,
        &goal,
        &model,
        &heuristic,
        &cost,
        params.clone(),
        &controls,
    )?;
    let out = planner.plan();

    println!("status: {:?}", out.status);
    println!("iterations: {}", out.iterations_run);
    println!(
        "nodes: {} created, {} infeasible, {} dominated",
        out.statistics.nodes_created, out.statistics.infeasible, out.statistics.dominated
    );
    if !out.solution_found {
        println!("no solution found");
        return Ok(());
    }
    println!("solution cost: {:.4}", out.cost);

    let path = planner.path_to_root(true)?;
    let solution = planner.recover_trajectory(&path)?;
    println!("{}", solution);

    trajectory_to_file("glc_trajectory.txt", &solution, 200)?;
    nodes_to_file("glc_nodes.txt", &planner)?;
    println!("wrote glc_trajectory.txt and glc_nodes.txt");

    let mut vis = Visualizer::new();
    vis.set_title("GLC nonholonomic car");
    vis.plot_lattice_nodes(&planner)
        .plot_disks(obstacles.disks())
        .plot_goal_region(&goal)
        .plot_start(Point2::new(params.x0[0], params.x0[1]));
    vis.plot_trajectory(&solution, 200, &PathStyle::default())?;
    if let Err(e) = vis.save_png("glc_nonholonomic_car.png", 800, 800) {
        println!("plot skipped: {}", e);
    }
    Ok(())
}
