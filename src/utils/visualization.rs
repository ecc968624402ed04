//! Visualization utilities for rust_glc
//!
//! Plots planner results with gnuplot. Layers are collected first and drawn
//! into a single set of axes when the figure is shown or saved.

use std::f64::consts::PI;

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};
use nalgebra::Point2;

use crate::common::{GlcError, GlcResult};
use crate::path_planning::glc::{Disk, InterpolatingPolynomial, Planner, SphericalGoal};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const GRAY: &str = "#808080";

    pub const OBSTACLE: &str = BLACK;
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const TRAJECTORY: &str = RED;
    pub const LATTICE: &str = GRAY;
}

/// Style for line layers
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::TRAJECTORY, "Trajectory")
    }
}

/// Style for point layers
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

#[derive(Debug, Clone)]
enum Layer {
    Lines {
        x: Vec<f64>,
        y: Vec<f64>,
        style: PathStyle,
    },
    Points {
        x: Vec<f64>,
        y: Vec<f64>,
        style: PointStyle,
    },
}

/// Closed polygon approximating a circle, `segments + 1` vertices
pub fn circle_outline(center: Point2<f64>, radius: f64, segments: usize) -> (Vec<f64>, Vec<f64>) {
    (0..=segments)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / segments.max(1) as f64;
            (center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .unzip()
}

/// Planar view of a GLC query; state coordinates 0 and 1 are plotted as x and y
pub struct Visualizer {
    layers: Vec<Layer>,
    title: String,
    x_label: String,
    y_label: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            title: String::new(),
            x_label: "X [m]".to_string(),
            y_label: "Y [m]".to_string(),
            x_range: None,
            y_range: None,
            aspect_ratio: Some(1.0),
        }
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Set aspect ratio (None for auto)
    pub fn set_aspect_ratio(&mut self, ratio: Option<f64>) -> &mut Self {
        self.aspect_ratio = ratio;
        self
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Plot a trajectory from `samples + 1` evenly spaced points
    pub fn plot_trajectory(
        &mut self,
        trajectory: &InterpolatingPolynomial,
        samples: usize,
        style: &PathStyle,
    ) -> GlcResult<&mut Self> {
        if trajectory.dimension() < 2 {
            return Err(GlcError::VisualizationError(format!(
                "cannot plot a {}-dimensional trajectory in the plane",
                trajectory.dimension()
            )));
        }
        let (x, y): (Vec<f64>, Vec<f64>) = trajectory
            .sample(samples)
            .into_iter()
            .map(|(_, state)| (state[0], state[1]))
            .unzip();
        self.layers.push(Layer::Lines {
            x,
            y,
            style: style.clone(),
        });
        Ok(self)
    }

    /// Plot the node kept in every labelled partition cell
    pub fn plot_lattice_nodes(&mut self, planner: &Planner<'_>) -> &mut Self {
        let (x, y): (Vec<f64>, Vec<f64>) = planner
            .dominance_map()
            .labels()
            .into_iter()
            .filter_map(|(_, label)| planner.node(label.node))
            .filter(|node| node.state.len() >= 2)
            .map(|node| (node.state[0], node.state[1]))
            .unzip();
        self.layers.push(Layer::Points {
            x,
            y,
            style: PointStyle::new(colors::LATTICE, "Lattice nodes")
                .with_size(0.3)
                .with_symbol('.'),
        });
        self
    }

    pub fn plot_disks(&mut self, disks: &[Disk]) -> &mut Self {
        for (i, disk) in disks.iter().enumerate() {
            let (x, y) = circle_outline(disk.center, disk.radius, 64);
            let caption = if i == 0 { "Obstacles" } else { "" };
            self.layers.push(Layer::Lines {
                x,
                y,
                style: PathStyle::new(colors::OBSTACLE, caption),
            });
        }
        self
    }

    pub fn plot_point(&mut self, point: Point2<f64>, style: &PointStyle) -> &mut Self {
        self.layers.push(Layer::Points {
            x: vec![point.x],
            y: vec![point.y],
            style: style.clone(),
        });
        self
    }

    pub fn plot_start(&mut self, point: Point2<f64>) -> &mut Self {
        self.plot_point(point, &PointStyle::new(colors::START, "Start").with_size(1.5))
    }

    /// Plot the goal disk outline
    pub fn plot_goal_region(&mut self, goal: &SphericalGoal) -> &mut Self {
        let (x, y) = circle_outline(goal.center(), goal.radius(), 32);
        self.layers.push(Layer::Lines {
            x,
            y,
            style: PathStyle::new(colors::GOAL, "Goal"),
        });
        self
    }

    /// Finalize and show the plot
    pub fn show(&self) -> GlcResult<()> {
        let mut figure = self.render();
        figure
            .show()
            .map(|_| ())
            .map_err(|e| GlcError::VisualizationError(e.to_string()))
    }

    pub fn save_png(&self, path: &str, width: u32, height: u32) -> GlcResult<()> {
        let mut figure = self.render();
        figure
            .save_to_png(path, width, height)
            .map_err(|e| GlcError::VisualizationError(e.to_string()))
    }

    pub fn save_svg(&self, path: &str, width: u32, height: u32) -> GlcResult<()> {
        let mut figure = self.render();
        figure
            .save_to_svg(path, width, height)
            .map_err(|e| GlcError::VisualizationError(e.to_string()))
    }

    fn render(&self) -> Figure {
        let mut figure = Figure::new();
        let axes = figure.axes2d();

        for layer in &self.layers {
            match layer {
                Layer::Lines { x, y, style } => {
                    axes.lines(
                        x,
                        y,
                        &[
                            Caption(&style.caption),
                            Color(&style.color),
                            LineWidth(style.line_width),
                        ],
                    );
                }
                Layer::Points { x, y, style } => {
                    axes.points(
                        x,
                        y,
                        &[
                            Caption(&style.caption),
                            Color(&style.color),
                            PointSymbol(style.symbol),
                            PointSize(style.size),
                        ],
                    );
                }
            }
        }

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);
        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
        figure
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::StateVector;

    #[test]
    fn test_visualizer_creation() {
        let vis = Visualizer::new();
        assert!(vis.aspect_ratio.is_some());
        assert_eq!(vis.layer_count(), 0);
    }

    #[test]
    fn test_path_style() {
        let style = PathStyle::new(colors::RED, "Test Path").with_line_width(3.0);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.color, colors::RED);
    }

    #[test]
    fn test_circle_outline_is_closed() {
        let (x, y) = circle_outline(Point2::new(1.0, -2.0), 0.5, 16);
        assert_eq!(x.len(), 17);
        assert!((x[0] - x[16]).abs() < 1e-12);
        assert!((y[0] - y[16]).abs() < 1e-12);
        for (px, py) in x.iter().zip(y.iter()) {
            assert!(((px - 1.0).hypot(py + 2.0) - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_layers_accumulate() {
        let coefficients = vec![vec![
            StateVector::from_vec(vec![0.0, 0.0, 0.0]),
            StateVector::from_vec(vec![1.0, 1.0, 0.0]),
        ]];
        let trajectory = InterpolatingPolynomial::new(coefficients, 1.0, 0.0).unwrap();

        let mut vis = Visualizer::new();
        vis.plot_trajectory(&trajectory, 10, &PathStyle::default())
            .unwrap()
            .plot_start(Point2::new(0.0, 0.0));
        vis.plot_disks(&[Disk::new(3.0, 2.0, 2.0), Disk::new(6.0, 8.0, 2.0)]);
        assert_eq!(vis.layer_count(), 4);
    }

    #[test]
    fn test_rejects_one_dimensional_trajectory() {
        let coefficients = vec![vec![StateVector::from_vec(vec![0.0])]];
        let trajectory = InterpolatingPolynomial::new(coefficients, 1.0, 0.0).unwrap();
        let mut vis = Visualizer::new();
        assert!(vis
            .plot_trajectory(&trajectory, 4, &PathStyle::default())
            .is_err());
    }
}
