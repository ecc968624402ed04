//! Utility modules for rust_glc

pub mod export;
pub mod visualization;

pub use export::{nodes_to_file, trajectory_to_file, write_nodes, write_trajectory};
pub use visualization::{circle_outline, colors, PathStyle, PointStyle, Visualizer};
