//! Plain-text dumps of planner results
//!
//! Both formats are whitespace separated with one record per line, ready
//! for gnuplot or numpy.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::common::{GlcError, GlcResult, StateVector};
use crate::path_planning::glc::{InterpolatingPolynomial, Planner};

fn write_row<W: Write>(writer: &mut W, first: f64, state: &StateVector) -> GlcResult<()> {
    write!(writer, "{}", first)?;
    for x in state.iter() {
        write!(writer, " {}", x)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Write `samples + 1` evenly spaced rows `t x0 x1 ...` of `trajectory`
pub fn write_trajectory<W: Write>(
    writer: &mut W,
    trajectory: &InterpolatingPolynomial,
    samples: usize,
) -> GlcResult<()> {
    if samples == 0 {
        return Err(GlcError::InvalidParameter(
            "trajectory export needs at least one sample interval".to_string(),
        ));
    }
    for (t, state) in trajectory.sample(samples) {
        write_row(writer, t, &state)?;
    }
    Ok(())
}

/// Write one row `cost x0 x1 ...` per labelled partition cell
pub fn write_nodes<W: Write>(writer: &mut W, planner: &Planner<'_>) -> GlcResult<()> {
    for (_, label) in planner.dominance_map().labels() {
        let node = planner.node(label.node).ok_or_else(|| {
            GlcError::PlanningError(format!("label points at unknown node {:?}", label.node))
        })?;
        write_row(writer, label.cost, &node.state)?;
    }
    Ok(())
}

pub fn trajectory_to_file<P: AsRef<Path>>(
    path: P,
    trajectory: &InterpolatingPolynomial,
    samples: usize,
) -> GlcResult<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_trajectory(&mut writer, trajectory, samples)?;
    writer.flush()?;
    debug!("wrote trajectory to {}", path.as_ref().display());
    Ok(())
}

pub fn nodes_to_file<P: AsRef<Path>>(path: P, planner: &Planner<'_>) -> GlcResult<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_nodes(&mut writer, planner)?;
    writer.flush()?;
    debug!(
        "wrote {} lattice nodes to {}",
        planner.dominance_map().len(),
        path.as_ref().display()
    );
    Ok(())
}
