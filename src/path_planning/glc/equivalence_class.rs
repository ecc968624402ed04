//! Dominance bookkeeping over a uniform partition of the state space
//!
//! States are bucketed into [`LatticeCell`]s of width `1 / density`. Each cell
//! keeps the cheapest node seen so far; a newcomer survives only if it is
//! strictly cheaper than that label.

use std::collections::HashMap;

use log::trace;

use crate::common::StateVector;

use super::node::NodeId;

/// Integer coordinates of a partition cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeCell(pub Vec<i64>);

impl LatticeCell {
    pub fn from_state(state: &StateVector, density: f64) -> Self {
        Self(state.iter().map(|x| (x * density).floor() as i64).collect())
    }

    pub fn coordinates(&self) -> &[i64] {
        &self.0
    }
}

/// Cheapest node recorded for a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLabel {
    pub cost: f64,
    pub node: NodeId,
}

/// Map from partition cell to its current label
#[derive(Debug, Clone)]
pub struct DominanceMap {
    density: f64,
    labels: HashMap<LatticeCell, CellLabel>,
}

impl DominanceMap {
    pub fn new(density: f64) -> Self {
        Self {
            density,
            labels: HashMap::new(),
        }
    }

    /// Cells per unit of state along every axis
    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn cell_of(&self, state: &StateVector) -> LatticeCell {
        LatticeCell::from_state(state, self.density)
    }

    /// True iff `cell` already holds a label with cost `<= cost`
    pub fn is_dominated(&self, cell: &LatticeCell, cost: f64) -> bool {
        self.labels
            .get(cell)
            .map_or(false, |label| label.cost <= cost)
    }

    /// Make `node` the label of `cell`, replacing any previous one
    pub fn record(&mut self, cell: LatticeCell, cost: f64, node: NodeId) {
        self.labels.insert(cell, CellLabel { cost, node });
    }

    /// Record `node` unless the cell is dominated; returns whether it was recorded
    pub fn try_relabel(&mut self, cell: LatticeCell, cost: f64, node: NodeId) -> bool {
        if self.is_dominated(&cell, cost) {
            trace!("cell {:?} dominates candidate with cost {:.4}", cell.0, cost);
            return false;
        }
        self.record(cell, cost, node);
        true
    }

    pub fn best(&self, cell: &LatticeCell) -> Option<&CellLabel> {
        self.labels.get(cell)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All labels ordered by node id
    pub fn labels(&self) -> Vec<(&LatticeCell, &CellLabel)> {
        let mut labels: Vec<_> = self.labels.iter().collect();
        labels.sort_by_key(|(_, label)| label.node);
        labels
    }
}
