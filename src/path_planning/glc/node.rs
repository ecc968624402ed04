//! Search nodes and the arena that owns them
//!
//! Nodes are stored in a [`NodeStore`] and addressed by [`NodeId`]. A node
//! refers to its parent by index only, so the search tree can be walked back
//! to the root without shared ownership.

use crate::common::StateVector;

use super::interpolating_polynomial::InterpolatingPolynomial;

/// Index of a node inside a [`NodeStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A point of the search lattice together with how it was reached
#[derive(Debug, Clone)]
pub struct Node {
    /// State at the end of the incoming segment
    pub state: StateVector,
    /// Accumulated cost from the root
    pub cost: f64,
    /// Heuristic cost-to-go from `state`
    pub heuristic: f64,
    /// Number of expansions between the root and this node
    pub depth: usize,
    /// Time at `state`
    pub time: f64,
    /// Control sample that generated the incoming segment
    pub control_index: Option<usize>,
    pub parent: Option<NodeId>,
    /// Trajectory from the parent's state to `state`; `None` for the root
    pub trajectory: Option<InterpolatingPolynomial>,
    /// First sampled time the incoming segment is inside the goal
    pub goal_time: Option<f64>,
}

impl Node {
    pub fn root(state: StateVector, heuristic: f64) -> Self {
        Self {
            state,
            cost: 0.0,
            heuristic,
            depth: 0,
            time: 0.0,
            control_index: None,
            parent: None,
            trajectory: None,
            goal_time: None,
        }
    }

    /// Estimated total cost `cost + heuristic`
    pub fn merit(&self) -> f64 {
        self.cost + self.heuristic
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn reaches_goal(&self) -> bool {
        self.goal_time.is_some()
    }
}

/// Owning arena of search nodes
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: Vec<Node>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store `node` and return its id
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Ancestor chain of `id`, including `id` and the root.
    ///
    /// Ordered root first when `root_first` is set, otherwise starting at `id`.
    /// Unknown ids yield an empty path.
    pub fn path_to_root(&self, id: NodeId, root_first: bool) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.get(id).map(|_| id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.nodes[node_id.0].parent;
        }
        if root_first {
            path.reverse();
        }
        path
    }
}

impl std::ops::Index<NodeId> for NodeStore {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
