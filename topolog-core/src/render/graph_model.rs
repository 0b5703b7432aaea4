use crate::graph::{EdgeId, GraphEdge, GraphNode, NodeId, NodePatch};
use crate::ports::GraphRenderer;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Renderer call as observed by [`GraphModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphOp {
    AddNode(NodeId),
    RemoveNode(NodeId),
    UpdateNode(NodeId, NodePatch),
    AddEdge(EdgeId),
    RemoveEdge(EdgeId),
    Fit,
}

/// Serialisable view of the drawn topology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopologySnapshot {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

#[derive(Debug, Default)]
struct ModelState {
    nodes: BTreeMap<NodeId, GraphNode>,
    edges: BTreeMap<EdgeId, GraphEdge>,
    ops: Vec<GraphOp>,
    record_ops: bool,
}

impl ModelState {
    fn record(&mut self, op: GraphOp) {
        if self.record_ops {
            self.ops.push(op);
        }
    }
}

/// In-memory graph surface.
///
/// Keeps what a real drawing surface would show and, when created with
/// [`GraphModel::recording`], the log of calls it received.
#[derive(Debug, Default)]
pub struct GraphModel {
    state: Mutex<ModelState>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recording() -> Self {
        Self {
            state: Mutex::new(ModelState {
                record_ops: true,
                ..ModelState::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ModelState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> TopologySnapshot {
        let state = self.lock();
        TopologySnapshot {
            nodes: state.nodes.values().cloned().collect(),
            edges: state.edges.values().cloned().collect(),
        }
    }

    pub fn node(&self, id: &str) -> Option<GraphNode> {
        self.lock().nodes.get(&NodeId::from(id)).cloned()
    }

    pub fn edge(&self, id: &str) -> Option<GraphEdge> {
        self.lock().edges.get(&EdgeId(id.to_owned())).cloned()
    }

    pub fn ops(&self) -> Vec<GraphOp> {
        self.lock().ops.clone()
    }

    /// Color updates the node received, in order.
    pub fn color_updates(&self, id: &str) -> Vec<String> {
        let id = NodeId::from(id);
        self.lock()
            .ops
            .iter()
            .filter_map(|op| match op {
                GraphOp::UpdateNode(target, patch) if *target == id => {
                    patch.color.as_ref().map(|c| c.0.clone())
                }
                _ => None,
            })
            .collect()
    }

    pub fn fit_count(&self) -> usize {
        self.lock()
            .ops
            .iter()
            .filter(|op| matches!(op, GraphOp::Fit))
            .count()
    }
}

impl GraphRenderer for GraphModel {
    fn add_node(&self, node: &GraphNode) {
        let mut state = self.lock();
        state.record(GraphOp::AddNode(node.id.clone()));
        state
            .nodes
            .entry(node.id.clone())
            .or_insert_with(|| node.clone());
    }

    fn remove_node(&self, id: &NodeId) {
        let mut state = self.lock();
        state.record(GraphOp::RemoveNode(id.clone()));
        state.nodes.remove(id);
    }

    fn update_node(&self, id: &NodeId, patch: &NodePatch) {
        let mut state = self.lock();
        state.record(GraphOp::UpdateNode(id.clone(), patch.clone()));

        if let Some(node) = state.nodes.get_mut(id) {
            if let Some(color) = &patch.color {
                node.color = color.clone();
            }
            if let Some(label) = &patch.label {
                node.label = label.clone();
            }
        }
    }

    fn add_edge(&self, edge: &GraphEdge) {
        let mut state = self.lock();
        state.record(GraphOp::AddEdge(edge.id.clone()));
        state
            .edges
            .entry(edge.id.clone())
            .or_insert_with(|| edge.clone());
    }

    fn remove_edge(&self, id: &EdgeId) {
        let mut state = self.lock();
        state.record(GraphOp::RemoveEdge(id.clone()));
        state.edges.remove(id);
    }

    fn fit(&self) {
        self.lock().record(GraphOp::Fit);
    }
}
