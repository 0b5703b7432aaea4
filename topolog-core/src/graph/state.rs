use crate::graph::{
    Color, EventCatalog, GraphEdge, GraphError, GraphNode, HighlightTimer, NodeId, NodePatch,
    Palette, Shape, Tone, Transition,
};
use crate::ports::GraphRenderer;
use crate::record::EventRecord;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, trace};

const BROKER_LABEL: &str = "Broker";
const BROKER_FONT_SIZE: u32 = 20;

#[derive(Debug)]
struct NodeEntry {
    node: GraphNode,
    edge: Option<GraphEdge>,
    active_timer: Option<HighlightTimer>,
}

impl NodeEntry {
    fn new(node: GraphNode) -> Self {
        Self {
            node,
            edge: None,
            active_timer: None,
        }
    }
}

/// What an accepted event did to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Start event. Both flags are false when the node and its edge already
    /// existed.
    Upserted { node_created: bool, edge_created: bool },
    Removed,
    /// Stop event for a node that does not exist.
    Absent,
    Highlighted(Tone),
}

/// Live topology inferred from event records.
///
/// Nodes live in a `DashMap` shared with highlight timer tasks. Every
/// structural change happens on the dispatching thread; timer tasks only ever
/// touch the color of the node they were armed for.
pub struct GraphStateMachine {
    nodes: Arc<DashMap<NodeId, NodeEntry>>,
    renderer: Arc<dyn GraphRenderer>,
    palette: Palette,
    catalog: EventCatalog,
    highlight_duration: Duration,
    next_generation: u64,
    runtime: Handle,
}

impl GraphStateMachine {
    /// Create the machine and draw the broker node.
    pub fn new(
        renderer: Arc<dyn GraphRenderer>,
        palette: Palette,
        catalog: EventCatalog,
        highlight_duration: Duration,
        runtime: Handle,
    ) -> Self {
        let broker = GraphNode::new(NodeId::broker(), BROKER_LABEL, palette.broker.clone())
            .with_shape(Shape::Box)
            .with_font_size(BROKER_FONT_SIZE);

        renderer.add_node(&broker);

        let nodes = DashMap::new();
        nodes.insert(broker.id.clone(), NodeEntry::new(broker));

        Self {
            nodes: Arc::new(nodes),
            renderer,
            palette,
            catalog,
            highlight_duration,
            next_generation: 0,
            runtime,
        }
    }

    /// Apply one event and re-fit the viewport. Rejections are logged and
    /// returned, never fatal.
    pub fn handle(&mut self, event: &EventRecord) -> Result<Applied, GraphError> {
        let result = self.apply(event);

        match &result {
            Ok(applied) => {
                trace!(event = %event.event, node = %event.data, ?applied, "event applied")
            }
            Err(e) => debug!(error = %e, "event ignored"),
        }

        self.renderer.fit();
        result
    }

    fn apply(&mut self, event: &EventRecord) -> Result<Applied, GraphError> {
        let Some(kind) = self.catalog.resolve(&event.event) else {
            return Err(GraphError::UnknownEvent {
                event: event.event.clone(),
            });
        };

        let id = NodeId::from(event.data.as_str());

        match Transition::from(kind) {
            Transition::StartClient => {
                let label = format!("IoT Endpoint {id}");
                let base = self.palette.default.clone();
                let with_edge = !id.is_broker();
                Ok(self.upsert(id, label, base, with_edge))
            }
            Transition::StartServer => {
                let label = format!("Tenant {id}");
                let base = self.palette.success.clone();
                Ok(self.upsert(id, label, base, false))
            }
            Transition::StopClient | Transition::StopServer => {
                if id.is_broker() {
                    return Err(GraphError::ProtectedNode {
                        event: event.event.clone(),
                    });
                }
                Ok(self.remove(&id))
            }
            Transition::Highlight(tone) => self.highlight(&id, tone).ok_or_else(|| {
                GraphError::DanglingReference {
                    event: event.event.clone(),
                    id,
                }
            }),
        }
    }

    /// Create the node (and optionally its broker edge) if missing. An
    /// existing node keeps whatever color it currently shows.
    fn upsert(&mut self, id: NodeId, label: String, base: Color, with_edge: bool) -> Applied {
        let mut node_created = false;
        let mut entry = self.nodes.entry(id.clone()).or_insert_with(|| {
            node_created = true;
            NodeEntry::new(GraphNode::new(id.clone(), label, base))
        });

        if node_created {
            self.renderer.add_node(&entry.node);
        }

        let mut edge_created = false;
        if with_edge && entry.edge.is_none() {
            let edge = GraphEdge::to_broker(&id);
            self.renderer.add_edge(&edge);
            entry.edge = Some(edge);
            edge_created = true;
        }

        Applied::Upserted {
            node_created,
            edge_created,
        }
    }

    /// Remove the node, its edge and any pending highlight.
    fn remove(&mut self, id: &NodeId) -> Applied {
        let Some((_, entry)) = self.nodes.remove(id) else {
            return Applied::Absent;
        };

        if let Some(edge) = &entry.edge {
            self.renderer.remove_edge(&edge.id);
        }
        self.renderer.remove_node(id);

        // Dropping the entry aborts its timer.
        drop(entry);
        Applied::Removed
    }

    /// Show `tone` on an existing node and (re)arm its revert timer.
    fn highlight(&mut self, id: &NodeId, tone: Tone) -> Option<Applied> {
        let mut entry = self.nodes.get_mut(id)?;

        let color = self.palette.tone(tone).clone();
        entry.node.color = color.clone();
        self.renderer.update_node(id, &NodePatch::color(color));

        self.next_generation += 1;
        let nodes = Arc::clone(&self.nodes);
        let renderer = Arc::clone(&self.renderer);
        let target = id.clone();
        let revert_to = self.palette.default.clone();

        let timer = HighlightTimer::arm(
            &self.runtime,
            self.next_generation,
            self.highlight_duration,
            move |generation| {
                revert(&nodes, renderer.as_ref(), &target, revert_to, generation)
            },
        );

        // Replacing the previous timer drops it, which cancels it.
        entry.active_timer = Some(timer);
        Some(Applied::Highlighted(tone))
    }

    /// Cancel every pending highlight.
    pub fn cancel_highlights(&self) {
        for mut entry in self.nodes.iter_mut() {
            entry.active_timer = None;
        }
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &NodeId) -> Option<GraphNode> {
        self.nodes.get(id).map(|entry| entry.node.clone())
    }

    pub fn edge(&self, id: &NodeId) -> Option<GraphEdge> {
        self.nodes.get(id).and_then(|entry| entry.edge.clone())
    }

    pub fn has_pending_highlight(&self, id: &NodeId) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|entry| entry.active_timer.is_some())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().filter(|entry| entry.edge.is_some()).count()
    }

    pub fn highlight_duration(&self) -> Duration {
        self.highlight_duration
    }
}

impl Drop for GraphStateMachine {
    fn drop(&mut self) {
        self.cancel_highlights();
    }
}

/// Timer callback: show the default color again unless the node is gone or a
/// newer highlight took over. Tenants included.
fn revert(
    nodes: &DashMap<NodeId, NodeEntry>,
    renderer: &dyn GraphRenderer,
    id: &NodeId,
    color: Color,
    generation: u64,
) {
    let Some(mut entry) = nodes.get_mut(id) else {
        trace!(node = %id, "highlight expired for removed node");
        return;
    };

    if entry.active_timer.as_ref().map(HighlightTimer::generation) != Some(generation) {
        trace!(node = %id, generation, "superseded highlight expired");
        return;
    }

    entry.active_timer = None;
    entry.node.color = color.clone();
    renderer.update_node(id, &NodePatch::color(color));
}
