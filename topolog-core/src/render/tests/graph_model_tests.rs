use crate::graph::{Color, GraphEdge, GraphNode, NodeId, NodePatch};
use crate::ports::GraphRenderer;
use crate::render::{GraphModel, GraphOp};
use pretty_assertions::assert_eq;

fn node(id: &str) -> GraphNode {
    GraphNode::new(NodeId::from(id), id.to_uppercase(), Color::new("#66AAFF"))
}

#[test]
fn duplicate_adds_and_absent_removals_are_no_ops() {
    let model = GraphModel::new();

    model.add_node(&node("a"));
    model.add_node(&GraphNode::new(NodeId::from("a"), "other", Color::new("#000000")));
    model.remove_node(&NodeId::from("ghost"));
    model.remove_edge(&GraphEdge::to_broker(&NodeId::from("ghost")).id);

    let snapshot = model.snapshot();
    assert_eq!(snapshot.nodes.len(), 1);
    assert_eq!(snapshot.nodes[0].label, "A");
}

#[test]
fn update_patches_only_given_fields() {
    let model = GraphModel::new();
    model.add_node(&node("a"));

    model.update_node(&NodeId::from("a"), &NodePatch::color(Color::new("#DDDD22")));
    model.update_node(
        &NodeId::from("a"),
        &NodePatch {
            color: None,
            label: Some("renamed".into()),
        },
    );

    let a = model.node("a").unwrap();
    assert_eq!(a.color, Color::new("#DDDD22"));
    assert_eq!(a.label, "renamed");
    assert_eq!(a.base_color, Color::new("#66AAFF"));
}

#[test]
fn history_is_kept_only_when_recording() {
    let quiet = GraphModel::new();
    let recording = GraphModel::recording();

    for model in [&quiet, &recording] {
        model.add_node(&node("a"));
        model.add_edge(&GraphEdge::to_broker(&NodeId::from("a")));
        model.fit();
    }

    assert!(quiet.ops().is_empty());
    assert_eq!(
        recording.ops(),
        vec![
            GraphOp::AddNode(NodeId::from("a")),
            GraphOp::AddEdge(GraphEdge::to_broker(&NodeId::from("a")).id),
            GraphOp::Fit,
        ]
    );
    assert_eq!(recording.fit_count(), 1);
}

#[test]
fn snapshot_serialises_as_json() {
    let model = GraphModel::new();
    model.add_node(&node("a"));
    model.add_edge(&GraphEdge::to_broker(&NodeId::from("a")));

    let json = serde_json::to_value(model.snapshot()).unwrap();

    assert_eq!(json["nodes"][0]["id"], "a");
    assert_eq!(json["edges"][0]["to"], "broker");
}
