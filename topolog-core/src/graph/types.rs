use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Id of the sentinel node every client edge points at.
pub const BROKER_ID: &str = "broker";

#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn broker() -> Self {
        NodeId(BROKER_ID.to_owned())
    }

    pub fn is_broker(&self) -> bool {
        self.0 == BROKER_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Edges share their id with the client node they belong to.
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl From<&NodeId> for EdgeId {
    fn from(id: &NodeId) -> Self {
        EdgeId(id.0.clone())
    }
}

/// `#RRGGBB` color.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(hex: impl Into<String>) -> Self {
        Color(hex.into())
    }

    pub fn is_valid_hex(&self) -> bool {
        let Some(digits) = self.0.strip_prefix('#') else {
            return false;
        };
        digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Box,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    /// Color the node was created with.
    pub base_color: Color,
    /// Color currently shown.
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

impl GraphNode {
    pub fn new(id: NodeId, label: impl Into<String>, base_color: Color) -> Self {
        Self {
            id,
            label: label.into(),
            color: base_color.clone(),
            base_color,
            shape: None,
            font_size: None,
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
}

impl GraphEdge {
    /// The single edge a client node owns, pointing at the broker.
    pub fn to_broker(client: &NodeId) -> Self {
        Self {
            id: EdgeId::from(client),
            from: client.clone(),
            to: NodeId::broker(),
        }
    }
}

/// Partial node update sent to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePatch {
    pub color: Option<Color>,
    pub label: Option<String>,
}

impl NodePatch {
    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            label: None,
        }
    }
}
