mod catalog;
mod error;
mod highlight;
mod palette;
mod state;
mod types;


pub use catalog::{EventCatalog, Protocol, Transition};
pub use error::GraphError;
pub use highlight::{DEFAULT_HIGHLIGHT, HighlightTimer};
pub use palette::{Palette, Tone};
pub use state::{Applied, GraphStateMachine};
pub use types::{BROKER_ID, Color, EdgeId, GraphEdge, GraphNode, NodeId, NodePatch, Shape};
