use crate::graph::NodeId;
use thiserror::Error;

/// Reasons an event leaves the graph untouched. None of them are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown event '{event}'")]
    UnknownEvent { event: String },

    #[error("event '{event}' references unknown node '{id}'")]
    DanglingReference { event: String, id: NodeId },

    #[error("event '{event}' cannot remove the broker node")]
    ProtectedNode { event: String },
}
