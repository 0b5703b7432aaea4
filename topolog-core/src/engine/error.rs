use crate::graph::GraphError;
use thiserror::Error;

/// Why a raw message did not make it into either view.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("malformed record: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    #[error("malformed event payload from logger '{logger}': {source}")]
    MalformedEvent {
        logger: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("the engine must be created inside a tokio runtime")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
