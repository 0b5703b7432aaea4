//! Capabilities the engine drives but does not implement.
//!
//! Presentation lives entirely behind these traits; the engine never formats
//! a table row or positions a node itself.

use crate::filter::{Filter, FilterControls, LoggerRegistry};
use crate::graph::{EdgeId, GraphEdge, GraphNode, NodeId, NodePatch};
use crate::record::LogRecord;
use std::sync::{Arc, Mutex, PoisonError};

/// Receives the complete filtered view after every change.
pub trait TableRenderer: Send {
    fn render_rows(&mut self, rows: &[Arc<LogRecord>]);
}

/// Graph drawing surface.
///
/// Shared with highlight timer tasks, hence `&self` and `Send + Sync`.
/// Implementations must treat removal of absent ids and addition of present
/// ids as no-ops.
pub trait GraphRenderer: Send + Sync {
    fn add_node(&self, node: &GraphNode);
    fn remove_node(&self, id: &NodeId);
    fn update_node(&self, id: &NodeId, patch: &NodePatch);
    fn add_edge(&self, edge: &GraphEdge);
    fn remove_edge(&self, id: &EdgeId);
    /// Re-fit the viewport to the current content. Safe to call redundantly.
    fn fit(&self);
}

/// Pull-based access to the filter controls of whatever UI hosts the engine.
pub trait FilterControlsReader: Send {
    fn read_filter_controls(&self) -> FilterControls;

    /// Called when a logger is discovered, before the filter is recomputed
    /// from [`read_filter_controls`](Self::read_filter_controls). `live`
    /// already selects the new logger; an implementation must select it in
    /// the controls it returns next, or the logger is filtered out again.
    fn loggers_changed(&mut self, registry: &LoggerRegistry, live: &Filter);
}

/// The set of ports an engine is created with.
pub struct Ports {
    pub table: Box<dyn TableRenderer>,
    pub graph: Arc<dyn GraphRenderer>,
    pub controls: Box<dyn FilterControlsReader>,
}

// A port shared with its owner (a UI thread, a test) through a mutex.

impl<T: TableRenderer> TableRenderer for Arc<Mutex<T>> {
    fn render_rows(&mut self, rows: &[Arc<LogRecord>]) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .render_rows(rows);
    }
}

impl<T: FilterControlsReader> FilterControlsReader for Arc<Mutex<T>> {
    fn read_filter_controls(&self) -> FilterControls {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .read_filter_controls()
    }

    fn loggers_changed(&mut self, registry: &LoggerRegistry, live: &Filter) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .loggers_changed(registry, live);
    }
}
