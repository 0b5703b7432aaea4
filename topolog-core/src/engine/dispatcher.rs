use crate::buffer::LogBuffer;
use crate::conf::TopologConfig;
use crate::engine::{DispatchError, EngineError};
use crate::filter::{Filter, FilterEngine, LoggerRegistry};
use crate::graph::{Applied, GraphError, GraphStateMachine};
use crate::ports::{FilterControlsReader, Ports, TableRenderer};
use crate::record::{EventRecord, LogRecord};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// Outcome of one dispatched message.
#[derive(Debug)]
pub enum Dispatched {
    /// A log record entered the buffer and the table was re-rendered.
    Logged { new_logger: bool, visible: usize },
    /// An event record changed (or re-affirmed) the graph.
    Applied(Applied),
    /// An event record was understood but left the graph untouched.
    Ignored(GraphError),
    /// The message could not be parsed and was discarded.
    Dropped,
}

/// Explicit owner of every piece of stream-derived state.
///
/// `dispatch` takes `&mut self`: records are processed one at a time, in the
/// order the caller delivers them.
pub struct Engine {
    buffer: LogBuffer,
    filter: FilterEngine,
    graph: GraphStateMachine,
    table: Box<dyn TableRenderer>,
    controls: Box<dyn FilterControlsReader>,
}

impl Engine {
    /// Build an engine from config and ports. Draws the broker node.
    ///
    /// Must be called from within a tokio runtime, which later runs the
    /// highlight timers.
    pub fn create(config: &TopologConfig, ports: Ports) -> Result<Self, EngineError> {
        let runtime = Handle::try_current()?;

        let initial = Filter::recompute(&ports.controls.read_filter_controls());
        let graph = GraphStateMachine::new(
            ports.graph,
            config.palette.clone(),
            config.catalog(),
            config.highlight_duration(),
            runtime,
        );

        info!(
            capacity = config.buffer.capacity,
            highlight_ms = config.highlight.duration_ms,
            protocol = ?config.events.protocol,
            "engine created"
        );

        Ok(Self {
            buffer: LogBuffer::new(config.buffer.capacity),
            filter: FilterEngine::new(initial),
            graph,
            table: ports.table,
            controls: ports.controls,
        })
    }

    /// Route one raw message. Never fails: problems are logged and reported
    /// in the returned outcome.
    pub fn dispatch(&mut self, raw: &str) -> Dispatched {
        match self.try_dispatch(raw) {
            Ok(dispatched) => dispatched,
            Err(DispatchError::Graph(e)) => Dispatched::Ignored(e),
            Err(e) => {
                warn!(error = %e, "dropping record");
                Dispatched::Dropped
            }
        }
    }

    pub fn try_dispatch(&mut self, raw: &str) -> Result<Dispatched, DispatchError> {
        let record = LogRecord::parse(raw).map_err(DispatchError::MalformedRecord)?;
        self.ingest(record)
    }

    /// Route an already-parsed record.
    pub fn ingest(&mut self, record: LogRecord) -> Result<Dispatched, DispatchError> {
        if record.is_event() {
            let event = EventRecord::parse(&record.message).map_err(|source| {
                DispatchError::MalformedEvent {
                    logger: record.logger_name.clone(),
                    source,
                }
            })?;

            let applied = self.graph.handle(&event)?;
            return Ok(Dispatched::Applied(applied));
        }

        Ok(self.ingest_log(Arc::new(record)))
    }

    /// Buffer, then discover the logger, then recompute, then render.
    fn ingest_log(&mut self, record: Arc<LogRecord>) -> Dispatched {
        let logger = record.logger_name.clone();
        self.buffer.append(record);

        let new_logger = self.filter.register_logger(&logger);
        if new_logger {
            self.controls
                .loggers_changed(self.filter.registry(), self.filter.filter());
        }

        let visible = self.refilter();
        Dispatched::Logged {
            new_logger,
            visible,
        }
    }

    /// Re-read the controls and re-render the table without a new record.
    /// Returns the number of visible rows.
    pub fn controls_changed(&mut self) -> usize {
        debug!("filter controls changed");
        self.refilter()
    }

    fn refilter(&mut self) -> usize {
        self.filter.recompute(&self.controls.read_filter_controls());
        let rows = self.filter.apply(&self.buffer);
        self.table.render_rows(&rows);
        rows.len()
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    pub fn filter(&self) -> &Filter {
        self.filter.filter()
    }

    pub fn loggers(&self) -> &LoggerRegistry {
        self.filter.registry()
    }

    pub fn graph(&self) -> &GraphStateMachine {
        &self.graph
    }

    /// Current filtered view, without rendering it.
    pub fn visible_rows(&self) -> Vec<Arc<LogRecord>> {
        self.filter.apply(&self.buffer)
    }

    /// Cancel pending highlights and release the ports.
    pub fn teardown(self) {
        self.graph.cancel_highlights();
        info!(
            buffered = self.buffer.len(),
            loggers = self.filter.registry().len(),
            nodes = self.graph.node_count(),
            "engine torn down"
        );
    }
}
