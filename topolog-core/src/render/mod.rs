//! Ready-made port implementations used by the CLI and by tests.

mod controls;
mod graph_model;
mod table;

#[cfg(test)]
mod tests;

pub use controls::StaticControls;
pub use graph_model::{GraphModel, GraphOp, TopologySnapshot};
pub use table::{MemoryTable, TerminalTable, format_row};
