//! Stream dispatch.
//!
//! Every raw message goes through one [`Engine::dispatch`] call:
//!
//! raw text
//! LogRecord::parse
//! EVENT -> EventRecord::parse -> GraphStateMachine::handle -> GraphRenderer
//! other -> LogBuffer::append -> FilterEngine::register_logger
//!       -> Filter::recompute -> Filter::apply -> TableRenderer
//!
//! Nothing in this path is fatal: a record that cannot be understood is
//! dropped and reported, and the next record is processed normally.

mod dispatcher;
mod error;

#[cfg(test)]
mod tests;

pub use dispatcher::{Dispatched, Engine};
pub use error::{DispatchError, EngineError};
