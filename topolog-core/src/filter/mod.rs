//! Log table filtering.
//!
//! The filtered view is never patched in place. Every new record and every
//! control change re-derives the [`Filter`] from a [`FilterControls`]
//! snapshot and re-runs it over the whole buffer:
//!
//! FilterControls
//! Filter::recompute
//! Filter::apply(LogBuffer)
//! TableRenderer::render_rows
//!
//! The only exception is logger discovery: a logger seen for the first time
//! has no control yet, so it is enrolled straight into the live filter.

mod controls;
mod filter_engine;
mod predicate;
mod registry;

#[cfg(test)]
mod tests;

pub use controls::FilterControls;
pub use filter_engine::FilterEngine;
pub use predicate::Filter;
pub use registry::LoggerRegistry;
