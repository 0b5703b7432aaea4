mod pipeline;
pub mod server;
pub mod tracing;

pub use pipeline::{TestPipeline, event_line, log_line};
pub use server::LogStreamServer;
pub use tracing::{CapturedEvent, captured, init_test_tracing};
