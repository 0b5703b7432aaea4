mod event_record;
mod level;
mod log_record;


pub use event_record::{EventKind, EventRecord};
pub use level::Level;
pub use log_record::LogRecord;
