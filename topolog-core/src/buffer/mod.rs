mod log_buffer;


pub use log_buffer::{DEFAULT_CAPACITY, LogBuffer};
