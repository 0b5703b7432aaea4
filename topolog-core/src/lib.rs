pub mod buffer;
pub mod cli;
pub mod conf;
pub mod connection;
pub mod engine;
pub mod filter;
pub mod graph;
pub mod logging;
pub mod ports;
pub mod record;
pub mod render;
