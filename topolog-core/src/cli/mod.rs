pub mod conf;
pub mod replay;
pub mod watch;

#[cfg(test)]
mod tests;
