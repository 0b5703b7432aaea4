use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub const DEFAULT_HIGHLIGHT: Duration = Duration::from_millis(400);

/// Pending revert of one node's highlight.
///
/// Invariants:
/// - at most one timer is installed per node; installing a new one drops the
///   old one, which aborts its task
/// - the revert callback receives the generation it was armed with so it can
///   detect that it has been superseded after it already woke up
#[derive(Debug)]
pub struct HighlightTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

impl HighlightTimer {
    pub(crate) fn arm<F>(runtime: &Handle, generation: u64, delay: Duration, on_expiry: F) -> Self
    where
        F: FnOnce(u64) + Send + 'static,
    {
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_expiry(generation);
        });

        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for HighlightTimer {
    /// Cancel the revert if it has not fired yet.
    fn drop(&mut self) {
        self.handle.abort();
    }
}
