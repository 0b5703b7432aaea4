use ahash::AHashSet;

/// Logger names observed so far, in first-seen order.
///
/// Grows monotonically for the lifetime of the engine.
#[derive(Debug, Clone, Default)]
pub struct LoggerRegistry {
    order: Vec<String>,
    seen: AHashSet<String>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only the first time `name` is seen.
    pub fn register(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }

        self.seen.insert(name.to_owned());
        self.order.push(name.to_owned());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
