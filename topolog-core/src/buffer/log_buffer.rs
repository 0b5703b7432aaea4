use crate::record::LogRecord;
use std::collections::VecDeque;
use std::sync::Arc;

pub const DEFAULT_CAPACITY: usize = 150;

/// Bounded, insertion-ordered record store.
///
/// Invariants:
/// - `len() <= capacity()` after every `append`
/// - the oldest record is evicted first, without consulting any filter
#[derive(Debug)]
pub struct LogBuffer {
    capacity: usize,
    records: VecDeque<Arc<LogRecord>>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity.saturating_add(1)),
        }
    }

    /// Append a record, evicting exactly one record from the front when the
    /// capacity is exceeded.
    pub fn append(&mut self, record: Arc<LogRecord>) {
        self.records.push_back(record);

        if self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// Current contents, oldest first.
    pub fn snapshot(&self) -> &VecDeque<Arc<LogRecord>> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
