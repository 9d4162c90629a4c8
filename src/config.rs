//! Construction-time bounds for a scheduling engine.

/// Capacities and text limits for one [`Scheduler`](crate::Scheduler).
///
/// Bounds are fixed once the engine is built. Text longer than its limit is
/// truncated, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub queue_capacity: usize,
    pub schedule_capacity: usize,
    pub undo_capacity: usize,
    pub max_name_len: usize,
    pub max_time_len: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            queue_capacity: 8,
            schedule_capacity: 100,
            undo_capacity: 50,
            max_name_len: 48,
            max_time_len: 64,
        }
    }
}

impl SchedulerConfig {
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_schedule_capacity(mut self, capacity: usize) -> Self {
        self.schedule_capacity = capacity;
        self
    }

    pub fn with_undo_capacity(mut self, capacity: usize) -> Self {
        self.undo_capacity = capacity;
        self
    }

    pub fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    pub fn with_max_time_len(mut self, len: usize) -> Self {
        self.max_time_len = len;
        self
    }
}

/// Keep at most `max_chars` characters of `text`.
///
/// Cuts on a char boundary, so multi-byte names are never split mid code point.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
