//! Bounded FIFO of pending scheduling requests.

use chrono::Local;
use std::collections::VecDeque;
use tracing::debug;

use crate::error::{Result, SchedulerError};
use crate::models::{DoctorId, PatientId, Request, RequestId};

/// Fixed-capacity request queue.
///
/// Holds at most `capacity` requests. Patient and doctor ids are taken as
/// given; nothing is validated until the request is dequeued.
#[derive(Debug)]
pub struct RequestQueue {
    entries: VecDeque<Request>,
    capacity: usize,
    next_id: RequestId,
}

impl RequestQueue {
    /// Initialize an empty queue.
    pub fn new(capacity: usize) -> Self {
        RequestQueue {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: RequestId::FIRST,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Add a request at the back of the queue.
    ///
    /// A full queue is left untouched and no request id is consumed.
    pub fn enqueue(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        time: String,
    ) -> Result<RequestId> {
        if self.is_full() {
            return Err(SchedulerError::QueueFull {
                capacity: self.capacity,
            });
        }

        let id = self.next_id;
        self.next_id = id.next();
        self.entries.push_back(Request {
            id,
            patient_id,
            doctor_id,
            time,
            created_at: Local::now(),
        });
        debug!(request = %id, pending = self.entries.len(), "request enqueued");
        Ok(id)
    }

    /// Remove and return the oldest request.
    pub fn dequeue(&mut self) -> Result<Request> {
        self.entries.pop_front().ok_or(SchedulerError::QueueEmpty)
    }

    /// Iterate pending requests front to back without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &Request> + '_ {
        self.entries.iter()
    }

    /// Snapshot of pending requests in FIFO order.
    pub fn peek_all(&self) -> Vec<Request> {
        self.entries.iter().cloned().collect()
    }
}
