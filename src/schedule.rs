//! Schedule log and the undo stack that reverses it.
//!
//! Records are appended and never removed; undo only clears the active flag.

use tracing::debug;

use crate::error::{Result, SchedulerError};
use crate::models::{DoctorId, PatientId, ScheduleId, ScheduleRecord};

/// Outcome of deactivating a record that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deactivation {
    Deactivated,
    AlreadyInactive,
}

/// Append-only, fixed-capacity log of schedule records in creation order.
#[derive(Debug)]
pub struct ScheduleStore {
    records: Vec<ScheduleRecord>,
    capacity: usize,
    next_id: ScheduleId,
}

impl ScheduleStore {
    pub fn new(capacity: usize) -> Self {
        ScheduleStore {
            records: Vec::with_capacity(capacity),
            capacity,
            next_id: ScheduleId::FIRST,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Append an active record under the next schedule id.
    pub fn append(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        time: String,
    ) -> Result<&ScheduleRecord> {
        if self.is_full() {
            return Err(SchedulerError::ScheduleStoreFull {
                capacity: self.capacity,
            });
        }

        let id = self.next_id;
        self.next_id = id.next();
        self.records
            .push(ScheduleRecord::new(id, patient_id, doctor_id, time));
        debug!(schedule = %id, stored = self.records.len(), "schedule record appended");
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn find(&self, id: ScheduleId) -> Result<&ScheduleRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(SchedulerError::ScheduleIdNotFound(id))
    }

    /// Clear the active flag of `id`.
    ///
    /// An already inactive record is reported, not treated as a failure.
    pub fn deactivate(&mut self, id: ScheduleId) -> Result<Deactivation> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(SchedulerError::ScheduleIdNotFound(id))?;

        if !record.active {
            return Ok(Deactivation::AlreadyInactive);
        }
        record.active = false;
        debug!(schedule = %id, "schedule record deactivated");
        Ok(Deactivation::Deactivated)
    }

    /// Records in creation order, active and undone alike.
    pub fn list_all(&self) -> impl Iterator<Item = &ScheduleRecord> + '_ {
        self.records.iter()
    }

    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.active).count()
    }
}

/// Fixed-capacity LIFO of schedule ids eligible for undo.
///
/// Also remembers the id most recently undone, so a caller that asks to undo
/// again right after the stack drains can be told which appointment already
/// went. Any new push forgets it.
#[derive(Debug)]
pub struct UndoStack {
    ids: Vec<ScheduleId>,
    capacity: usize,
    retired: Option<ScheduleId>,
}

impl UndoStack {
    pub fn new(capacity: usize) -> Self {
        UndoStack {
            ids: Vec::with_capacity(capacity),
            capacity,
            retired: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Push an id. A full stack is left unchanged.
    pub fn push(&mut self, id: ScheduleId) -> Result<()> {
        if self.ids.len() >= self.capacity {
            return Err(SchedulerError::StackFull {
                capacity: self.capacity,
            });
        }
        self.ids.push(id);
        self.retired = None;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<ScheduleId> {
        self.ids.pop().ok_or(SchedulerError::StackEmpty)
    }

    /// Record `id` as the most recently undone appointment.
    pub fn retire(&mut self, id: ScheduleId) {
        self.retired = Some(id);
    }

    pub fn take_retired(&mut self) -> Option<ScheduleId> {
        self.retired.take()
    }
}
