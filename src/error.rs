use thiserror::Error;

use crate::models::{DoctorId, PatientId, ScheduleId};

/// Recoverable failures reported by the scheduling engine.
///
/// None of these abort the caller; each leaves the store it concerns
/// untouched unless the variant says otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("request queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    #[error("no requests to process")]
    QueueEmpty,

    #[error("patient {0} not found")]
    PatientNotFound(PatientId),

    #[error("doctor {0} not found")]
    DoctorNotFound(DoctorId),

    #[error("schedule storage is full (capacity {capacity})")]
    ScheduleStoreFull { capacity: usize },

    #[error("undo stack is full (capacity {capacity})")]
    StackFull { capacity: usize },

    #[error("nothing to undo")]
    StackEmpty,

    #[error("appointment {0} already undone")]
    AlreadyUndone(ScheduleId),

    #[error("scheduled id {0} not found")]
    ScheduleIdNotFound(ScheduleId),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
