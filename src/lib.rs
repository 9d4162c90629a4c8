//! In-memory appointment scheduling for a small hospital model.
//!
//! The engine ties together four stores owned by a single [`Scheduler`]:
//! - [`RequestQueue`]: bounded FIFO of pending scheduling requests
//! - [`DoctorRegistry`]: doctors kept in ascending id order
//! - [`PatientRegistry`]: patients listed newest first
//! - [`ScheduleStore`] and [`UndoStack`]: append-only schedule log with
//!   reversal of the most recent appointment
//!
//! Every operation runs to completion on the caller's thread. A `Scheduler`
//! is not meant to be shared; wrap the whole instance in one lock if it ever
//! has to be.

pub mod config;
pub mod doctors;
pub mod error;
pub mod models;
pub mod patients;
pub mod queue;
pub mod schedule;
pub mod scheduler;

pub use config::SchedulerConfig;
pub use doctors::DoctorRegistry;
pub use error::{Result, SchedulerError};
pub use models::{
    Doctor, DoctorId, Patient, PatientId, Request, RequestId, ScheduleId, ScheduleRecord,
};
pub use patients::PatientRegistry;
pub use queue::RequestQueue;
pub use schedule::{Deactivation, ScheduleStore, UndoStack};
pub use scheduler::{ScheduleEntry, Scheduled, Scheduler, Undone, DELETED_PLACEHOLDER};
