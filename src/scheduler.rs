//! Appointment scheduling over the request queue and the registries.
//!
//! This module provides the Scheduler struct which owns every store of one
//! engine instance, turns queued requests into schedule records, and reverses
//! the most recent appointment on demand.

use std::fmt;
use tracing::{info, warn};

use crate::config::{truncate, SchedulerConfig};
use crate::doctors::DoctorRegistry;
use crate::error::{Result, SchedulerError};
use crate::models::{
    Doctor, DoctorId, Patient, PatientId, Request, RequestId, ScheduleId, ScheduleRecord,
};
use crate::patients::PatientRegistry;
use crate::queue::RequestQueue;
use crate::schedule::{Deactivation, ScheduleStore, UndoStack};

/// Shown in place of a patient or doctor that has since been removed.
pub const DELETED_PLACEHOLDER: &str = "[deleted]";

/// Result of successfully processing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    pub record: ScheduleRecord,
    pub request_id: RequestId,
    pub patient_name: String,
    pub doctor_name: String,
    /// False when the undo stack was full and this appointment cannot be undone.
    pub undo_recorded: bool,
}

impl fmt::Display for Scheduled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scheduled appointment {}: patient {} ({}) -> doctor {} ({}) at {} (from req {})",
            self.record.id,
            self.patient_name,
            self.record.patient_id,
            self.doctor_name,
            self.record.doctor_id,
            self.record.time,
            self.request_id
        )
    }
}

/// Result of reversing an appointment.
///
/// Names are resolved at undo time and are `None` for removed entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Undone {
    pub record: ScheduleRecord,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
}

impl fmt::Display for Undone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Undid appointment {} (patient {} {} doctor {} {} at {})",
            self.record.id,
            self.patient_name.as_deref().unwrap_or(DELETED_PLACEHOLDER),
            self.record.patient_id,
            self.doctor_name.as_deref().unwrap_or(DELETED_PLACEHOLDER),
            self.record.doctor_id,
            self.record.time
        )
    }
}

/// One row of the schedule listing with names resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry<'a> {
    pub record: &'a ScheduleRecord,
    pub patient_name: Option<&'a str>,
    pub doctor_name: Option<&'a str>,
}

impl ScheduleEntry<'_> {
    pub fn patient_label(&self) -> &str {
        self.patient_name.unwrap_or(DELETED_PLACEHOLDER)
    }

    pub fn doctor_label(&self) -> &str {
        self.doctor_name.unwrap_or(DELETED_PLACEHOLDER)
    }
}

impl fmt::Display for ScheduleEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}) -> {} ({}) at {} [{}]",
            self.record.id,
            self.patient_label(),
            self.record.patient_id,
            self.doctor_label(),
            self.record.doctor_id,
            self.record.time,
            self.record.status()
        )
    }
}

/// Scheduling engine.
///
/// Requests are validated only when processed. A processed request leaves
/// the queue whether or not it produced an appointment.
#[derive(Debug)]
pub struct Scheduler {
    config: SchedulerConfig,
    patients: PatientRegistry,
    doctors: DoctorRegistry,
    queue: RequestQueue,
    schedule: ScheduleStore,
    undo: UndoStack,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl Scheduler {
    /// Initialize an empty engine with the given bounds.
    pub fn new(config: SchedulerConfig) -> Self {
        Scheduler {
            config,
            patients: PatientRegistry::new(),
            doctors: DoctorRegistry::new(),
            queue: RequestQueue::new(config.queue_capacity),
            schedule: ScheduleStore::new(config.schedule_capacity),
            undo: UndoStack::new(config.undo_capacity),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    // Patients

    /// Register a patient. Over-long names are truncated.
    pub fn add_patient(&mut self, name: &str) -> PatientId {
        self.patients.add(truncate(name, self.config.max_name_len))
    }

    /// Remove a patient. Queued requests and schedule records keep the id.
    pub fn delete_patient(&mut self, id: PatientId) -> Result<Patient> {
        self.patients.remove(id)
    }

    pub fn find_patient(&self, id: PatientId) -> Result<&Patient> {
        self.patients.find(id)
    }

    /// Patients, most recently added first.
    pub fn list_patients(&self) -> impl Iterator<Item = &Patient> + '_ {
        self.patients.list_all()
    }

    // Doctors

    /// Register a doctor. Over-long names are truncated.
    pub fn add_doctor(&mut self, name: &str) -> DoctorId {
        self.doctors.add(truncate(name, self.config.max_name_len))
    }

    pub fn find_doctor(&self, id: DoctorId) -> Result<&Doctor> {
        self.doctors.find(id)
    }

    /// Doctors in ascending id order.
    pub fn list_doctors(&self) -> impl Iterator<Item = &Doctor> + '_ {
        self.doctors.list_ordered()
    }

    // Requests

    /// Queue a request. Neither id is checked here.
    pub fn enqueue_request(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        time: &str,
    ) -> Result<RequestId> {
        let time = truncate(time, self.config.max_time_len);
        self.queue
            .enqueue(patient_id, doctor_id, time)
            .inspect_err(|e| warn!(patient = %patient_id, doctor = %doctor_id, "enqueue rejected: {}", e))
    }

    /// Pending requests, front to back.
    pub fn list_queue(&self) -> impl Iterator<Item = &Request> + '_ {
        self.queue.iter()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    // Scheduling

    /// Turn the oldest queued request into an active schedule record.
    ///
    /// The request is consumed even when it is rejected: a missing patient,
    /// a missing doctor or a full schedule store discards it for good.
    pub fn process_next(&mut self) -> Result<Scheduled> {
        let request = self.queue.dequeue()?;
        self.schedule_request(request)
            .inspect_err(|e| warn!("discarding request: {}", e))
    }

    fn schedule_request(&mut self, request: Request) -> Result<Scheduled> {
        let patient_name = self.patients.find(request.patient_id)?.name.clone();
        let doctor_name = self.doctors.find(request.doctor_id)?.name.clone();

        let record = self
            .schedule
            .append(request.patient_id, request.doctor_id, request.time)?
            .clone();

        // The appointment stands even if it cannot be undone later.
        let undo_recorded = match self.undo.push(record.id) {
            Ok(()) => true,
            Err(e) => {
                warn!(schedule = %record.id, "{}; appointment kept without undo", e);
                false
            }
        };

        info!(
            schedule = %record.id,
            request = %request.id,
            patient = %record.patient_id,
            doctor = %record.doctor_id,
            "appointment scheduled"
        );

        Ok(Scheduled {
            record,
            request_id: request.id,
            patient_name,
            doctor_name,
            undo_recorded,
        })
    }

    /// Reverse the most recently scheduled appointment still on the undo stack.
    ///
    /// Once the stack is drained, the next call reports the last reversed
    /// appointment as already undone; the call after that reports that there
    /// is nothing left to undo.
    pub fn undo_last(&mut self) -> Result<Undone> {
        let id = match self.undo.pop() {
            Ok(id) => id,
            Err(SchedulerError::StackEmpty) => {
                return Err(match self.undo.take_retired() {
                    Some(id) => SchedulerError::AlreadyUndone(id),
                    None => SchedulerError::StackEmpty,
                });
            }
            Err(e) => return Err(e),
        };

        match self.schedule.deactivate(id)? {
            Deactivation::AlreadyInactive => {
                warn!(schedule = %id, "appointment already undone");
                Err(SchedulerError::AlreadyUndone(id))
            }
            Deactivation::Deactivated => {
                self.undo.retire(id);
                let record = self.schedule.find(id)?.clone();
                info!(schedule = %id, "appointment undone");
                Ok(Undone {
                    patient_name: self.patients.name_of(record.patient_id).map(str::to_string),
                    doctor_name: self.doctors.name_of(record.doctor_id).map(str::to_string),
                    record,
                })
            }
        }
    }

    pub fn find_schedule(&self, id: ScheduleId) -> Result<&ScheduleRecord> {
        self.schedule.find(id)
    }

    /// Schedule records in creation order with names resolved now.
    pub fn list_schedule(&self) -> impl Iterator<Item = ScheduleEntry<'_>> + '_ {
        self.schedule.list_all().map(|record| ScheduleEntry {
            record,
            patient_name: self.patients.name_of(record.patient_id),
            doctor_name: self.doctors.name_of(record.doctor_id),
        })
    }

    pub fn schedule_count(&self) -> usize {
        self.schedule.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }
}
