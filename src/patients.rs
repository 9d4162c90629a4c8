//! Patient registry, listed newest first.

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{Result, SchedulerError};
use crate::models::{Patient, PatientId};

/// Owns every registered patient.
///
/// Ids are handed out in increasing order, so walking the map backwards
/// yields the most recently added patient first.
#[derive(Debug)]
pub struct PatientRegistry {
    patients: BTreeMap<PatientId, Patient>,
    next_id: PatientId,
}

impl Default for PatientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientRegistry {
    pub fn new() -> Self {
        PatientRegistry {
            patients: BTreeMap::new(),
            next_id: PatientId::FIRST,
        }
    }

    /// Register a patient under the next free id.
    pub fn add(&mut self, name: String) -> PatientId {
        let id = self.next_id;
        self.next_id = id.next();
        debug!(patient = %id, %name, "patient added");
        self.patients.insert(id, Patient { id, name });
        id
    }

    /// Remove a patient and return the record.
    ///
    /// Requests and schedule records naming this patient are left alone and
    /// will show a placeholder from now on.
    pub fn remove(&mut self, id: PatientId) -> Result<Patient> {
        let patient = self
            .patients
            .remove(&id)
            .ok_or(SchedulerError::PatientNotFound(id))?;
        debug!(patient = %id, "patient removed");
        Ok(patient)
    }

    pub fn find(&self, id: PatientId) -> Result<&Patient> {
        self.patients
            .get(&id)
            .ok_or(SchedulerError::PatientNotFound(id))
    }

    pub fn contains(&self, id: PatientId) -> bool {
        self.patients.contains_key(&id)
    }

    /// Look up a patient's name, if still registered.
    pub fn name_of(&self, id: PatientId) -> Option<&str> {
        self.patients.get(&id).map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn list_all(&self) -> impl Iterator<Item = &Patient> + '_ {
        self.patients.values().rev()
    }
}
