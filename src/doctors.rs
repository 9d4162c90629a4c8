//! Doctor registry kept in ascending id order.

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{Result, SchedulerError};
use crate::models::{Doctor, DoctorId};

/// Owns every registered doctor.
///
/// Backed by a `BTreeMap` so lookups stay logarithmic even though ids only
/// ever grow. Doctors are never removed.
#[derive(Debug)]
pub struct DoctorRegistry {
    doctors: BTreeMap<DoctorId, Doctor>,
    next_id: DoctorId,
}

impl Default for DoctorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorRegistry {
    pub fn new() -> Self {
        DoctorRegistry {
            doctors: BTreeMap::new(),
            next_id: DoctorId::FIRST,
        }
    }

    /// Register a doctor under the next free id.
    pub fn add(&mut self, name: String) -> DoctorId {
        let id = self.next_id;
        self.next_id = id.next();
        debug!(doctor = %id, %name, "doctor added");
        self.doctors.insert(id, Doctor { id, name });
        id
    }

    pub fn find(&self, id: DoctorId) -> Result<&Doctor> {
        self.doctors
            .get(&id)
            .ok_or(SchedulerError::DoctorNotFound(id))
    }

    pub fn contains(&self, id: DoctorId) -> bool {
        self.doctors.contains_key(&id)
    }

    /// Look up a doctor's name, if still registered.
    pub fn name_of(&self, id: DoctorId) -> Option<&str> {
        self.doctors.get(&id).map(|d| d.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    /// Doctors in ascending id order. Each call starts a fresh traversal.
    pub fn list_ordered(&self) -> impl Iterator<Item = &Doctor> + '_ {
        self.doctors.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut registry = DoctorRegistry::new();
        assert_eq!(registry.add("Dr. Lee".to_string()), DoctorId(1));
        assert_eq!(registry.add("Dr. Kaur".to_string()), DoctorId(2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn find_reports_missing_doctor() {
        let mut registry = DoctorRegistry::new();
        registry.add("Dr. Lee".to_string());

        assert_eq!(registry.find(DoctorId(1)).unwrap().name, "Dr. Lee");
        assert_eq!(
            registry.find(DoctorId(9)),
            Err(SchedulerError::DoctorNotFound(DoctorId(9)))
        );
        assert_eq!(registry.name_of(DoctorId(9)), None);
    }

    #[test]
    fn listing_is_restartable() {
        let mut registry = DoctorRegistry::new();
        for name in ["A", "B", "C"] {
            registry.add(name.to_string());
        }

        let first: Vec<_> = registry.list_ordered().map(|d| d.id).collect();
        let second: Vec<_> = registry.list_ordered().map(|d| d.id).collect();
        assert_eq!(first, vec![DoctorId(1), DoctorId(2), DoctorId(3)]);
        assert_eq!(first, second);
    }
}
