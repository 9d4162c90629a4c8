//! Data models for the hospital scheduling engine.
//!
//! This module defines the records held by the engine's stores:
//! - Id newtypes: one monotonically assigned counter per entity kind
//! - Patient / Doctor: registered people
//! - Request: a pending scheduling request waiting in the queue
//! - ScheduleRecord: a scheduled appointment, active until undone

use chrono::{DateTime, Local};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $name {
            /// The first id handed out by a fresh counter.
            pub const FIRST: $name = $name(1);

            pub fn get(self) -> u32 {
                self.0
            }

            pub(crate) fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Patient identifier, rendered as `p<n>`.
    PatientId,
    "p"
);
entity_id!(
    /// Doctor identifier, rendered as `d<n>`.
    DoctorId,
    "d"
);
entity_id!(
    /// Request identifier, rendered as `#<n>`.
    RequestId,
    "#"
);
entity_id!(
    /// Schedule identifier, rendered as `s<n>`.
    ScheduleId,
    "s"
);

/// Represents a patient registered with the hospital.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.id.get(), self.name)
    }
}

/// Represents a doctor who can be booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.id.get(), self.name)
    }
}

/// A request to book `patient_id` with `doctor_id` at `time`.
///
/// Ids are stored by value and are not checked until the request is
/// processed. `time` is free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: RequestId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub time: String,
    pub created_at: DateTime<Local>,
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {} -> {}  @ {}",
            self.id, self.patient_id, self.doctor_id, self.time
        )
    }
}

/// A scheduled appointment.
///
/// Everything except the active flag is fixed at creation. Once cleared the
/// flag never comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRecord {
    pub id: ScheduleId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub time: String,
    pub created_at: DateTime<Local>,
    pub(crate) active: bool,
}

impl ScheduleRecord {
    pub(crate) fn new(
        id: ScheduleId,
        patient_id: PatientId,
        doctor_id: DoctorId,
        time: String,
    ) -> Self {
        ScheduleRecord {
            id,
            patient_id,
            doctor_id,
            time,
            created_at: Local::now(),
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Status label used in schedule listings.
    pub fn status(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            "undone"
        }
    }
}
