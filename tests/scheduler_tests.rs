//! Scheduler integration tests.

use hospital_scheduler::{
    DoctorId, PatientId, RequestId, ScheduleId, Scheduler, SchedulerConfig, SchedulerError,
    DELETED_PLACEHOLDER,
};

fn scheduler_with(patients: &[&str], doctors: &[&str]) -> Scheduler {
    let mut scheduler = Scheduler::default();
    for name in patients {
        scheduler.add_patient(name);
    }
    for name in doctors {
        scheduler.add_doctor(name);
    }
    scheduler
}

#[test]
fn test_alice_and_dr_lee_walkthrough() {
    let mut scheduler = Scheduler::default();

    let alice = scheduler.add_patient("Alice");
    let lee = scheduler.add_doctor("Dr. Lee");
    assert_eq!(alice, PatientId(1));
    assert_eq!(lee, DoctorId(1));

    let request = scheduler
        .enqueue_request(alice, lee, "2024-01-01 10:00")
        .unwrap();
    assert_eq!(request, RequestId(1));

    let scheduled = scheduler.process_next().unwrap();
    assert_eq!(scheduled.record.id, ScheduleId(1));
    assert!(scheduled.record.is_active());
    assert_eq!(scheduled.request_id, RequestId(1));
    assert!(scheduled.undo_recorded);
    assert_eq!(
        scheduled.to_string(),
        "Scheduled appointment s1: patient Alice (p1) -> doctor Dr. Lee (d1) at 2024-01-01 10:00 (from req #1)"
    );

    let rows: Vec<String> = scheduler.list_schedule().map(|e| e.to_string()).collect();
    assert_eq!(
        rows,
        vec!["s1: Alice (p1) -> Dr. Lee (d1) at 2024-01-01 10:00 [active]"]
    );

    let undone = scheduler.undo_last().unwrap();
    assert_eq!(undone.record.id, ScheduleId(1));
    assert!(!undone.record.is_active());
    assert!(!scheduler.find_schedule(ScheduleId(1)).unwrap().is_active());

    assert_eq!(
        scheduler.undo_last(),
        Err(SchedulerError::AlreadyUndone(ScheduleId(1)))
    );
    assert!(!scheduler.find_schedule(ScheduleId(1)).unwrap().is_active());

    assert_eq!(scheduler.undo_last(), Err(SchedulerError::StackEmpty));
}

#[test]
fn test_process_with_empty_queue() {
    let mut scheduler = scheduler_with(&["Alice"], &["Dr. Lee"]);

    assert_eq!(scheduler.process_next(), Err(SchedulerError::QueueEmpty));
    assert_eq!(scheduler.schedule_count(), 0);
    assert_eq!(scheduler.undo_depth(), 0);
}

#[test]
fn test_unknown_doctor_discards_request() {
    let mut scheduler = scheduler_with(&["Alice"], &["Dr. Lee"]);
    scheduler
        .enqueue_request(PatientId(1), DoctorId(42), "tomorrow")
        .unwrap();

    assert_eq!(
        scheduler.process_next(),
        Err(SchedulerError::DoctorNotFound(DoctorId(42)))
    );
    assert_eq!(scheduler.pending_count(), 0);
    assert_eq!(scheduler.schedule_count(), 0);
}

#[test]
fn test_unknown_patient_discards_request() {
    let mut scheduler = scheduler_with(&["Alice"], &["Dr. Lee"]);
    scheduler
        .enqueue_request(PatientId(9), DoctorId(1), "tomorrow")
        .unwrap();
    scheduler
        .enqueue_request(PatientId(1), DoctorId(1), "later")
        .unwrap();

    assert_eq!(
        scheduler.process_next(),
        Err(SchedulerError::PatientNotFound(PatientId(9)))
    );
    // The next request is processed normally; the failed one is gone.
    let scheduled = scheduler.process_next().unwrap();
    assert_eq!(scheduled.request_id, RequestId(2));
    assert_eq!(scheduled.record.id, ScheduleId(1));
}

#[test]
fn test_full_schedule_store_discards_request() {
    let config = SchedulerConfig::default().with_schedule_capacity(1);
    let mut scheduler = Scheduler::new(config);
    let p = scheduler.add_patient("Alice");
    let d = scheduler.add_doctor("Dr. Lee");

    scheduler.enqueue_request(p, d, "mon").unwrap();
    scheduler.enqueue_request(p, d, "tue").unwrap();
    scheduler.process_next().unwrap();

    assert_eq!(
        scheduler.process_next(),
        Err(SchedulerError::ScheduleStoreFull { capacity: 1 })
    );
    assert_eq!(scheduler.pending_count(), 0);
    assert_eq!(scheduler.schedule_count(), 1);
    assert_eq!(scheduler.undo_depth(), 1);
}

#[test]
fn test_queue_full_leaves_queue_untouched() {
    let mut scheduler = scheduler_with(&["Alice"], &["Dr. Lee"]);
    for n in 0..8 {
        scheduler
            .enqueue_request(PatientId(1), DoctorId(1), &format!("slot {}", n))
            .unwrap();
    }

    let before: Vec<RequestId> = scheduler.list_queue().map(|r| r.id).collect();
    assert_eq!(
        scheduler.enqueue_request(PatientId(1), DoctorId(1), "overflow"),
        Err(SchedulerError::QueueFull { capacity: 8 })
    );
    let after: Vec<RequestId> = scheduler.list_queue().map(|r| r.id).collect();
    assert_eq!(before, after);
}

#[test]
fn test_undo_targets_most_recent_record_only() {
    let mut scheduler = scheduler_with(&["Alice", "Bob"], &["Dr. Lee"]);
    scheduler
        .enqueue_request(PatientId(1), DoctorId(1), "9:00")
        .unwrap();
    scheduler
        .enqueue_request(PatientId(2), DoctorId(1), "9:30")
        .unwrap();
    scheduler.process_next().unwrap();
    scheduler.process_next().unwrap();

    let undone = scheduler.undo_last().unwrap();
    assert_eq!(undone.record.id, ScheduleId(2));
    assert!(scheduler.find_schedule(ScheduleId(1)).unwrap().is_active());
    assert!(!scheduler.find_schedule(ScheduleId(2)).unwrap().is_active());

    let undone = scheduler.undo_last().unwrap();
    assert_eq!(undone.record.id, ScheduleId(1));
    assert_eq!(
        scheduler.undo_last(),
        Err(SchedulerError::AlreadyUndone(ScheduleId(1)))
    );
    assert_eq!(scheduler.undo_last(), Err(SchedulerError::StackEmpty));
}

#[test]
fn test_undo_on_fresh_engine() {
    let mut scheduler = Scheduler::default();
    assert_eq!(scheduler.undo_last(), Err(SchedulerError::StackEmpty));
}

#[test]
fn test_deleted_patient_shows_placeholder() {
    let mut scheduler = scheduler_with(&["Alice"], &["Dr. Lee"]);
    scheduler
        .enqueue_request(PatientId(1), DoctorId(1), "noon")
        .unwrap();
    scheduler.process_next().unwrap();

    let removed = scheduler.delete_patient(PatientId(1)).unwrap();
    assert_eq!(removed.name, "Alice");

    let entries: Vec<_> = scheduler.list_schedule().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].patient_name, None);
    assert_eq!(entries[0].patient_label(), DELETED_PLACEHOLDER);
    assert_eq!(
        entries[0].to_string(),
        "s1: [deleted] (p1) -> Dr. Lee (d1) at noon [active]"
    );

    let undone = scheduler.undo_last().unwrap();
    assert_eq!(undone.patient_name, None);
    assert_eq!(undone.doctor_name.as_deref(), Some("Dr. Lee"));
    assert_eq!(
        undone.to_string(),
        "Undid appointment s1 (patient [deleted] p1 doctor Dr. Lee d1 at noon)"
    );
}

#[test]
fn test_delete_does_not_cascade_into_queue() {
    let mut scheduler = scheduler_with(&["Alice"], &["Dr. Lee"]);
    scheduler
        .enqueue_request(PatientId(1), DoctorId(1), "noon")
        .unwrap();
    scheduler.delete_patient(PatientId(1)).unwrap();

    assert_eq!(scheduler.pending_count(), 1);
    assert_eq!(
        scheduler.delete_patient(PatientId(1)),
        Err(SchedulerError::PatientNotFound(PatientId(1)))
    );
    assert_eq!(
        scheduler.process_next(),
        Err(SchedulerError::PatientNotFound(PatientId(1)))
    );
}

#[test]
fn test_full_undo_stack_keeps_appointment() {
    let config = SchedulerConfig::default().with_undo_capacity(1);
    let mut scheduler = Scheduler::new(config);
    let p = scheduler.add_patient("Alice");
    let d = scheduler.add_doctor("Dr. Lee");
    scheduler.enqueue_request(p, d, "a").unwrap();
    scheduler.enqueue_request(p, d, "b").unwrap();

    assert!(scheduler.process_next().unwrap().undo_recorded);
    let second = scheduler.process_next().unwrap();
    assert!(!second.undo_recorded);
    assert!(second.record.is_active());
    assert_eq!(scheduler.schedule_count(), 2);

    // Only the first appointment can be reversed.
    assert_eq!(scheduler.undo_last().unwrap().record.id, ScheduleId(1));
    assert!(scheduler.find_schedule(ScheduleId(2)).unwrap().is_active());
}

#[test]
fn test_long_text_is_truncated() {
    let config = SchedulerConfig::default()
        .with_max_name_len(5)
        .with_max_time_len(4);
    let mut scheduler = Scheduler::new(config);

    let p = scheduler.add_patient("Bartholomew");
    let d = scheduler.add_doctor("Dr. Strange");
    scheduler.enqueue_request(p, d, "2024-01-01").unwrap();

    assert_eq!(scheduler.find_patient(p).unwrap().name, "Barth");
    assert_eq!(scheduler.find_doctor(d).unwrap().name, "Dr. S");
    assert_eq!(scheduler.list_queue().next().unwrap().time, "2024");
}

#[test]
fn test_patients_listed_newest_first() {
    let scheduler = scheduler_with(&["Alice", "Bob", "Carol"], &[]);
    let names: Vec<&str> = scheduler
        .list_patients()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Carol", "Bob", "Alice"]);
}

#[test]
fn test_independent_engines() {
    let mut first = scheduler_with(&["Alice"], &["Dr. Lee"]);
    let second = Scheduler::default();

    first
        .enqueue_request(PatientId(1), DoctorId(1), "now")
        .unwrap();
    assert_eq!(first.pending_count(), 1);
    assert_eq!(second.pending_count(), 0);
    assert_eq!(second.list_doctors().count(), 0);
}
