//! Wire-contract checks: what we send matches what the backend expects, and
//! realistic backend payloads decode into our models.

use domain::backend::ChatTurn;
use domain::models::{
    Appointment, AppointmentPriority, AppointmentStatus, DashboardOverview, EmergencyCases,
    NewAppointment, Patient,
};
use serde_json::json;

#[test]
fn chat_turn_serializes_to_the_endpoint_shape() {
    let turn = ChatTurn {
        message: "I have a fever".into(),
        session_id: "abc123".into(),
    };
    let value = serde_json::to_value(&turn).unwrap();
    assert_eq!(
        value,
        json!({"message": "I have a fever", "session_id": "abc123"})
    );
}

#[test]
fn new_appointment_serializes_with_snake_case_fields() {
    let appointment = NewAppointment {
        patient_id: "p-1".into(),
        doctor_id: "d-1".into(),
        department_id: "dep-1".into(),
        appointment_date: "2026-03-02T14:30:00".into(),
        reason_for_visit: Some("follow-up".into()),
        priority: AppointmentPriority::Urgent,
    };
    let value = serde_json::to_value(&appointment).unwrap();
    assert_eq!(value["appointment_date"], "2026-03-02T14:30:00");
    assert_eq!(value["reason_for_visit"], "follow-up");
    assert_eq!(value["priority"], "urgent");
}

#[test]
fn patient_decodes_from_a_backend_row_with_extra_fields() {
    let payload = json!({
        "id": "row-1",
        "patient_id": "PAT-2026-0042",
        "first_name": "Asha",
        "last_name": "Rao",
        "email": "asha@example.com",
        "phone": "555-0100",
        "age": 34,
        "gender": "female",
        "has_emergency_flag": true,
        "emergency_description": "chest pain",
        "registration_date": "2026-03-01T09:12:00",
        "created_at": "2026-03-01T09:12:00",
        "updated_at": "2026-03-01T09:12:00"
    });
    let patient: Patient = serde_json::from_value(payload).unwrap();
    assert_eq!(patient.patient_id, "PAT-2026-0042");
    assert!(patient.has_emergency_flag);
    assert_eq!(patient.blood_group, None);
}

#[test]
fn appointment_decodes_hyphenated_statuses() {
    let payload = json!({
        "id": "a-1",
        "appointment_number": "APT-0007",
        "patient_id": "p-1",
        "doctor_id": "d-1",
        "department_id": "dep-1",
        "appointment_date": "2026-03-02T14:30:00",
        "status": "in-progress"
    });
    let appointment: Appointment = serde_json::from_value(payload).unwrap();
    assert_eq!(appointment.status, AppointmentStatus::InProgress);
    assert_eq!(appointment.room_number, None);
}

#[test]
fn admin_views_tolerate_sparse_payloads() {
    let overview: DashboardOverview = serde_json::from_value(json!({
        "statistics": {},
        "pending_appointments": 3,
        "recent_patients": [],
        "available_doctors": 2
    }))
    .unwrap();
    assert_eq!(overview.statistics.total_patients_today, 0);
    assert_eq!(overview.pending_appointments, 3);

    let cases: EmergencyCases = serde_json::from_value(json!({"total": 0})).unwrap();
    assert_eq!(cases.total, 0);
    assert!(cases.cases.is_empty());
}
