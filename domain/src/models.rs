//! Wire types for the hospital backend's REST resources.
//!
//! Timestamps arrive as ISO 8601 strings and are kept as strings; the client
//! only displays them. Unknown fields in responses are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentPriority {
    Normal,
    Urgent,
    Emergency,
}

impl Default for AppointmentPriority {
    fn default() -> Self {
        Self::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    #[serde(rename = "in-progress")]
    InProgress,
    Completed,
    Cancelled,
    Rescheduled,
}

/// Registration payload for `POST /patients/register`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub gender: Option<Gender>,
    pub blood_group: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    pub has_emergency_flag: bool,
    pub emergency_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Patient {
    pub id: String,
    /// Human-facing registration number, distinct from the row id.
    pub patient_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub has_emergency_flag: bool,
    #[serde(default)]
    pub emergency_description: Option<String>,
    #[serde(default)]
    pub registration_date: Option<String>,
    #[serde(default)]
    pub last_visit_date: Option<String>,
}

/// Lookup filter for `POST /patients/lookup`; at least one field must be set.
#[derive(Debug, Clone, Default)]
pub struct PatientQuery {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub patient_id: Option<String>,
}

impl PatientQuery {
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn by_phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Self::default()
        }
    }

    pub fn by_patient_id(patient_id: impl Into<String>) -> Self {
        Self {
            patient_id: Some(patient_id.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.patient_id.is_none()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub department_id: String,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub consultation_fee: Option<i64>,
    #[serde(default)]
    pub available_days: Option<String>,
    #[serde(default)]
    pub is_on_leave: bool,
}

/// Booking payload for `POST /appointments/`. The date travels as RFC 3339.
#[derive(Debug, Clone, Serialize)]
pub struct NewAppointment {
    pub patient_id: String,
    pub doctor_id: String,
    pub department_id: String,
    pub appointment_date: String,
    pub reason_for_visit: Option<String>,
    pub priority: AppointmentPriority,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub appointment_number: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub department_id: String,
    pub appointment_date: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub reason_for_visit: Option<String>,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Per-day counters embedded in the dashboard overview.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HospitalStatistics {
    #[serde(default)]
    pub statistic_date: Option<String>,
    #[serde(default)]
    pub total_patients_today: i64,
    #[serde(default)]
    pub total_appointments_today: i64,
    #[serde(default)]
    pub emergency_cases: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardOverview {
    #[serde(default)]
    pub statistics: HospitalStatistics,
    #[serde(default)]
    pub pending_appointments: i64,
    #[serde(default)]
    pub recent_patients: Vec<Patient>,
    #[serde(default)]
    pub available_doctors: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmergencyCases {
    pub total: i64,
    #[serde(default)]
    pub cases: Vec<Appointment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatientTotal {
    pub total_patients: i64,
}
