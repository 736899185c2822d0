use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveTime};
use domain::models::{Appointment, AppointmentPriority, Doctor, NewAppointment};
use infrastructure::api_client::ApiClient;
use shared::types::Result;
use tracing::info;

/// A booking as the interactive flow collects it: separate date and time
/// fields plus the doctor the slot is with.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub department_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    pub reason: Option<String>,
    pub priority: AppointmentPriority,
}

/// Appointment booking against the doctors and appointments resources.
pub struct BookingService {
    api: ApiClient,
}

impl BookingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn doctors(&self) -> Result<Vec<Doctor>> {
        self.api.list_doctors().await
    }

    pub async fn book(&self, request: BookingRequest) -> Result<Appointment> {
        let appointment = to_new_appointment(request)?;
        let booked = self.api.create_appointment(&appointment).await?;
        info!(appointment_number = %booked.appointment_number, "appointment booked");
        Ok(booked)
    }

    pub async fn appointments_for(&self, patient_id: &str) -> Result<Vec<Appointment>> {
        self.api.patient_appointments(patient_id).await
    }
}

fn to_new_appointment(request: BookingRequest) -> Result<NewAppointment> {
    if request.patient_id.trim().is_empty() {
        bail!("a patient must be selected before booking");
    }
    if request.doctor_id.trim().is_empty() || request.department_id.trim().is_empty() {
        bail!("a doctor must be selected before booking");
    }

    let date = NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", request.date))?;
    let time = NaiveTime::parse_from_str(request.time.trim(), "%H:%M")
        .with_context(|| format!("invalid time '{}', expected HH:MM", request.time))?;
    let slot = date.and_time(time);

    Ok(NewAppointment {
        patient_id: request.patient_id,
        doctor_id: request.doctor_id,
        department_id: request.department_id,
        appointment_date: slot.format("%Y-%m-%dT%H:%M:%S").to_string(),
        reason_for_visit: request.reason,
        priority: request.priority,
    })
}
