use anyhow::bail;
use domain::models::{NewPatient, Patient, PatientQuery};
use infrastructure::api_client::ApiClient;
use shared::types::Result;
use tracing::info;

pub const MAX_PATIENT_AGE: u32 = 120;

/// Patient registration and lookup over the backend's patients resource.
pub struct ReceptionService {
    api: ApiClient,
}

impl ReceptionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Validates locally before going to the wire.
    pub async fn register(&self, patient: NewPatient) -> Result<Patient> {
        validate_new_patient(&patient)?;
        let registered = self.api.register_patient(&patient).await?;
        info!(patient_id = %registered.patient_id, "patient registered");
        Ok(registered)
    }

    pub async fn lookup(&self, query: &PatientQuery) -> Result<Vec<Patient>> {
        if query.is_empty() {
            bail!("provide an email, phone number, or patient id to look up");
        }
        self.api.lookup_patients(query).await
    }
}

fn validate_new_patient(patient: &NewPatient) -> Result<()> {
    if patient.first_name.trim().is_empty() || patient.last_name.trim().is_empty() {
        bail!("first and last name are required");
    }
    if patient.email.trim().is_empty() || !patient.email.contains('@') {
        bail!("a valid email address is required");
    }
    if patient.phone.trim().is_empty() {
        bail!("a phone number is required");
    }
    if patient.age == 0 || patient.age > MAX_PATIENT_AGE {
        bail!("age must be between 1 and {}", MAX_PATIENT_AGE);
    }
    Ok(())
}
